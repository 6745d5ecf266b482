//! Modal Request Types
//!
//! A [`Request`] describes one pending presentation. Requests are never
//! mutated in place: a producer that wants to change one presents a new
//! value under the same id and the stack swaps it in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One selectable action on a modal
///
/// Position in the owning request's action list matters: the first action
/// answers to `1` and `y`, the second to `2` and `n`, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalAction {
    pub id: String,
    pub label: String,
}

impl ModalAction {
    /// Creates an action with the given id and display label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        ModalAction {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// How a request's body gets onto the screen
///
/// `Native` bodies are drawn by the engine into the shared content area.
/// `External` bodies belong to another component, which mounts its own
/// content when the request is presented and removes it on dismissal. The
/// engine only uses an external request for ordering and input gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Presentation {
    Native {
        text: String,
        #[serde(default)]
        actions: Vec<ModalAction>,
    },
    External,
}

/// A pending modal presentation
///
/// # Example
///
/// ```ignore
/// use modal_stack::modal::{priority, ModalAction, Request};
///
/// let request = Request::native(
///     "start_game",
///     priority::MEDIUM,
///     "Start the game?",
///     vec![ModalAction::new("yes", "Yes"), ModalAction::new("no", "No")],
/// );
///
/// // Lobby screen mounts its own content, but must not block input
/// let lobby = Request::external("lobby", priority::LOW).with_block_input(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub priority: i32,
    pub presentation: Presentation,

    /// Suppress gameplay input while this request is on top
    #[serde(default = "default_block_input")]
    pub block_input: bool,

    /// Per-request key bindings. Carried along but not interpreted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkeys: Option<HashMap<String, String>>,
}

fn default_block_input() -> bool {
    true
}

impl Request {
    /// Creates a request whose text and actions the engine renders itself
    pub fn native(
        id: impl Into<String>,
        priority: i32,
        text: impl Into<String>,
        actions: Vec<ModalAction>,
    ) -> Self {
        Request {
            id: id.into(),
            priority,
            presentation: Presentation::Native {
                text: text.into(),
                actions,
            },
            block_input: true,
            hotkeys: None,
        }
    }

    /// Creates a request whose body is mounted by an outside owner
    pub fn external(id: impl Into<String>, priority: i32) -> Self {
        Request {
            id: id.into(),
            priority,
            presentation: Presentation::External,
            block_input: true,
            hotkeys: None,
        }
    }

    pub fn with_block_input(mut self, block_input: bool) -> Self {
        self.block_input = block_input;
        self
    }

    pub fn with_hotkeys(mut self, hotkeys: HashMap<String, String>) -> Self {
        self.hotkeys = Some(hotkeys);
        self
    }

    /// Actions in display order (always empty for external requests)
    pub fn actions(&self) -> &[ModalAction] {
        match &self.presentation {
            Presentation::Native { actions, .. } => actions,
            Presentation::External => &[],
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.presentation, Presentation::External)
    }
}
