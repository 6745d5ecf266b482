//! Hotkey Dispatch
//!
//! Maps a key press onto one of the top request's actions. Positional
//! digits come first (`1` is the first action), then `y`/`n` as shortcuts
//! for the first and second action.
//!
//! This is a pure function over the top request. The engine and the host
//! input adapter do the wiring; see
//! [`ModalEngine::handle_key`](super::ModalEngine::handle_key).

use super::request::{ModalAction, Request};

/// Pick the action a key press selects, if any
///
/// `key` is the host's key name: `"1"`..`"9"`, `"y"`, `"N"`, etc.
/// Returns `None` for keys this dispatcher doesn't claim, so other consumers
/// can still handle them.
pub fn dispatch_hotkey<'a>(top: Option<&'a Request>, key: &str) -> Option<&'a ModalAction> {
    let actions = top?.actions();

    if let Ok(position) = key.parse::<usize>() {
        if (1..=actions.len()).contains(&position) {
            return actions.get(position - 1);
        }
    }

    match key {
        "y" | "Y" => actions.first(),
        "n" | "N" => actions.get(1),
        _ => None,
    }
}
