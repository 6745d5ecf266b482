//! Screen-Space GUI
//!
//! SDL2 drawing for the modal engine's output. Everything here reads engine
//! state and draws it; nothing here decides what is visible.
//!
//! # Available Components
//!
//! - [`ModalPanel`] - draws the shared content area and hit-tests its buttons
//! - [`LobbyScreen`] - an external request owner that draws its own body
//!
//! # Example Usage
//!
//! ```ignore
//! use modal_stack::gui::ModalPanel;
//!
//! let panel = ModalPanel::new(config.panel.clone());
//!
//! // Render
//! if let Some(area) = engine.surface() {
//!     let native_on_top = engine.top().is_some_and(|top| !top.is_external());
//!     panel.render(&mut canvas, area, native_on_top)?;
//! }
//! ```

pub mod lobby_screen;
pub mod modal_panel;

pub use lobby_screen::{LOBBY_ID, LobbyScreen};
pub use modal_panel::ModalPanel;
