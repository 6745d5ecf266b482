//! Modal Presentation Engine
//!
//! Many systems want the screen at once: the lobby, the start-game
//! confirmation, a disconnect notice, a server shutdown warning. This module
//! keeps them in a priority-ordered stack, shows only the top one, and
//! publishes whether gameplay input may be sent.
//!
//! # Architecture
//!
//! - `request`: [`Request`], [`ModalAction`] and the [`Presentation`] variant
//! - `priority`: the LOW / MEDIUM / HIGH / CRITICAL tiers
//! - `stack`: [`PriorityStack`], ordering and upsert rules
//! - `substate`: substate → tier / default action tables
//! - `renderer`: [`ContentSurface`] and the input gate computation
//! - `content`: [`ContentArea`], a retained render target the host draws
//! - `hotkeys`: pure key → action dispatch
//! - `engine`: [`ModalEngine`], the service producers and consumers share
//!
//! # Example Usage
//!
//! ```ignore
//! use modal_stack::modal::{priority, ModalAction, ModalEngine, Request};
//!
//! engine.present(Request::native(
//!     "start_game",
//!     priority::MEDIUM,
//!     "Start the game?",
//!     vec![ModalAction::new("yes", "Yes"), ModalAction::new("no", "No")],
//! ));
//!
//! if engine.input_allowed() {
//!     session.send_move(direction);
//! }
//! ```

pub mod content;
pub mod engine;
pub mod hotkeys;
pub mod priority;
pub mod renderer;
pub mod request;
pub mod stack;
pub mod substate;

pub use content::{ContentArea, Control};
pub use engine::{GateObserver, ModalEngine};
pub use hotkeys::dispatch_hotkey;
pub use priority::PriorityTier;
pub use renderer::{ContentSurface, compute_gate, render_top};
pub use request::{ModalAction, Presentation, Request};
pub use stack::PriorityStack;
pub use substate::{
    Substate, SubstatePayload, default_actions_for, priority_for_substate, substate_request,
};
