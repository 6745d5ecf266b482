//! Modal presentation engine for a multiplayer game client
//!
//! Competing UI requests (lobby, start confirmation, disconnect notices,
//! server shutdown warnings) go into a priority-ordered stack. Only the top
//! request is shown, and the engine publishes whether gameplay input may be
//! sent while it is up.
//!
//! # Modules
//!
//! - [`modal`]: requests, the priority stack, substate tables, rendering
//!   contract, hotkeys and the [`modal::ModalEngine`] service
//! - [`session`]: where action selections are sent
//! - [`route`]: current-screen accessor used for input gating
//! - [`countdown`]: start-game countdown producer
//! - [`config`]: JSON configuration
//!
//! With the `sdl` feature enabled, `gui`, `input_system` and `text` provide
//! an SDL2 host for the engine (used by the `modal-demo` binary).

pub mod config;
pub mod countdown;
pub mod modal;
pub mod route;
pub mod session;

#[cfg(feature = "sdl")]
pub mod gui;
#[cfg(feature = "sdl")]
pub mod input_system;
#[cfg(feature = "sdl")]
pub mod text;
