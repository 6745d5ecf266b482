//! Start-Game Countdown
//!
//! A producer that keeps a "Game starts in N..." modal up while the room
//! counts down. The engine has no timers of its own, so the host calls
//! [`StartCountdown::tick`] once per frame and the countdown re-presents or
//! dismisses its request as the seconds roll over.
//!
//! # Example
//!
//! ```ignore
//! let mut countdown = StartCountdown::new(Duration::from_secs(5));
//! let expired = countdown.start(&mut engine, Instant::now());
//!
//! // In game loop
//! if expired || countdown.tick(&mut engine, Instant::now()) {
//!     route.set("game");
//!     engine.on_route_changed();
//! }
//! ```

use crate::modal::{ContentSurface, ModalAction, ModalEngine, Request, priority};
use std::time::{Duration, Instant};

/// Request id the countdown presents under
pub const COUNTDOWN_ID: &str = "start_countdown";

pub struct StartCountdown {
    duration: Duration,
    started_at: Option<Instant>,
    shown_seconds: Option<u64>,
}

impl StartCountdown {
    pub fn new(duration: Duration) -> Self {
        StartCountdown {
            duration,
            started_at: None,
            shown_seconds: None,
        }
    }

    /// Start (or restart) the countdown and show the first second
    ///
    /// Returns `true` if the countdown expired immediately (zero duration);
    /// later ticks will not report that expiry again.
    pub fn start<S: ContentSurface>(&mut self, engine: &mut ModalEngine<S>, now: Instant) -> bool {
        log::info!("start countdown: {}s", self.duration.as_secs());
        self.started_at = Some(now);
        self.shown_seconds = None;
        self.tick(engine, now)
    }

    /// Advance to `now`
    ///
    /// Returns `true` exactly once, on the tick where the countdown runs
    /// out. If the user cancelled the modal the countdown stops silently.
    pub fn tick<S: ContentSurface>(&mut self, engine: &mut ModalEngine<S>, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        if self.shown_seconds.is_some() && !engine.stack().contains(COUNTDOWN_ID) {
            log::info!("countdown cancelled");
            self.reset();
            return false;
        }

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            self.reset();
            engine.dismiss(COUNTDOWN_ID);
            return true;
        }

        let remaining = (self.duration - elapsed).as_millis().div_ceil(1000) as u64;
        if self.shown_seconds != Some(remaining) {
            self.shown_seconds = Some(remaining);
            engine.present(Request::native(
                COUNTDOWN_ID,
                priority::MEDIUM,
                format!("Game starts in {}...", remaining),
                vec![ModalAction::new("cancel", "Cancel")],
            ));
        }

        false
    }

    /// Stop the countdown and take its modal down
    pub fn cancel<S: ContentSurface>(&mut self, engine: &mut ModalEngine<S>) {
        if self.is_running() {
            self.reset();
            engine.dismiss(COUNTDOWN_ID);
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn reset(&mut self) {
        self.started_at = None;
        self.shown_seconds = None;
    }
}
