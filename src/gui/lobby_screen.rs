//! Lobby Screen
//!
//! Owner of an external modal request. The lobby draws its own body, so it
//! presents an [`External`](crate::modal::Presentation::External) request
//! to claim its place in the stack, and is responsible for mounting and
//! unmounting its content alongside that request.

use crate::modal::{ContentSurface, ModalEngine, Request, priority};
use crate::text::{draw_text, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Request id the lobby presents under
pub const LOBBY_ID: &str = "lobby_screen";

pub struct LobbyScreen {
    mounted: bool,
    players: Vec<String>,
}

impl LobbyScreen {
    pub fn new() -> Self {
        LobbyScreen {
            mounted: false,
            players: Vec::new(),
        }
    }

    pub fn set_players(&mut self, players: Vec<String>) {
        self.players = players;
    }

    /// Mount the lobby and claim the stack slot
    pub fn mount<S: ContentSurface>(&mut self, engine: &mut ModalEngine<S>) {
        self.mounted = true;
        engine.present(Request::external(LOBBY_ID, priority::LOW));
    }

    /// Release the stack slot and unmount
    pub fn unmount<S: ContentSurface>(&mut self, engine: &mut ModalEngine<S>) {
        engine.dismiss(LOBBY_ID);
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Draw the lobby body if mounted and currently the visible request
    pub fn render<S: ContentSurface>(
        &self,
        canvas: &mut Canvas<Window>,
        engine: &ModalEngine<S>,
    ) -> Result<(), String> {
        let on_top = engine.top().is_some_and(|top| top.id == LOBBY_ID);
        if !self.mounted || !on_top {
            return Ok(());
        }

        let (width, height) = canvas.logical_size();
        let banner = Rect::new(40, 40, width.saturating_sub(80), height.saturating_sub(80));
        canvas.set_draw_color(Color::RGB(24, 40, 56));
        canvas.fill_rect(banner)?;

        let title = "LOBBY";
        draw_text(
            canvas,
            title,
            (width.saturating_sub(text_width(title, 4)) / 2) as i32,
            60,
            Color::RGB(220, 220, 240),
            4,
        )?;

        for (i, player) in self.players.iter().enumerate() {
            draw_text(canvas, player, 80, 120 + i as i32 * 20, Color::RGB(160, 160, 170), 2)?;
        }

        draw_text(
            canvas,
            "TAB - NEXT SCREEN",
            80,
            height as i32 - 70,
            Color::RGB(140, 140, 150),
            1,
        )?;

        Ok(())
    }
}

impl Default for LobbyScreen {
    fn default() -> Self {
        Self::new()
    }
}
