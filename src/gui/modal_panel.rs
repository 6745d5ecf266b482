//! Modal Panel
//!
//! Draws a [`ContentArea`] as a centered dialog box: dimmed backdrop, body
//! text, and a row of action buttons labelled with their hotkey digit.
//! Also maps mouse clicks back onto the button that was hit.

use crate::config::PanelStyle;
use crate::modal::ContentArea;
use crate::text::{GLYPH_ADVANCE, GLYPH_HEIGHT, draw_text, text_width, wrap_text};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const PADDING: u32 = 16;
const BUTTON_HEIGHT: u32 = 28;
const BUTTON_GAP: u32 = 12;
const BODY_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 2;

fn rgb(color: [u8; 3]) -> Color {
    Color::RGB(color[0], color[1], color[2])
}

pub struct ModalPanel {
    style: PanelStyle,
}

impl ModalPanel {
    pub fn new(style: PanelStyle) -> Self {
        ModalPanel { style }
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    /// Dialog box rectangle, centered on a `screen` of (width, height)
    pub fn panel_rect(&self, screen: (u32, u32)) -> Rect {
        let width = self.style.width.min(screen.0);
        let height = self.style.height.min(screen.1);
        Rect::new(
            ((screen.0 - width) / 2) as i32,
            ((screen.1 - height) / 2) as i32,
            width,
            height,
        )
    }

    /// One rectangle per control, left to right along the bottom of the panel
    pub fn control_rects(&self, area: &ContentArea, screen: (u32, u32)) -> Vec<Rect> {
        let count = area.controls().len() as u32;
        if count == 0 {
            return Vec::new();
        }

        let panel = self.panel_rect(screen);
        let usable = panel.width().saturating_sub(PADDING * 2 + BUTTON_GAP * (count - 1));
        let button_width = (usable / count).max(1);
        let y = panel.bottom() - (PADDING + BUTTON_HEIGHT) as i32;

        (0..count)
            .map(|i| {
                let x = panel.x() + (PADDING + i * (button_width + BUTTON_GAP)) as i32;
                Rect::new(x, y, button_width, BUTTON_HEIGHT)
            })
            .collect()
    }

    /// Index of the control under (`x`, `y`), if the panel is showing one
    ///
    /// `draw_body` must match what was passed to [`ModalPanel::render`]:
    /// controls that were not drawn cannot be clicked.
    pub fn hit_test(
        &self,
        area: &ContentArea,
        draw_body: bool,
        screen: (u32, u32),
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if !area.is_visible() || !draw_body {
            return None;
        }
        self.control_rects(area, screen)
            .iter()
            .position(|rect| rect.contains_point((x, y)))
    }

    /// Render the backdrop and, when `draw_body` is set, the dialog itself
    ///
    /// The host passes `draw_body = false` while an external request is on
    /// top: its owner draws the body instead.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        area: &ContentArea,
        draw_body: bool,
    ) -> Result<(), String> {
        if area.is_dimmed() {
            canvas.set_blend_mode(BlendMode::Blend);
            canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
            canvas.fill_rect(None)?;
            canvas.set_blend_mode(BlendMode::None);
        }

        if !area.is_visible() || !draw_body {
            return Ok(());
        }

        let screen = canvas.logical_size();
        let panel = self.panel_rect(screen);

        canvas.set_draw_color(rgb(self.style.background));
        canvas.fill_rect(panel)?;
        canvas.set_draw_color(rgb(self.style.border));
        canvas.draw_rect(panel)?;

        if let Some(body) = area.body() {
            let max_chars = (panel.width().saturating_sub(PADDING * 2) / (GLYPH_ADVANCE * BODY_SCALE)) as usize;
            let line_height = ((GLYPH_HEIGHT + 3) * BODY_SCALE) as i32;
            for (i, line) in wrap_text(body, max_chars).iter().enumerate() {
                draw_text(
                    canvas,
                    line,
                    panel.x() + PADDING as i32,
                    panel.y() + PADDING as i32 + i as i32 * line_height,
                    rgb(self.style.text),
                    BODY_SCALE,
                )?;
            }
        }

        let rects = self.control_rects(area, screen);
        for (i, (control, rect)) in area.controls().iter().zip(rects).enumerate() {
            canvas.set_draw_color(rgb(self.style.control));
            canvas.fill_rect(rect)?;

            let label = format!("{} {}", i + 1, control.action.label);
            let label_x = rect.x() + (rect.width().saturating_sub(text_width(&label, LABEL_SCALE)) / 2) as i32;
            let label_y = rect.y() + (rect.height().saturating_sub(GLYPH_HEIGHT * LABEL_SCALE) / 2) as i32;
            draw_text(canvas, &label, label_x, label_y, rgb(self.style.control_text), LABEL_SCALE)?;
        }

        Ok(())
    }
}
