//! Retained Content Area
//!
//! A plain-data [`ContentSurface`] implementation. The engine writes into it;
//! the host reads it back every frame to draw, and maps clicks onto
//! [`ContentArea::control`] to find out which action was hit.

use super::renderer::ContentSurface;
use super::request::ModalAction;

/// A rendered action control, bound to the request that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub modal_id: String,
    pub action: ModalAction,
}

#[derive(Debug, Clone, Default)]
pub struct ContentArea {
    visible: bool,
    dimmed: bool,
    body: Option<String>,
    controls: Vec<Control>,
}

impl ContentArea {
    /// Creates a hidden, empty content area
    pub fn new() -> Self {
        ContentArea::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    /// True when nothing has been rendered since the last clear
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.controls.is_empty()
    }
}

impl ContentSurface for ContentArea {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_backdrop(&mut self, dimmed: bool) {
        self.dimmed = dimmed;
    }

    fn clear(&mut self) {
        self.body = None;
        self.controls.clear();
    }

    fn render_text(&mut self, text: &str) {
        self.body = Some(text.to_string());
    }

    fn add_control(&mut self, modal_id: &str, action: &ModalAction) {
        self.controls.push(Control {
            modal_id: modal_id.to_string(),
            action: action.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_area_is_hidden_and_empty() {
        let area = ContentArea::new();
        assert!(!area.is_visible());
        assert!(!area.is_dimmed());
        assert!(area.is_empty());
    }

    #[test]
    fn test_render_and_clear() {
        let mut area = ContentArea::new();
        area.render_text("You were kicked");
        area.add_control("kicked", &ModalAction::new("ok", "OK"));

        assert_eq!(area.body(), Some("You were kicked"));
        assert_eq!(area.control(0).map(|c| c.modal_id.as_str()), Some("kicked"));
        assert!(area.control(1).is_none());

        area.clear();
        assert!(area.is_empty());
    }
}
