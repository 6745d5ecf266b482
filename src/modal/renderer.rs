//! Presentation Renderer
//!
//! Decides what the shared content area shows for the current top request
//! and computes the gameplay input gate.
//!
//! # Architecture
//!
//! - [`ContentSurface`]: the render target. The engine drives it through a
//!   handful of retained-mode calls; the host decides how to draw the result.
//! - [`render_top`]: one pass over the top request, run after every stack
//!   mutation and route change.
//! - [`compute_gate`]: the input gate on its own, for callers that only need
//!   the boolean.

use super::request::{ModalAction, Presentation, Request};

/// Render target for native request bodies
///
/// The surface owns a single content area plus an ambient backdrop layer
/// that dims whatever is behind it.
pub trait ContentSurface {
    /// Show or hide the content area
    fn set_visible(&mut self, visible: bool);

    /// Dim or undim the backdrop behind the content area
    fn set_backdrop(&mut self, dimmed: bool);

    /// Drop any body previously rendered into the content area
    fn clear(&mut self);

    /// Render the body text
    fn render_text(&mut self, text: &str);

    /// Add one control. Activating it should select `(modal_id, action.id)`.
    fn add_control(&mut self, modal_id: &str, action: &ModalAction);
}

/// Gameplay input is allowed only on the active route with nothing blocking on top
pub fn compute_gate(route_active: bool, top: Option<&Request>) -> bool {
    route_active && top.is_none_or(|request| !request.block_input)
}

/// Bring the surface in line with `top` and return the new gate value
///
/// A missing surface skips every drawing step; the gate is still computed.
/// External requests never touch the content area, their owner mounts its
/// own body.
pub fn render_top<S: ContentSurface + ?Sized>(
    surface: Option<&mut S>,
    top: Option<&Request>,
    route_active: bool,
) -> bool {
    let Some(request) = top else {
        if let Some(surface) = surface {
            surface.set_visible(false);
            surface.clear();
            surface.set_backdrop(!route_active);
        }
        return compute_gate(route_active, None);
    };

    if let Some(surface) = surface {
        surface.set_visible(true);
        surface.set_backdrop(true);

        match &request.presentation {
            Presentation::External => {}
            Presentation::Native { text, actions } => {
                surface.clear();
                surface.render_text(text);
                for action in actions {
                    surface.add_control(&request.id, action);
                }
            }
        }
    }

    compute_gate(route_active, Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records every call it receives
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl ContentSurface for RecordingSurface {
        fn set_visible(&mut self, visible: bool) {
            self.calls.push(format!("visible:{}", visible));
        }

        fn set_backdrop(&mut self, dimmed: bool) {
            self.calls.push(format!("backdrop:{}", dimmed));
        }

        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }

        fn render_text(&mut self, text: &str) {
            self.calls.push(format!("text:{}", text));
        }

        fn add_control(&mut self, modal_id: &str, action: &ModalAction) {
            self.calls.push(format!("control:{}/{}", modal_id, action.id));
        }
    }

    #[test]
    fn test_gate_truth_table() {
        let blocking = Request::native("b", 50, "", vec![]);
        let passive = Request::native("p", 50, "", vec![]).with_block_input(false);

        assert!(compute_gate(true, None));
        assert!(!compute_gate(true, Some(&blocking)));
        assert!(compute_gate(true, Some(&passive)));
        assert!(!compute_gate(false, None));
        assert!(!compute_gate(false, Some(&passive)));
    }

    #[test]
    fn test_empty_stack_hides_area() {
        let mut target = RecordingSurface::default();
        let gate = render_top(Some(&mut target), None, true);

        assert!(gate);
        assert_eq!(target.calls, vec!["visible:false", "clear", "backdrop:false"]);
    }

    #[test]
    fn test_empty_stack_off_route_dims_backdrop() {
        let mut target = RecordingSurface::default();
        let gate = render_top(Some(&mut target), None, false);

        assert!(!gate);
        assert!(target.calls.contains(&"backdrop:true".to_string()));
    }

    #[test]
    fn test_native_request_renders_text_then_controls() {
        let request = Request::native(
            "confirm",
            50,
            "Start?",
            vec![ModalAction::new("yes", "Yes"), ModalAction::new("no", "No")],
        );
        let mut target = RecordingSurface::default();
        let gate = render_top(Some(&mut target), Some(&request), true);

        assert!(!gate);
        assert_eq!(
            target.calls,
            vec![
                "visible:true",
                "backdrop:true",
                "clear",
                "text:Start?",
                "control:confirm/yes",
                "control:confirm/no",
            ]
        );
    }

    #[test]
    fn test_external_request_leaves_content_alone() {
        let request = Request::external("EXT", 50).with_block_input(false);
        let mut target = RecordingSurface::default();
        let gate = render_top(Some(&mut target), Some(&request), true);

        assert!(gate);
        assert_eq!(target.calls, vec!["visible:true", "backdrop:true"]);
    }

    #[test]
    fn test_missing_surface_still_computes_gate() {
        let request = Request::native("x", 10, "", vec![]);
        assert!(!render_top::<RecordingSurface>(None, Some(&request), true));
        assert!(render_top::<RecordingSurface>(None, None, true));
    }
}
