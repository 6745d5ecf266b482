//! Modal Engine
//!
//! The service the rest of the client talks to. It owns the priority stack,
//! the render target, the session sink and the route accessor, and re-runs
//! the renderer after every mutation so the visible request and the input
//! gate are never stale.
//!
//! The host constructs one engine and hands `&mut` access to producers
//! (network handlers, timers, route changes) and consumers (input senders,
//! the hotkey adapter). Every call runs to completion before returning.
//!
//! # Example
//!
//! ```ignore
//! use modal_stack::modal::{ModalEngine, Substate, SubstatePayload};
//! use modal_stack::route::SharedRoute;
//! use modal_stack::session::RecordingSink;
//!
//! let route = SharedRoute::new("game");
//! let mut engine = ModalEngine::new("game", Box::new(route.clone()), Box::new(RecordingSink::new()));
//!
//! engine.present_substate(&Substate::Dead, SubstatePayload::default());
//! assert!(!engine.input_allowed());
//!
//! // "1" selects "respawn", notifies the session and dismisses the modal
//! engine.handle_key("1");
//! assert!(engine.input_allowed());
//! ```

use super::content::ContentArea;
use super::hotkeys::dispatch_hotkey;
use super::renderer::{ContentSurface, render_top};
use super::request::Request;
use super::stack::PriorityStack;
use super::substate::{Substate, SubstatePayload, priority_for_substate, substate_request};
use crate::route::RouteSource;
use crate::session::{ActionSelection, SessionSink};

/// Callback invoked whenever the input gate flips
pub type GateObserver = Box<dyn FnMut(bool)>;

pub struct ModalEngine<S: ContentSurface = ContentArea> {
    stack: PriorityStack,
    surface: Option<S>,
    routes: Box<dyn RouteSource>,
    sink: Box<dyn SessionSink>,
    active_route: String,
    input_allowed: bool,
    gate_observers: Vec<GateObserver>,
}

impl ModalEngine<ContentArea> {
    /// Creates an engine rendering into a fresh [`ContentArea`]
    pub fn new(
        active_route: impl Into<String>,
        routes: Box<dyn RouteSource>,
        sink: Box<dyn SessionSink>,
    ) -> Self {
        ModalEngine::with_surface(active_route, routes, sink, Some(ContentArea::new()))
    }

    /// Select the action behind the rendered control at `index`
    ///
    /// Only controls bound to the current top count. While an external
    /// request is on top the area may still hold an older request's
    /// controls; those are ignored. Returns `true` when an action was
    /// selected.
    pub fn activate_control(&mut self, index: usize) -> bool {
        let hit = self
            .stack
            .top()
            .filter(|top| !top.is_external())
            .and_then(|top| {
                self.surface
                    .as_ref()?
                    .control(index)
                    .filter(|control| control.modal_id == top.id)
                    .map(|control| (control.modal_id.clone(), control.action.id.clone()))
            });

        match hit {
            Some((modal_id, action_id)) => {
                self.select_action(&modal_id, &action_id);
                true
            }
            None => {
                log::debug!("control {} is not bound to the visible request", index);
                false
            }
        }
    }
}

impl<S: ContentSurface> ModalEngine<S> {
    /// Creates an engine with a custom render target
    ///
    /// Passing `None` runs the engine headless: ordering and gating still
    /// work, drawing is skipped.
    pub fn with_surface(
        active_route: impl Into<String>,
        routes: Box<dyn RouteSource>,
        sink: Box<dyn SessionSink>,
        surface: Option<S>,
    ) -> Self {
        let mut engine = ModalEngine {
            stack: PriorityStack::new(),
            surface,
            routes,
            sink,
            active_route: active_route.into(),
            input_allowed: false,
            gate_observers: Vec::new(),
        };
        engine.refresh();
        engine
    }

    /// Insert or replace a request, then re-render
    pub fn present(&mut self, request: Request) {
        log::debug!(
            "present '{}' at priority {} (external: {}, blocks input: {})",
            request.id,
            request.priority,
            request.is_external(),
            request.block_input
        );
        self.stack.present(request);
        self.refresh();
    }

    /// Remove a request by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) -> Option<Request> {
        let removed = self.stack.dismiss(id);
        if removed.is_some() {
            log::debug!("dismiss '{}'", id);
        }
        self.refresh();
        removed
    }

    /// Remove every request with priority strictly below `threshold`
    pub fn clear_below(&mut self, threshold: i32) -> usize {
        let removed = self.stack.clear_below(threshold);
        if removed > 0 {
            log::debug!("cleared {} request(s) below priority {}", removed, threshold);
        }
        self.refresh();
        removed
    }

    /// Present a gameplay substate, superseding every lower tier
    ///
    /// Lower-tier requests are cleared before the new one goes in; equal and
    /// higher tiers stay. Both changes land before a single re-render, so
    /// observers never see the transient state in between.
    pub fn present_substate(&mut self, substate: &Substate, payload: SubstatePayload) {
        let priority = priority_for_substate(substate).value();
        let cleared = self.stack.clear_below(priority);
        log::debug!(
            "substate '{}' at priority {} superseded {} request(s)",
            substate,
            priority,
            cleared
        );

        self.stack.present(substate_request(substate, payload));
        self.refresh();
    }

    /// Notify the session of a selection, then dismiss the modal
    ///
    /// The dismissal happens whether or not the sink accepted the
    /// notification.
    pub fn select_action(&mut self, modal_id: &str, action_id: &str) {
        let selection = ActionSelection::new(modal_id, action_id);
        log::info!("modal '{}' -> action '{}'", modal_id, action_id);

        if let Err(err) = self.sink.send_selection(&selection) {
            log::warn!(
                "failed to send selection '{}' for modal '{}': {}",
                action_id,
                modal_id,
                err
            );
        }

        self.dismiss(modal_id);
    }

    /// Offer a key press to the top request's hotkeys
    ///
    /// Returns `true` when the key selected an action (the event is consumed).
    pub fn handle_key(&mut self, key: &str) -> bool {
        let hit = self.stack.top().and_then(|top| {
            dispatch_hotkey(Some(top), key).map(|action| (top.id.clone(), action.id.clone()))
        });

        match hit {
            Some((modal_id, action_id)) => {
                self.select_action(&modal_id, &action_id);
                true
            }
            None => false,
        }
    }

    /// Republish the gate after the router switched screens
    pub fn on_route_changed(&mut self) {
        log::debug!("route changed to {:?}", self.routes.current_route());
        self.refresh();
    }

    /// Register a callback for gate changes
    pub fn on_gate_change(&mut self, observer: GateObserver) {
        self.gate_observers.push(observer);
    }

    /// The gate: may gameplay input be sent right now?
    pub fn input_allowed(&self) -> bool {
        self.input_allowed
    }

    pub fn top(&self) -> Option<&Request> {
        self.stack.top()
    }

    pub fn is_blocking_input(&self) -> bool {
        self.stack.is_blocking_input()
    }

    pub fn stack(&self) -> &PriorityStack {
        &self.stack
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn active_route(&self) -> &str {
        &self.active_route
    }

    /// True when the current route is the gameplay route
    pub fn route_is_active(&self) -> bool {
        self.routes
            .current_route()
            .is_some_and(|route| route == self.active_route)
    }

    fn refresh(&mut self) {
        let route_active = self.route_is_active();
        let allowed = render_top(self.surface.as_mut(), self.stack.top(), route_active);

        if allowed != self.input_allowed {
            log::debug!("gameplay input {}", if allowed { "allowed" } else { "blocked" });
            self.input_allowed = allowed;
            for observer in &mut self.gate_observers {
                observer(allowed);
            }
        }
    }
}
