//! Route Access
//!
//! The engine doesn't choose screens. It asks a [`RouteSource`] which route
//! is current and compares that against the configured active-gameplay
//! route. Whoever switches routes calls
//! [`ModalEngine::on_route_changed`](crate::modal::ModalEngine::on_route_changed)
//! afterwards so the gate is republished.

use std::cell::RefCell;
use std::rc::Rc;

/// Accessor for the current screen route
pub trait RouteSource {
    /// `None` when no route is known yet; treated as "not in gameplay"
    fn current_route(&self) -> Option<String>;
}

/// Settable route shared between the router and the engine
///
/// Clones point at the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedRoute {
    current: Rc<RefCell<Option<String>>>,
}

impl SharedRoute {
    /// Creates a route handle starting at `route`
    pub fn new(route: impl Into<String>) -> Self {
        SharedRoute {
            current: Rc::new(RefCell::new(Some(route.into()))),
        }
    }

    /// Creates a handle with no route set
    pub fn unset() -> Self {
        SharedRoute::default()
    }

    pub fn set(&self, route: impl Into<String>) {
        *self.current.borrow_mut() = Some(route.into());
    }

    pub fn clear(&self) {
        *self.current.borrow_mut() = None;
    }
}

impl RouteSource for SharedRoute {
    fn current_route(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}
