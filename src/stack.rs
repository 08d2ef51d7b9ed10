//! Route stack state
//!
//! An ordered sequence of typed routes, oldest at the bottom and the visible
//! screen at the top. Every mutation reports what it did as a [`StackChange`];
//! operations that would change nothing return `None` instead of failing.

use crate::{debug_log, trace_log, warn_log, NavigationDirection};
use std::fmt::Debug;
use std::hash::Hash;

/// Marker for values that can be pushed onto a [`RouteStack`].
///
/// Routes are compared by value; two equal routes are the same destination.
/// Implemented automatically for every type with the required bounds.
pub trait Route: Clone + Eq + Hash + Debug + 'static {}

impl<T> Route for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Describes a single mutation of a [`RouteStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackChange<R> {
    /// What kind of navigation happened
    pub direction: NavigationDirection,
    /// Top route before the mutation (`None` if the root content was showing)
    pub from: Option<R>,
    /// Top route after the mutation (`None` if the root content is now showing)
    pub to: Option<R>,
    /// Stack depth after the mutation
    pub depth: usize,
}

impl<R> StackChange<R> {
    /// True if this change left the stack at the root content.
    pub fn is_at_root(&self) -> bool {
        self.depth == 0
    }
}

/// Navigation stack of typed routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStack<R> {
    routes: Vec<R>,
}

impl<R: Route> RouteStack<R> {
    /// Create an empty stack (root content visible).
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Push a route on top of the stack.
    pub fn push(&mut self, route: R) -> StackChange<R> {
        let from = self.top().cloned();
        debug_log!("push {:?} (depth {})", route, self.routes.len() + 1);
        self.routes.push(route.clone());

        StackChange {
            direction: NavigationDirection::Forward,
            from,
            to: Some(route),
            depth: self.routes.len(),
        }
    }

    /// Remove the top route. Popping an empty stack does nothing.
    pub fn pop(&mut self) -> Option<StackChange<R>> {
        self.pop_by(1)
    }

    /// Remove up to `count` routes from the top as a single change.
    ///
    /// Removing more routes than the stack holds empties it; removing none
    /// returns `None`.
    pub fn pop_by(&mut self, requested: usize) -> Option<StackChange<R>> {
        let count = requested.min(self.routes.len());
        if count < requested && count > 0 {
            warn_log!(
                "pop by {} exceeds depth {}, clearing the stack",
                requested,
                self.routes.len()
            );
        }
        if count == 0 {
            trace_log!("pop ignored (depth {})", self.routes.len());
            return None;
        }

        let from = self.top().cloned();
        self.routes.truncate(self.routes.len() - count);
        debug_log!("pop {} (depth {})", count, self.routes.len());

        Some(StackChange {
            direction: NavigationDirection::Back,
            from,
            to: self.top().cloned(),
            depth: self.routes.len(),
        })
    }

    /// Clear the stack and return to the root content.
    pub fn pop_to_root(&mut self) -> Option<StackChange<R>> {
        self.pop_by(self.routes.len())
    }

    /// Swap the top route for `route`.
    ///
    /// On an empty stack the route is pushed, but the change still reports
    /// [`NavigationDirection::Replace`].
    pub fn replace(&mut self, route: R) -> StackChange<R> {
        let from = self.routes.pop();
        debug_log!("replace {:?} -> {:?}", from, route);
        self.routes.push(route.clone());

        StackChange {
            direction: NavigationDirection::Replace,
            from,
            to: Some(route),
            depth: self.routes.len(),
        }
    }

    /// Route currently on screen, `None` at the root.
    pub fn top(&self) -> Option<&R> {
        self.routes.last()
    }

    /// Number of pushed routes.
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    /// Alias for [`depth`](Self::depth).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Check if a back action would do anything
    pub fn can_pop(&self) -> bool {
        !self.routes.is_empty()
    }

    /// All routes, bottom to top.
    pub fn routes(&self) -> &[R] {
        &self.routes
    }

    pub fn contains(&self, route: &R) -> bool {
        self.routes.contains(route)
    }
}

impl<R: Route> Default for RouteStack<R> {
    fn default() -> Self {
        Self::new()
    }
}
