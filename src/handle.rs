//! GPUI handle to a route stack
//!
//! [`StackHandle`] is the context object handed to root content and
//! destinations. It owns no state itself: the [`RouteStack`] lives in a GPUI
//! entity and every mutation goes through [`Entity::update`].
//!
//! Each effective mutation emits one [`StackChange`] carrying its own snapshot
//! (`from`, `to`, `depth`). Events and notifications are queued by GPUI and
//! delivered when the outermost update finishes, so:
//!
//! - subscribers get one event per mutation, in order;
//! - observers (`cx.observe`) are notified at most once per effect cycle, no
//!   matter how many mutations it contained;
//! - both see the stack as it is after the whole cycle, never mid-mutation.
//!   Use the event payload, not [`StackHandle::depth`], to follow intermediate
//!   steps.

use crate::stack::{Route, RouteStack, StackChange};
use crate::trace_log;
use gpui::{App, AppContext, Context, Entity, EventEmitter};

impl<R: Route> EventEmitter<StackChange<R>> for RouteStack<R> {}

/// Cloneable handle to a [`RouteStack`] entity
///
/// Handles compare equal when they point at the same stack. Several mutations
/// inside one `cx.update` produce one event each but a single observer
/// notification.
///
/// # Example
///
/// ```ignore
/// use gpui_route_stack::StackHandle;
///
/// let nav = StackHandle::<Screen>::new(cx);
/// nav.push(cx, Screen::Settings);
/// if nav.can_pop(cx) {
///     nav.pop(cx);
/// }
/// ```
pub struct StackHandle<R: Route> {
    entity: Entity<RouteStack<R>>,
}

impl<R: Route> StackHandle<R> {
    /// Create a new empty stack entity.
    pub fn new(cx: &mut App) -> Self {
        Self {
            entity: cx.new(|_| RouteStack::new()),
        }
    }

    /// Wrap an existing stack entity.
    pub fn from_entity(entity: Entity<RouteStack<R>>) -> Self {
        Self { entity }
    }

    /// Underlying entity, for `cx.observe` / `cx.subscribe`.
    pub fn entity(&self) -> &Entity<RouteStack<R>> {
        &self.entity
    }

    /// Push a route on top of the stack.
    pub fn push(&self, cx: &mut App, route: R) -> StackChange<R> {
        self.entity.update(cx, |stack, cx| {
            let change = stack.push(route);
            announce(&change, cx);
            change
        })
    }

    /// Pop the top route. No-op on an empty stack.
    pub fn pop(&self, cx: &mut App) -> Option<StackChange<R>> {
        self.mutate(cx, RouteStack::pop)
    }

    /// Pop up to `count` routes as a single change.
    pub fn pop_by(&self, cx: &mut App, count: usize) -> Option<StackChange<R>> {
        self.mutate(cx, |stack| stack.pop_by(count))
    }

    /// Clear the stack, showing the root content again.
    pub fn pop_to_root(&self, cx: &mut App) -> Option<StackChange<R>> {
        self.mutate(cx, RouteStack::pop_to_root)
    }

    /// Replace the top route.
    pub fn replace(&self, cx: &mut App, route: R) -> StackChange<R> {
        self.entity.update(cx, |stack, cx| {
            let change = stack.replace(route);
            announce(&change, cx);
            change
        })
    }

    pub fn depth(&self, cx: &App) -> usize {
        self.entity.read(cx).depth()
    }

    pub fn is_empty(&self, cx: &App) -> bool {
        self.entity.read(cx).is_empty()
    }

    pub fn can_pop(&self, cx: &App) -> bool {
        self.entity.read(cx).can_pop()
    }

    /// Route currently on screen, `None` at the root.
    pub fn top(&self, cx: &App) -> Option<R> {
        self.entity.read(cx).top().cloned()
    }

    /// Snapshot of the stack, bottom to top.
    pub fn routes(&self, cx: &App) -> Vec<R> {
        self.entity.read(cx).routes().to_vec()
    }

    /// Apply `f` to the stack; emit and notify only if it changed something.
    fn mutate<F>(&self, cx: &mut App, f: F) -> Option<StackChange<R>>
    where
        F: FnOnce(&mut RouteStack<R>) -> Option<StackChange<R>>,
    {
        self.entity.update(cx, |stack, cx| {
            let change = f(stack);
            match &change {
                Some(change) => announce(change, cx),
                None => {
                    trace_log!("stack unchanged, observers not notified");
                }
            }
            change
        })
    }
}

/// Queue the change event and a notification. GPUI merges notifications for
/// the same entity until effects are flushed.
fn announce<R: Route>(change: &StackChange<R>, cx: &mut Context<'_, RouteStack<R>>) {
    cx.emit(change.clone());
    cx.notify();
}

impl<R: Route> Clone for StackHandle<R> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity.clone(),
        }
    }
}

impl<R: Route> PartialEq for StackHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl<R: Route> std::fmt::Debug for StackHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackHandle")
            .field("entity", &self.entity.entity_id())
            .finish()
    }
}
