//! Route families and destination resolution
//!
//! A route family is the closed set of destinations an application declares,
//! together with a total mapping from each route to the element it shows.
//! The container never inspects route variants itself; it only calls
//! [`DestinationResolver::resolve`].

use crate::handle::StackHandle;
use crate::stack::Route;
use crate::trace_log;
use gpui::{AnyElement, App, SharedString};
use std::rc::Rc;

/// A closed family of routes and the destinations they resolve to.
///
/// `destination` must cover every variant; an exhaustive `match` makes the
/// compiler enforce that.
///
/// # Example
///
/// ```ignore
/// use gpui::*;
/// use gpui_route_stack::{RouteFamily, StackHandle};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum CatRoute {
///     Breeds,
///     Breed(u32),
/// }
///
/// struct CatRoutes;
///
/// impl RouteFamily for CatRoutes {
///     type Route = CatRoute;
///
///     fn destination(route: &CatRoute, nav: &StackHandle<CatRoute>, cx: &mut App) -> AnyElement {
///         match route {
///             CatRoute::Breeds => breed_list(nav.clone(), cx),
///             CatRoute::Breed(id) => div().child(format!("Breed #{id}")).into_any_element(),
///         }
///     }
/// }
/// ```
pub trait RouteFamily: 'static {
    /// Route values this family resolves
    type Route: Route;

    /// Build the element shown when `route` is on top of the stack.
    fn destination(
        route: &Self::Route,
        nav: &StackHandle<Self::Route>,
        cx: &mut App,
    ) -> AnyElement;

    /// Header title for `route`. Defaults to none.
    fn title(_route: &Self::Route) -> Option<SharedString> {
        None
    }
}

/// Destination builder: `(route, stack, cx) -> element`
pub type DestinationFn<R> = Rc<dyn Fn(&R, &StackHandle<R>, &mut App) -> AnyElement>;

/// Title builder for the header chrome
pub type TitleFn<R> = Rc<dyn Fn(&R) -> Option<SharedString>>;

/// Maps pushed routes to their destination elements.
///
/// A container builds one of these once, when it is created.
pub struct DestinationResolver<R: Route> {
    destination: DestinationFn<R>,
    title: TitleFn<R>,
}

impl<R: Route> DestinationResolver<R> {
    /// Create a resolver from a destination closure.
    pub fn new<F>(destination: F) -> Self
    where
        F: Fn(&R, &StackHandle<R>, &mut App) -> AnyElement + 'static,
    {
        Self {
            destination: Rc::new(destination),
            title: Rc::new(untitled::<R>),
        }
    }

    /// Set the title closure used by the header.
    pub fn with_title<F>(mut self, title: F) -> Self
    where
        F: Fn(&R) -> Option<SharedString> + 'static,
    {
        self.title = Rc::new(title);
        self
    }

    /// Resolver backed by a [`RouteFamily`].
    pub fn for_family<F>() -> Self
    where
        F: RouteFamily<Route = R>,
    {
        Self::new(F::destination).with_title(F::title)
    }

    /// Build the destination element for `route`.
    pub fn resolve(&self, route: &R, nav: &StackHandle<R>, cx: &mut App) -> AnyElement {
        trace_log!("resolving destination for {:?}", route);
        (self.destination)(route, nav, cx)
    }

    pub fn title(&self, route: &R) -> Option<SharedString> {
        (self.title)(route)
    }
}

fn untitled<R>(_route: &R) -> Option<SharedString> {
    None
}

impl<R: Route> Clone for DestinationResolver<R> {
    fn clone(&self) -> Self {
        Self {
            destination: self.destination.clone(),
            title: self.title.clone(),
        }
    }
}

impl<R: Route> std::fmt::Debug for DestinationResolver<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DestinationResolver").finish_non_exhaustive()
    }
}
