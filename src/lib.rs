//! # GPUI Route Stack
//!
//! A typed navigation stack for GPUI:
//!
//! - **Route Stack** - Push, pop and pop-to-root over your own route enum
//! - **Route Families** - One exhaustive `match` maps every route to its screen
//! - **Navigation Container** - A view that owns a stack, renders the top route
//!   and handles the back button
//! - **Observable** - Every change is a GPUI event, so any view can react
//!
//! # Quick Start
//!
//! ```ignore
//! use gpui::*;
//! use gpui_route_stack::*;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum CatRoute {
//!     Breeds,
//!     Breed(u32),
//! }
//!
//! struct CatRoutes;
//!
//! impl RouteFamily for CatRoutes {
//!     type Route = CatRoute;
//!
//!     fn destination(route: &CatRoute, nav: &StackHandle<CatRoute>, _cx: &mut App) -> AnyElement {
//!         match route {
//!             CatRoute::Breeds => div().child("All breeds").into_any_element(),
//!             CatRoute::Breed(id) => div().child(format!("Breed {id}")).into_any_element(),
//!         }
//!     }
//! }
//!
//! fn main() {
//!     Application::new().run(|cx| {
//!         cx.open_window(WindowOptions::default(), |_, cx| {
//!             navigation_stack::<CatRoutes, _>(cx, |nav, _cx| {
//!                 let nav = nav.clone();
//!                 div()
//!                     .child("Home")
//!                     .on_mouse_down(MouseButton::Left, move |_, _, cx| {
//!                         nav.push(cx, CatRoute::Breeds);
//!                     })
//!                     .into_any_element()
//!             })
//!         })
//!         .unwrap();
//!     });
//! }
//! ```
//!
//! # Navigation
//!
//! Every operation is total. Popping an empty stack does nothing:
//!
//! ```ignore
//! nav.push(cx, CatRoute::Breed(3));
//! nav.pop(cx);
//! nav.pop_to_root(cx);
//! nav.pop(cx); // no-op, returns None
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)

#![doc(html_root_url = "https://docs.rs/gpui-route-stack/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Core
pub mod family;
pub mod handle;
pub mod stack;

// View
pub mod container;

// Re-export main types for convenient access
pub use container::{navigation_stack, NavigationStack, RootContentFn};
pub use family::{DestinationFn, DestinationResolver, RouteFamily, TitleFn};
pub use handle::StackHandle;
pub use stack::{Route, RouteStack, StackChange};

/// Navigation direction indicator.
///
/// Carried by every [`StackChange`] so observers can tell pushes from pops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A route was pushed
    Forward,
    /// One or more routes were popped
    Back,
    /// The top route was swapped
    Replace,
}
