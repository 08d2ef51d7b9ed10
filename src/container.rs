//! Navigation container view
//!
//! [`NavigationStack`] binds one [`RouteStack`](crate::RouteStack) to the
//! screen. It shows the root content while the stack is empty and the
//! destination of the top route otherwise, with a header bar whose back
//! button pops exactly one route.

use crate::family::{DestinationResolver, RouteFamily};
use crate::handle::StackHandle;
use crate::{debug_log, trace_log};
use gpui::{
    div, rgb, AnyElement, App, AppContext, Context, Div, Entity, InteractiveElement, IntoElement,
    MouseButton, ParentElement, Render, SharedString, Styled, Subscription, Window,
};
use std::rc::Rc;

/// Builds the root content shown at depth 0
pub type RootContentFn<R> = Rc<dyn Fn(&StackHandle<R>, &mut App) -> AnyElement>;

/// Container view that owns a route stack and renders it.
///
/// Every container owns its own stack, so two containers (for example one per
/// tab) never share navigation state. Descendants reach the stack through the
/// [`StackHandle`] passed to the root content and to every destination.
///
/// # Example
///
/// ```ignore
/// use gpui::*;
/// use gpui_route_stack::{NavigationStack, RouteFamily};
///
/// let view = cx.new(|cx| {
///     NavigationStack::<CatRoutes>::new(cx, |nav, _cx| {
///         let nav = nav.clone();
///         div()
///             .child("Cats")
///             .on_mouse_down(MouseButton::Left, move |_, _, cx| {
///                 nav.push(cx, CatRoute::Breeds);
///             })
///             .into_any_element()
///     })
///     .root_title("Catergram")
/// });
/// ```
pub struct NavigationStack<F: RouteFamily> {
    nav: StackHandle<F::Route>,
    resolver: DestinationResolver<F::Route>,
    content: RootContentFn<F::Route>,
    root_title: Option<SharedString>,
    back_label: SharedString,
    show_header: bool,
    _stack_observation: Subscription,
}

impl<F: RouteFamily> NavigationStack<F> {
    /// Create a container whose root content receives the stack handle.
    pub fn new<C>(cx: &mut Context<'_, Self>, content: C) -> Self
    where
        C: Fn(&StackHandle<F::Route>, &mut App) -> AnyElement + 'static,
    {
        let nav = StackHandle::new(cx);
        let observation = cx.observe(nav.entity(), |_, _, cx| cx.notify());
        debug_log!(
            "navigation stack created for {}",
            std::any::type_name::<F>()
        );

        Self {
            nav,
            resolver: DestinationResolver::for_family::<F>(),
            content: Rc::new(content),
            root_title: None,
            back_label: SharedString::from("Back"),
            show_header: true,
            _stack_observation: observation,
        }
    }

    /// Create a container whose root content does not need the stack.
    pub fn from_content<C>(cx: &mut Context<'_, Self>, content: C) -> Self
    where
        C: Fn(&mut App) -> AnyElement + 'static,
    {
        Self::new(cx, move |_: &StackHandle<F::Route>, cx: &mut App| content(cx))
    }

    /// Header title shown while the root content is visible
    pub fn root_title(mut self, title: impl Into<SharedString>) -> Self {
        self.root_title = Some(title.into());
        self
    }

    /// Label of the header's back button (default `"Back"`)
    pub fn back_label(mut self, label: impl Into<SharedString>) -> Self {
        self.back_label = label.into();
        self
    }

    /// Show or hide the header bar. Hidden headers leave back navigation to
    /// the content.
    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Handle to this container's stack.
    pub fn handle(&self) -> StackHandle<F::Route> {
        self.nav.clone()
    }

    pub fn depth(&self, cx: &App) -> usize {
        self.nav.depth(cx)
    }

    /// Back action: pop exactly one route, nothing at the root.
    pub fn go_back(&mut self, cx: &mut App) {
        if self.nav.pop(cx).is_none() {
            trace_log!("back action at root ignored");
        }
    }

    /// Title for the current top of the stack.
    pub fn current_title(&self, cx: &App) -> Option<SharedString> {
        match self.nav.top(cx) {
            Some(route) => self.resolver.title(&route),
            None => self.root_title.clone(),
        }
    }

    /// Build the element for the current top of the stack, or the root
    /// content when the stack is empty.
    pub fn current_content(&self, cx: &mut App) -> AnyElement {
        match self.nav.top(cx) {
            Some(route) => self.resolver.resolve(&route, &self.nav, cx),
            None => (self.content)(&self.nav, cx),
        }
    }

    fn render_header(&self, cx: &mut Context<'_, Self>) -> Div {
        let mut header = div()
            .debug_selector(|| "navigation-header".to_string())
            .flex()
            .items_center()
            .gap_3()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(rgb(0xe0e0e0));

        if self.nav.can_pop(cx) {
            header = header.child(
                div()
                    .debug_selector(|| "navigation-back".to_string())
                    .px_2()
                    .py_1()
                    .cursor_pointer()
                    .text_color(rgb(0x2196f3))
                    .hover(|this| this.text_color(rgb(0x1565c0)))
                    .child(self.back_label.clone())
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _event, _window, cx| this.go_back(cx)),
                    ),
            );
        }

        if let Some(title) = self.current_title(cx) {
            header = header.child(div().text_color(rgb(0x333333)).child(title));
        }

        header
    }
}

impl<F: RouteFamily> Render for NavigationStack<F> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        trace_log!("rendering navigation stack (depth {})", self.nav.depth(cx));

        let mut root = div().flex().flex_col().size_full();
        if self.show_header {
            root = root.child(self.render_header(cx));
        }

        root.child(div().flex_1().child(self.current_content(cx)))
    }
}

/// Create a [`NavigationStack`] entity in one call.
///
/// # Example
///
/// ```ignore
/// let view = navigation_stack::<CatRoutes, _>(cx, |nav, cx| home(nav.clone(), cx));
/// ```
pub fn navigation_stack<F, C>(cx: &mut App, content: C) -> Entity<NavigationStack<F>>
where
    F: RouteFamily,
    C: Fn(&StackHandle<F::Route>, &mut App) -> AnyElement + 'static,
{
    cx.new(|cx| NavigationStack::new(cx, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{Modifiers, TestAppContext, VisualTestContext};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Shop {
        Catalog,
        Product(u32),
        Cart,
    }

    thread_local! {
        static SHOWN: RefCell<Vec<Shop>> = const { RefCell::new(Vec::new()) };
    }

    struct ShopRoutes;

    impl RouteFamily for ShopRoutes {
        type Route = Shop;

        fn destination(route: &Shop, _nav: &StackHandle<Shop>, _cx: &mut App) -> AnyElement {
            SHOWN.with(|shown| shown.borrow_mut().push(route.clone()));
            match route {
                Shop::Catalog => div().child("catalog"),
                Shop::Product(id) => div().child(format!("product {}", id)),
                Shop::Cart => div().child("cart"),
            }
            .into_any_element()
        }

        fn title(route: &Shop) -> Option<SharedString> {
            match route {
                Shop::Cart => Some("Cart".into()),
                _ => None,
            }
        }
    }

    fn shown() -> Vec<Shop> {
        SHOWN.with(|shown| shown.borrow().clone())
    }

    fn reset_shown() {
        SHOWN.with(|shown| shown.borrow_mut().clear());
    }

    #[gpui::test]
    fn test_container_owns_empty_stack(cx: &mut TestAppContext) {
        let container = cx.new(|cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
        });

        let nav = cx.read(|cx| container.read(cx).handle());
        assert_eq!(cx.read(|cx| nav.depth(cx)), 0);
        assert_eq!(cx.read(|cx| container.read(cx).depth(cx)), 0);
    }

    #[gpui::test]
    fn test_root_content_shown_at_depth_zero(cx: &mut TestAppContext) {
        reset_shown();
        let root_builds = Rc::new(Cell::new(0_usize));
        let container = {
            let root_builds = root_builds.clone();
            cx.new(|cx| {
                NavigationStack::<ShopRoutes>::new(cx, move |nav, cx| {
                    assert_eq!(nav.depth(cx), 0);
                    root_builds.set(root_builds.get() + 1);
                    div().into_any_element()
                })
            })
        };

        container.update(cx, |this, cx| {
            let _element = this.current_content(cx);
        });
        assert_eq!(root_builds.get(), 1);
        assert!(shown().is_empty());
    }

    #[gpui::test]
    fn test_pushed_route_resolves_destination(cx: &mut TestAppContext) {
        reset_shown();
        let container = cx.new(|cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
        });
        let nav = cx.read(|cx| container.read(cx).handle());

        cx.update(|cx| {
            nav.push(cx, Shop::Catalog);
            nav.push(cx, Shop::Product(12));
        });
        container.update(cx, |this, cx| {
            let _element = this.current_content(cx);
        });

        assert_eq!(shown(), vec![Shop::Product(12)]);
    }

    #[gpui::test]
    fn test_stack_mutation_notifies_container(cx: &mut TestAppContext) {
        let container = cx.new(|cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
        });
        let nav = cx.read(|cx| container.read(cx).handle());
        let renders_requested = Rc::new(Cell::new(0_usize));

        let _observation = cx.update(|cx| {
            let renders_requested = renders_requested.clone();
            cx.observe(&container, move |_, _| {
                renders_requested.set(renders_requested.get() + 1);
            })
        });

        cx.update(|cx| nav.push(cx, Shop::Cart));
        assert_eq!(renders_requested.get(), 1);

        cx.update(|cx| nav.pop(cx));
        assert_eq!(renders_requested.get(), 2);

        // Popping at the root changes nothing, so nothing re-renders
        cx.update(|cx| nav.pop(cx));
        assert_eq!(renders_requested.get(), 2);
    }

    #[gpui::test]
    fn test_back_action_pops_one(cx: &mut TestAppContext) {
        let container = cx.new(|cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
        });
        let nav = cx.read(|cx| container.read(cx).handle());

        cx.update(|cx| {
            nav.push(cx, Shop::Catalog);
            nav.push(cx, Shop::Product(1));
            nav.push(cx, Shop::Cart);
        });

        container.update(cx, |this, cx| this.go_back(cx));
        assert_eq!(
            cx.read(|cx| nav.routes(cx)),
            vec![Shop::Catalog, Shop::Product(1)]
        );

        container.update(cx, |this, cx| {
            this.go_back(cx);
            this.go_back(cx);
            this.go_back(cx);
        });
        assert_eq!(cx.read(|cx| nav.depth(cx)), 0);
    }

    #[gpui::test]
    fn test_titles_follow_top_route(cx: &mut TestAppContext) {
        let container = cx.new(|cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
                .root_title("Shop")
                .back_label("Return")
        });
        let nav = cx.read(|cx| container.read(cx).handle());

        let title = cx.read(|cx| container.read(cx).current_title(cx));
        assert_eq!(title, Some(SharedString::from("Shop")));

        cx.update(|cx| nav.push(cx, Shop::Catalog));
        let title = cx.read(|cx| container.read(cx).current_title(cx));
        assert_eq!(title, None);

        cx.update(|cx| nav.push(cx, Shop::Cart));
        let title = cx.read(|cx| container.read(cx).current_title(cx));
        assert_eq!(title, Some(SharedString::from("Cart")));
    }

    #[gpui::test]
    fn test_containers_do_not_share_stacks(cx: &mut TestAppContext) {
        let first =
            cx.update(|cx| navigation_stack::<ShopRoutes, _>(cx, |_, _| div().into_any_element()));
        let second =
            cx.update(|cx| navigation_stack::<ShopRoutes, _>(cx, |_, _| div().into_any_element()));

        let first_nav = cx.read(|cx| first.read(cx).handle());
        let second_nav = cx.read(|cx| second.read(cx).handle());
        assert_ne!(first_nav, second_nav);

        cx.update(|cx| first_nav.push(cx, Shop::Cart));
        assert_eq!(cx.read(|cx| first_nav.depth(cx)), 1);
        assert_eq!(cx.read(|cx| second_nav.depth(cx)), 0);
    }

    fn press_back(cx: &mut VisualTestContext) {
        let bounds = cx
            .debug_bounds("navigation-back")
            .expect("back button should be rendered");
        cx.simulate_mouse_down(bounds.center(), MouseButton::Left, Modifiers::none());
    }

    #[gpui::test]
    fn test_rendered_root_has_no_back_button(cx: &mut TestAppContext) {
        reset_shown();
        let root_builds = Rc::new(Cell::new(0_usize));
        let (_view, cx) = {
            let root_builds = root_builds.clone();
            cx.add_window_view(|_window, cx| {
                NavigationStack::<ShopRoutes>::new(cx, move |_, _| {
                    root_builds.set(root_builds.get() + 1);
                    div().child("storefront").into_any_element()
                })
                .root_title("Shop")
            })
        };

        assert!(root_builds.get() > 0);
        assert!(shown().is_empty());
        assert!(cx.debug_bounds("navigation-header").is_some());
        assert!(cx.debug_bounds("navigation-back").is_none());
    }

    #[gpui::test]
    fn test_back_button_pops_one_route(cx: &mut TestAppContext) {
        reset_shown();
        let (view, cx) = cx.add_window_view(|_window, cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
        });
        let nav = cx.read(|cx| view.read(cx).handle());

        cx.update(|_window, cx| {
            nav.push(cx, Shop::Catalog);
            nav.push(cx, Shop::Product(4));
        });
        assert_eq!(cx.read(|cx| nav.depth(cx)), 2);
        assert_eq!(shown().last(), Some(&Shop::Product(4)));
        assert!(cx.debug_bounds("navigation-back").is_some());

        press_back(cx);
        assert_eq!(cx.read(|cx| nav.routes(cx)), vec![Shop::Catalog]);
        assert_eq!(shown().last(), Some(&Shop::Catalog));

        press_back(cx);
        assert_eq!(cx.read(|cx| nav.depth(cx)), 0);
        assert!(cx.debug_bounds("navigation-back").is_none());
    }

    #[gpui::test]
    fn test_hidden_header_is_not_rendered(cx: &mut TestAppContext) {
        let (view, cx) = cx.add_window_view(|_window, cx| {
            NavigationStack::<ShopRoutes>::from_content(cx, |_| div().into_any_element())
                .show_header(false)
        });
        let nav = cx.read(|cx| view.read(cx).handle());

        cx.update(|_window, cx| nav.push(cx, Shop::Cart));

        assert_eq!(cx.read(|cx| nav.depth(cx)), 1);
        assert!(cx.debug_bounds("navigation-header").is_none());
        assert!(cx.debug_bounds("navigation-back").is_none());
    }
}
