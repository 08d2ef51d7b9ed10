//! Route Stack Demo
//!
//! Two side-by-side navigation stacks over the same route family. Each column
//! owns its own stack, so navigating in one never affects the other.
//!
//! Run with `RUST_LOG=debug cargo run --example stack_demo` to see every push
//! and pop logged.

use gpui::*;
use gpui_route_stack::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CatRoute {
    Breeds,
    Breed(u32),
    Photo { breed: u32, index: usize },
}

const BREEDS: [&str; 4] = ["Abyssinian", "Bengal", "Maine Coon", "Siamese"];

struct CatRoutes;

impl RouteFamily for CatRoutes {
    type Route = CatRoute;

    fn destination(route: &CatRoute, nav: &StackHandle<CatRoute>, _cx: &mut App) -> AnyElement {
        match route {
            CatRoute::Breeds => breed_list(nav),
            CatRoute::Breed(id) => breed_detail(nav, *id),
            CatRoute::Photo { breed, index } => photo(nav, *breed, *index),
        }
    }

    fn title(route: &CatRoute) -> Option<SharedString> {
        let title = match route {
            CatRoute::Breeds => "Breeds".to_string(),
            CatRoute::Breed(id) => breed_name(*id).to_string(),
            CatRoute::Photo { breed, index } => format!("{} #{}", breed_name(*breed), index + 1),
        };
        Some(title.into())
    }
}

fn breed_name(id: u32) -> &'static str {
    BREEDS.get(id as usize).copied().unwrap_or("Unknown")
}

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(900.), px(600.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Route Stack Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(DemoApp::new),
        )
        .unwrap();

        cx.activate(true);
    });
}

// ============================================================================
// Root App Component
// ============================================================================

struct DemoApp {
    left: Entity<NavigationStack<CatRoutes>>,
    right: Entity<NavigationStack<CatRoutes>>,
}

impl DemoApp {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        Self {
            left: cx.new(|cx| {
                NavigationStack::<CatRoutes>::new(cx, |nav, _cx| home(nav, "Left tab"))
                    .root_title("Catergram")
            }),
            right: cx.new(|cx| {
                NavigationStack::<CatRoutes>::new(cx, |nav, _cx| home(nav, "Right tab"))
                    .root_title("Favourites")
                    .back_label("‹ Back")
            }),
        }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
        div()
            .flex()
            .size_full()
            .bg(rgb(0xfafafa))
            .text_color(rgb(0x222222))
            .child(
                div()
                    .flex_1()
                    .border_r_1()
                    .border_color(rgb(0xdddddd))
                    .child(self.left.clone()),
            )
            .child(div().flex_1().child(self.right.clone()))
    }
}

// ============================================================================
// Screens
// ============================================================================

fn button(label: impl Into<SharedString>, on_click: impl Fn(&mut App) + 'static) -> Div {
    div()
        .px_4()
        .py_2()
        .bg(rgb(0xe3f2fd))
        .rounded_md()
        .cursor_pointer()
        .hover(|style| style.bg(rgb(0xbbdefb)))
        .child(label.into())
        .on_mouse_down(MouseButton::Left, move |_, _, cx| on_click(cx))
}

fn home(nav: &StackHandle<CatRoute>, label: &'static str) -> AnyElement {
    let nav = nav.clone();
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_8()
        .child(div().text_2xl().child(label))
        .child(button("Browse breeds", move |cx| {
            nav.push(cx, CatRoute::Breeds);
        }))
        .into_any_element()
}

fn breed_list(nav: &StackHandle<CatRoute>) -> AnyElement {
    let mut list = div().flex().flex_col().gap_2().p_8();
    for (id, name) in (0_u32..).zip(BREEDS) {
        let nav = nav.clone();
        list = list.child(button(name, move |cx| {
            nav.push(cx, CatRoute::Breed(id));
        }));
    }
    list.into_any_element()
}

fn breed_detail(nav: &StackHandle<CatRoute>, breed: u32) -> AnyElement {
    let photos = nav.clone();
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_8()
        .child(div().text_xl().child(breed_name(breed)))
        .child(button("Show photos", move |cx| {
            photos.push(cx, CatRoute::Photo { breed, index: 0 });
        }))
        .into_any_element()
}

fn photo(nav: &StackHandle<CatRoute>, breed: u32, index: usize) -> AnyElement {
    let next = nav.clone();
    let root = nav.clone();
    div()
        .flex()
        .flex_col()
        .gap_4()
        .p_8()
        .child(format!("Photo {} of {}", index + 1, breed_name(breed)))
        .child(button("Next photo", move |cx| {
            next.push(
                cx,
                CatRoute::Photo {
                    breed,
                    index: index + 1,
                },
            );
        }))
        .child(button("Back to start", move |cx| {
            root.pop_to_root(cx);
        }))
        .into_any_element()
}
