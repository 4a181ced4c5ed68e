mod components;
mod dom;
mod primitives;
mod reorder;
mod store;

use dioxus::prelude::*;
use components::PageNavigation;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: stretch; justify-content: flex-start; \
                    min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",
            main {
                style: "display: flex; flex: 1; align-items: center; justify-content: center;",
                PageNavigation {}
            }
        }
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    tracing::info!("page navigation starting");
    dioxus::launch(App);
}
