use dioxus::prelude::*;

use super::icons;

/// Spacer between two pages that widens on hover and reveals a "+".
#[component]
pub fn GapHiddenButton(
    is_hovered: bool,
    on_add: EventHandler<()>,
    on_hover: EventHandler<bool>,
) -> Element {
    let width = if is_hovered { 40 } else { 20 };
    let display = if is_hovered { "flex" } else { "none" };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; \
                    flex-shrink: 0; min-height: 32px; min-width: {width}px; \
                    transition: min-width 0.15s ease-in-out 0.075s;",
            onmouseenter: move |_| on_hover.call(true),
            onmouseleave: move |_| on_hover.call(false),
            div {
                title: "Insert page",
                style: "display: {display}; align-items: center; justify-content: center; \
                        padding: 4px; border-radius: 9999px; background: white; color: black; \
                        box-shadow: 0 1px 2px rgba(0,0,0,0.1); cursor: pointer;",
                dangerous_inner_html: icons::PLUS,
                onclick: move |_| on_add.call(()),
            }
        }
    }
}
