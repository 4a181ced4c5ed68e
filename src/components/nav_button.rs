use dioxus::prelude::*;

use crate::dom::{BUTTON_CLASS, button_id};
use crate::primitives::Position;
use crate::reorder::Side;
use crate::store::PageItem;

use super::icons;

const ACCENT: &str = "#3b82f6";

#[component]
pub fn PageNavigationButton(
    page: PageItem,
    index: usize,
    is_active: bool,
    edge: Option<Side>,
    dimmed: bool,
    on_press: EventHandler<Position>,
    on_remove: EventHandler<()>,
) -> Element {
    let (bg, color) = if is_active {
        ("white", "#111827")
    } else {
        ("rgba(156,163,175,0.15)", "#4b5563")
    };
    let border_left = match edge {
        Some(Side::Before) => format!("4px solid {ACCENT}"),
        _ => "1px solid transparent".to_string(),
    };
    let border_right = match edge {
        Some(Side::After) => format!("4px solid {ACCENT}"),
        _ => "1px solid transparent".to_string(),
    };
    let opacity = if dimmed { "0.5" } else { "1" };
    let icon = icons::page_icon(page.icon);
    let icon_color = icons::icon_color(page.icon, is_active);
    let id = button_id(&page.name);

    rsx! {
        button {
            id: "{id}",
            class: BUTTON_CLASS,
            "data-page": "{page.name}",
            "data-index": "{index}",
            "data-icon": page.icon.as_str(),
            style: "display: flex; align-items: center; gap: 8px; position: relative; z-index: 10; \
                    flex-shrink: 0; padding: 6px 10px; border-radius: 8px; \
                    box-shadow: 0 1px 2px rgba(0,0,0,0.08); \
                    border-top: 1px solid transparent; border-bottom: 1px solid transparent; \
                    border-left: {border_left}; border-right: {border_right}; \
                    background: {bg}; color: {color}; opacity: {opacity}; \
                    cursor: grab; font-family: system-ui, sans-serif; \
                    transition: background 0.1s linear;",
            tabindex: "-1",
            onmousedown: move |e: Event<MouseData>| {
                e.prevent_default();
                let c = e.client_coordinates();
                on_press.call(Position::new(c.x as f32, c.y as f32));
            },
            span {
                style: "display: flex; align-items: center; justify-content: center; \
                        min-width: 20px; min-height: 20px; color: {icon_color};",
                dangerous_inner_html: icon,
            }
            span {
                style: "font-size: 14px;",
                "{page.label}"
            }
            if is_active {
                span {
                    title: "Remove page",
                    style: "display: flex; width: 16px; height: 16px; color: #d1d5db; cursor: pointer;",
                    dangerous_inner_html: icons::DOTS,
                    onmousedown: move |e: Event<MouseData>| e.stop_propagation(),
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        on_remove.call(());
                    },
                }
            }
        }
    }
}
