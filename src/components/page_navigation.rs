use dioxus::prelude::*;

use crate::dom::{DomGeometry, LIST_ID};
use crate::primitives::Position;
use crate::reorder::DragMachine;
use crate::store::PageNavigationState;

use super::icons;
use super::{GapHiddenButton, PageNavigationButton};

/// Pointer travel before a press on a page turns into a drag.
const DRAG_THRESHOLD_PX: f32 = 4.0;

/// Mouse is down on a page but has not moved far enough to drag it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    index: usize,
    origin: Position,
}

impl Press {
    /// Travel strictly beyond the threshold turns the press into a drag.
    fn crossed(&self, pos: Position) -> bool {
        pos.distance(&self.origin) > DRAG_THRESHOLD_PX
    }
}

fn client_position(e: &Event<MouseData>) -> Position {
    let c = e.client_coordinates();
    Position::new(c.x as f32, c.y as f32)
}

#[component]
pub fn PageNavigation() -> Element {
    let mut nav = use_signal(PageNavigationState::default);
    let mut machine = use_signal(DragMachine::<DomGeometry>::new);
    let mut press = use_signal(|| None::<Press>);
    let mut hovered_gap = use_signal(|| None::<usize>);

    let state = nav.read().clone();
    let view = machine.read().view();
    let active_name = state.active_page_name().map(str::to_string);
    let live = press().is_some() || view.is_dragging;
    let last = state.pages.len().saturating_sub(1);

    rsx! {
        div {
            style: "background: white; width: 100%; padding: 20px; position: relative; box-sizing: border-box;",

            div {
                id: LIST_ID,
                // Single row: the BEFORE/AFTER split only looks at x.
                style: "display: flex; flex-wrap: nowrap; align-items: center; justify-content: flex-start; \
                        width: fit-content; max-width: 100%; overflow-x: auto; position: relative; user-select: none;",

                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; z-index: -1;",
                    div { style: "width: 100%; border-top: 1px dashed black;" }
                }

                for (idx, page) in state.pages.iter().enumerate() {
                    PageNavigationButton {
                        key: "{page.name}",
                        is_active: active_name.as_deref() == Some(page.name.as_str()),
                        edge: view.edge_for(&page.name),
                        dimmed: view.dragged_id.as_deref() == Some(page.name.as_str()),
                        index: idx,
                        page: page.clone(),
                        on_press: move |origin| press.set(Some(Press { index: idx, origin })),
                        on_remove: move |_| {
                            if nav.read().pages.len() > 1 {
                                nav.write().remove_page(idx);
                            }
                        },
                    }
                    if idx < last {
                        GapHiddenButton {
                            key: "gap-{idx}",
                            is_hovered: hovered_gap() == Some(idx),
                            on_add: move |_| {
                                nav.write().add_page(Some(idx + 1));
                            },
                            on_hover: move |hovering: bool| {
                                hovered_gap.set(if hovering { Some(idx) } else { None });
                            },
                        }
                    }
                }

                button {
                    style: "display: flex; align-items: center; justify-content: center; gap: 8px; \
                            flex-shrink: 0; margin-left: 20px; padding: 6px 10px; border-radius: 8px; \
                            border: none; background: white; color: #111827; cursor: pointer; \
                            box-shadow: 0 1px 2px rgba(0,0,0,0.08); font-family: system-ui, sans-serif;",
                    onclick: move |_| {
                        nav.write().add_page(None);
                    },
                    span {
                        style: "display: flex; min-width: 16px; min-height: 16px;",
                        dangerous_inner_html: icons::PLUS,
                    }
                    span { style: "font-size: 14px;", "Add page" }
                }
            }

            // Pointer overlay, mounted only while a press or drag is live
            if live {
                div {
                    tabindex: "-1",
                    style: "position: fixed; inset: 0; z-index: 100; cursor: grabbing; outline: none;",
                    onmounted: move |e: MountedEvent| async move {
                        let _ = e.set_focus(true).await;
                    },
                    onmousemove: move |e: Event<MouseData>| {
                        let pos = client_position(&e);
                        if let Some(p) = press() {
                            if !p.crossed(pos) {
                                return;
                            }
                            press.set(None);
                            let item = nav.read().pages.get(p.index).cloned();
                            if let Some(item) = item {
                                machine.write().start_drag(&DomGeometry, item, p.index);
                            }
                        }
                        machine.write().pointer_move(&DomGeometry, pos);
                    },
                    onmouseup: move |_| {
                        if let Some(p) = press() {
                            press.set(None);
                            nav.write().set_active_page(p.index);
                        } else {
                            // Any move has already been written to `nav`.
                            machine.write().end_drag(&mut nav);
                        }
                    },
                    onmouseleave: move |_| {
                        press.set(None);
                        machine.write().cancel_drag();
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Escape {
                            press.set(None);
                            machine.write().cancel_drag();
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_at_origin() -> Press {
        Press {
            index: 2,
            origin: Position::new(100.0, 40.0),
        }
    }

    #[test]
    fn short_travel_stays_a_press() {
        let p = press_at_origin();
        assert!(!p.crossed(Position::new(100.0, 40.0)));
        assert!(!p.crossed(Position::new(103.9, 40.0)));
    }

    #[test]
    fn exactly_threshold_stays_a_press() {
        let p = press_at_origin();
        assert!(!p.crossed(Position::new(104.0, 40.0)));
        assert!(!p.crossed(Position::new(100.0, 36.0)));
    }

    #[test]
    fn travel_past_threshold_starts_drag() {
        let p = press_at_origin();
        assert!(p.crossed(Position::new(104.1, 40.0)));
        assert!(p.crossed(Position::new(97.0, 37.0)));
    }
}
