//! DOM geometry for the page bar, read through web-sys
//!
//! Page buttons live under `#page-nav-list`, carry the `page-button`
//! class, and expose their page name and index as `data-page` /
//! `data-index`. Their element id is `page-button-<name>`.

use crate::primitives::{Position, Rect};
use crate::reorder::{Geometry, RenderedItem};

pub const LIST_ID: &str = "page-nav-list";
pub const BUTTON_CLASS: &str = "page-button";
const BUTTON_ID_PREFIX: &str = "page-button-";

pub fn button_id(name: &str) -> String {
    format!("{BUTTON_ID_PREFIX}{name}")
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Geometry of the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomGeometry;

impl Geometry for DomGeometry {
    type Capture = CursorCapture;

    fn rendered_items(&self) -> Vec<RenderedItem> {
        let mut items = Vec::new();
        let Some(list) = document().and_then(|d| d.get_element_by_id(LIST_ID)) else {
            tracing::warn!("#{LIST_ID} not mounted");
            return items;
        };
        let buttons = list.get_elements_by_class_name(BUTTON_CLASS);
        for i in 0..buttons.length() {
            let Some(el) = buttons.item(i) else { continue };
            let name = el.get_attribute("data-page");
            let index = el
                .get_attribute("data-index")
                .and_then(|v| v.parse::<usize>().ok());
            if let (Some(item_id), Some(index)) = (name, index) {
                items.push(RenderedItem { item_id, index });
            }
        }
        items
    }

    fn measure_centroid(&self, item_id: &str) -> Option<Position> {
        let el = document()?.get_element_by_id(&button_id(item_id))?;
        let rect = Rect::from_dom(&el.get_bounding_client_rect());
        Some(rect.centroid_in_document(self.scroll_offset()))
    }

    fn scroll_offset(&self) -> Position {
        let Some(window) = web_sys::window() else {
            return Position::ORIGIN;
        };
        let x = window.scroll_x().unwrap_or(0.0) as f32;
        let y = window.scroll_y().unwrap_or(0.0) as f32;
        Position::new(x, y)
    }

    fn capture_pointer(&self) -> CursorCapture {
        CursorCapture::acquire()
    }
}

/// Body styles held for the life of a drag.
const CAPTURE_STYLE: [(&str, &str); 2] = [("cursor", "grabbing"), ("user-select", "none")];

/// Grabbing cursor and no text selection on `<body>` while a drag is
/// live. Restored on drop.
pub struct CursorCapture {
    body: Option<web_sys::HtmlElement>,
}

impl CursorCapture {
    fn acquire() -> Self {
        let body = document().and_then(|d| d.body());
        if let Some(body) = &body {
            let style = body.style();
            for (name, value) in CAPTURE_STYLE {
                if let Err(err) = style.set_property(name, value) {
                    tracing::debug!(name, ?err, "body style not set");
                }
            }
        }
        Self { body }
    }
}

impl Drop for CursorCapture {
    fn drop(&mut self) {
        if let Some(body) = &self.body {
            let style = body.style();
            for (name, _) in CAPTURE_STYLE {
                if let Err(err) = style.remove_property(name) {
                    tracing::debug!(name, ?err, "body style not restored");
                }
            }
        }
    }
}
