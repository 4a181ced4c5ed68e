//! Rect - axis-aligned bounding box

use super::Position;

/// Axis-aligned bounding box in client-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Midpoint of the box, shifted into document space.
    pub fn centroid_in_document(&self, scroll: Position) -> Position {
        self.center().to_document(scroll)
    }
}
