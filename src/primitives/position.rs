//! Position - a point in client or document pixel space
//!
//! Pointer events report client (viewport) coordinates. Centroids are
//! cached in document coordinates so that scrolling during a drag does
//! not move them; `to_document` bridges the two.

/// Point in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Client coordinates plus the current scroll offset on both axes.
    pub fn to_document(&self, scroll: Position) -> Self {
        self.translate(scroll.x, scroll.y)
    }
}
