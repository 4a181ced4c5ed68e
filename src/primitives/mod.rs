//! Geometry primitives shared by the drag core and the DOM layer
//!
//! - `Position` → point with distance and client→document transform
//! - `Rect` → bounding box with centroid helpers

pub mod position;
pub mod rect;

pub use position::Position;
pub use rect::Rect;
