//! Reorder - drag a page over another to move it
//!
//! - `sampler` → centroids of the other pages, measured once at drag start
//! - `proximity` → nearest centroid and BEFORE/AFTER side per pointer move
//! - `session` → Idle/Dragging state machine that owns one gesture
//! - `engine` → pure relocation of the dragged page + active-index remap

pub mod engine;
pub mod error;
pub mod proximity;
pub mod sampler;
pub mod session;

pub use proximity::Side;
pub use sampler::{Geometry, RenderedItem};
pub use session::DragMachine;
