//! Sampler - snapshot of candidate centroids taken at drag start
//!
//! Layout is measured once per gesture. Pointer moves only compare
//! against this snapshot, so nothing here runs at pointer-move rate.

use crate::primitives::Position;

/// A rendered page button the pointer can be dropped against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub item_id: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub item_id: String,
    pub index: usize,
    /// Document coordinates.
    pub centroid: Position,
}

/// Environment that knows where page buttons are on screen.
pub trait Geometry {
    /// Held for exactly as long as a drag is live; dropping it releases
    /// whatever document-level capture was taken.
    type Capture;

    fn rendered_items(&self) -> Vec<RenderedItem>;

    /// Center of the item's bounding box in document coordinates, or
    /// `None` if the element is gone.
    fn measure_centroid(&self, item_id: &str) -> Option<Position>;

    fn scroll_offset(&self) -> Position;

    fn capture_pointer(&self) -> Self::Capture;
}

/// Measure every rendered item except `exclude_id`.
pub fn sample<G: Geometry + ?Sized>(geometry: &G, exclude_id: &str) -> Vec<Candidate> {
    geometry
        .rendered_items()
        .into_iter()
        .filter(|item| item.item_id != exclude_id)
        .filter_map(|item| {
            let centroid = geometry.measure_centroid(&item.item_id);
            if centroid.is_none() {
                tracing::debug!(item_id = %item.item_id, "candidate vanished before measurement");
            }
            centroid.map(|centroid| Candidate {
                item_id: item.item_id,
                index: item.index,
                centroid,
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// Fixed layout with a settable scroll offset and a live-capture counter.
    pub struct FakeGeometry {
        pub items: Vec<(String, Option<Position>)>,
        pub scroll: Cell<Position>,
        pub captures: Rc<Cell<i32>>,
    }

    pub struct FakeCapture(Rc<Cell<i32>>);

    impl Drop for FakeCapture {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    impl FakeGeometry {
        /// One row of items at the given x centroids, y = 20.
        pub fn row(names: &[&str], xs: &[f32]) -> Self {
            Self {
                items: names
                    .iter()
                    .zip(xs)
                    .map(|(n, &x)| (n.to_string(), Some(Position::new(x, 20.0))))
                    .collect(),
                scroll: Cell::new(Position::ORIGIN),
                captures: Rc::new(Cell::new(0)),
            }
        }

        pub fn live_captures(&self) -> i32 {
            self.captures.get()
        }
    }

    impl Geometry for FakeGeometry {
        type Capture = FakeCapture;

        fn rendered_items(&self) -> Vec<RenderedItem> {
            self.items
                .iter()
                .enumerate()
                .map(|(index, (id, _))| RenderedItem {
                    item_id: id.clone(),
                    index,
                })
                .collect()
        }

        fn measure_centroid(&self, item_id: &str) -> Option<Position> {
            self.items
                .iter()
                .find(|(id, _)| id == item_id)
                .and_then(|(_, c)| *c)
        }

        fn scroll_offset(&self) -> Position {
            self.scroll.get()
        }

        fn capture_pointer(&self) -> FakeCapture {
            self.captures.set(self.captures.get() + 1);
            FakeCapture(self.captures.clone())
        }
    }
}
