//! Engine - pure list relocation and active-index remap

use crate::store::PageItem;

use super::error::ReorderError;
use super::proximity::Side;

/// Result of moving one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Reordered {
    pub pages: Vec<PageItem>,
    pub insert_index: usize,
}

/// Slot the dragged page lands in once it has been lifted out of the list.
pub fn insert_index(dragged: usize, target: usize, side: Side) -> usize {
    match side {
        Side::Before if target > dragged => target - 1,
        Side::Before => target,
        Side::After if target > dragged => target,
        Side::After => target + 1,
    }
}

/// Lift the page at `dragged` and drop it beside `target`.
///
/// Every other page keeps its relative order and every `position` is
/// rewritten to the new index. Dropping a page onto itself returns the
/// input unchanged.
pub fn reorder(
    pages: &[PageItem],
    dragged: usize,
    target: usize,
    side: Side,
) -> Result<Reordered, ReorderError> {
    let len = pages.len();
    for index in [dragged, target] {
        if index >= len {
            return Err(ReorderError::InconsistentIndex { index, len });
        }
    }

    if dragged == target {
        return Ok(Reordered {
            pages: pages.to_vec(),
            insert_index: dragged,
        });
    }

    let insert_index = insert_index(dragged, target, side);
    let mut out = pages.to_vec();
    let page = out.remove(dragged);
    out.insert(insert_index, page);
    for (i, page) in out.iter_mut().enumerate() {
        page.position = i;
    }

    Ok(Reordered {
        pages: out,
        insert_index,
    })
}

/// Keep the active index on the same logical page after a move.
pub fn remap_active(active: usize, dragged: usize, insert_index: usize) -> usize {
    if active == dragged {
        insert_index
    } else if dragged < active && active <= insert_index {
        active - 1
    } else if insert_index <= active && active < dragged {
        active + 1
    } else {
        active
    }
}
