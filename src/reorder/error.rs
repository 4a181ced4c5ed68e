//! Reasons a drag ends without moving anything.
//!
//! None of these reach the user: a failed reorder looks exactly like
//! releasing the pointer without crossing another page.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// The resolved target no longer names the same page in the live list.
    #[error("target `{item_id}` is no longer at index {index}")]
    StaleTarget { item_id: String, index: usize },

    /// No other page was rendered when the drag started.
    #[error("no candidates to drop against")]
    EmptyCandidateSet,

    /// No target was resolved during the gesture.
    #[error("pointer never resolved a target")]
    NoTarget,

    #[error("page dropped onto itself")]
    SelfTarget,

    #[error("index {index} out of bounds for {len} pages")]
    InconsistentIndex { index: usize, len: usize },
}
