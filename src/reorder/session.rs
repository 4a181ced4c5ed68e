//! Session - the drag gesture state machine
//!
//! `Idle → Dragging → Idle`. One slot, so a second drag cannot start
//! while one is live. Every exit path drops the session, and with it
//! the pointer capture it holds.

use std::mem;

use crate::primitives::Position;
use crate::store::{PageItem, PageStore};

use super::engine::{self, Reordered};
use super::error::ReorderError;
use super::proximity::{self, Side};
use super::sampler::{self, Candidate, Geometry};

/// Latest resolved drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub item_id: String,
    pub index: usize,
    pub side: Side,
}

/// Everything one gesture knows. Lives exactly as long as the gesture.
pub struct DragSession<C> {
    pub item: PageItem,
    pub index: usize,
    pub candidates: Vec<Candidate>,
    pub target: Option<DropTarget>,
    _capture: C,
}

pub enum DragState<C> {
    Idle,
    Dragging(DragSession<C>),
}

/// Read-only projection for drawing insertion feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub is_dragging: bool,
    pub dragged_id: Option<String>,
    pub target_id: Option<String>,
    pub side: Option<Side>,
}

impl SessionView {
    /// Side to highlight on `item_id`, if it is the current target.
    pub fn edge_for(&self, item_id: &str) -> Option<Side> {
        match self.target_id.as_deref() {
            Some(id) if id == item_id => self.side,
            _ => None,
        }
    }
}

pub struct DragMachine<G: Geometry> {
    state: DragState<G::Capture>,
}

impl<G: Geometry> Default for DragMachine<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Geometry> DragMachine<G> {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession<G::Capture>> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn view(&self) -> SessionView {
        match self.session() {
            Some(session) => SessionView {
                is_dragging: true,
                dragged_id: Some(session.item.name.clone()),
                target_id: session.target.as_ref().map(|t| t.item_id.clone()),
                side: session.target.as_ref().map(|t| t.side),
            },
            None => SessionView::default(),
        }
    }

    /// Begin dragging `item`, sampling every other rendered page once.
    /// Returns `false` if a drag is already live.
    pub fn start_drag(&mut self, geometry: &G, item: PageItem, index: usize) -> bool {
        if self.is_dragging() {
            tracing::warn!(name = %item.name, "start_drag while a drag is live; ignored");
            return false;
        }

        let candidates = sampler::sample(geometry, &item.name);
        tracing::debug!(name = %item.name, index, candidates = candidates.len(), "drag started");
        self.state = DragState::Dragging(DragSession {
            item,
            index,
            candidates,
            target: None,
            _capture: geometry.capture_pointer(),
        });
        true
    }

    /// Feed a pointer position in client coordinates. Keeps the previous
    /// target when nothing resolves.
    pub fn pointer_move(&mut self, geometry: &G, client: Position) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };

        let pointer = client.to_document(geometry.scroll_offset());
        if let Some(hit) = proximity::resolve(pointer, &session.candidates) {
            tracing::trace!(target_id = %hit.target.item_id, side = ?hit.side, "pointer resolved");
            session.target = Some(DropTarget {
                item_id: hit.target.item_id.clone(),
                index: hit.target.index,
                side: hit.side,
            });
        }
    }

    /// Finish the gesture. Applies the move to `store` when the session
    /// resolved a live target other than the dragged page; otherwise
    /// nothing changes. The machine is idle afterwards either way.
    pub fn end_drag<S: PageStore + ?Sized>(&mut self, store: &mut S) -> Option<Reordered> {
        let DragState::Dragging(session) = mem::replace(&mut self.state, DragState::Idle) else {
            return None;
        };

        let pages = store.items();
        let result = plan(&session, &pages).and_then(|target| {
            engine::reorder(&pages, session.index, target.index, target.side)
        });

        match result {
            Ok(reordered) => {
                let active = engine::remap_active(
                    store.active_index(),
                    session.index,
                    reordered.insert_index,
                );
                tracing::info!(
                    name = %session.item.name,
                    from = session.index,
                    to = reordered.insert_index,
                    "page reordered"
                );
                store.set_order(reordered.pages.clone());
                store.set_active_index(active);
                Some(reordered)
            }
            Err(reason) => {
                tracing::debug!(name = %session.item.name, %reason, "drag ended without a move");
                None
            }
        }
    }

    /// Abort the gesture. Never touches the store.
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging(session) = mem::replace(&mut self.state, DragState::Idle) {
            tracing::debug!(name = %session.item.name, "drag cancelled");
        }
    }
}

/// Check the session against the live list before moving anything.
fn plan<C>(session: &DragSession<C>, pages: &[PageItem]) -> Result<DropTarget, ReorderError> {
    if session.candidates.is_empty() {
        return Err(ReorderError::EmptyCandidateSet);
    }
    match pages.get(session.index) {
        Some(page) if page.name == session.item.name => {}
        _ => {
            return Err(ReorderError::InconsistentIndex {
                index: session.index,
                len: pages.len(),
            });
        }
    }
    let target = session.target.clone().ok_or(ReorderError::NoTarget)?;

    if pages.get(target.index).map(|p| p.name.as_str()) != Some(target.item_id.as_str()) {
        return Err(ReorderError::StaleTarget {
            item_id: target.item_id,
            index: target.index,
        });
    }
    if target.index == session.index {
        return Err(ReorderError::SelfTarget);
    }
    Ok(target)
}
