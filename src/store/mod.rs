//! Store - owner of the page list and the active index
//!
//! The drag core never touches the store directly. It reads a snapshot
//! through `PageStore` at drag end and submits one replacement order
//! plus the remapped active index.

mod page;
mod state;

pub use page::{PageIcon, PageItem};
pub use state::PageNavigationState;

use dioxus::prelude::*;

/// Mutation contract between the drag core and whoever owns the pages.
pub trait PageStore {
    fn items(&self) -> Vec<PageItem>;
    fn active_index(&self) -> usize;
    /// Atomic replace of the whole order.
    fn set_order(&mut self, pages: Vec<PageItem>);
    fn set_active_index(&mut self, index: usize);
}

impl PageStore for PageNavigationState {
    fn items(&self) -> Vec<PageItem> {
        self.pages.clone()
    }

    fn active_index(&self) -> usize {
        self.active_page
    }

    fn set_order(&mut self, pages: Vec<PageItem>) {
        self.set_page_order(pages);
    }

    fn set_active_index(&mut self, index: usize) {
        self.set_active_page(index);
    }
}

impl PageStore for Signal<PageNavigationState> {
    fn items(&self) -> Vec<PageItem> {
        self.read().pages.clone()
    }

    fn active_index(&self) -> usize {
        self.read().active_page
    }

    fn set_order(&mut self, pages: Vec<PageItem>) {
        self.write().set_page_order(pages);
    }

    fn set_active_index(&mut self, index: usize) {
        self.write().set_active_page(index);
    }
}
