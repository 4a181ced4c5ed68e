//! PageNavigationState - the ordered page list and the active index

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::page::{PageIcon, PageItem, default_pages, renumber};

const NEW_PAGE_LABEL: &str = "New Page";

fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::from_seed(buf)
}

/// Draw `page-xxxxxx` ids until one is not taken.
fn fresh_page_name<R: Rng>(rng: &mut R, pages: &[PageItem]) -> String {
    loop {
        let name = format!("page-{:06x}", rng.random_range(0..0x100_0000u32));
        if !pages.iter().any(|p| p.name == name) {
            return name;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageNavigationState {
    pub active_page: usize,
    pub pages: Vec<PageItem>,
}

impl Default for PageNavigationState {
    fn default() -> Self {
        Self::new(default_pages())
    }
}

impl PageNavigationState {
    pub fn new(mut pages: Vec<PageItem>) -> Self {
        renumber(&mut pages);
        Self { active_page: 0, pages }
    }

    pub fn active_page_name(&self) -> Option<&str> {
        self.pages.get(self.active_page).map(|p| p.name.as_str())
    }

    /// Insert a blank page at `at` (clamped), or append when `None`.
    /// Returns the new page's name.
    pub fn add_page(&mut self, at: Option<usize>) -> String {
        self.add_page_with(&mut fresh_rng(), at)
    }

    fn add_page_with<R: Rng>(&mut self, rng: &mut R, at: Option<usize>) -> String {
        let len = self.pages.len();
        let index = at.map_or(len, |i| i.min(len));
        let name = fresh_page_name(rng, &self.pages);

        self.pages
            .insert(index, PageItem::new(name.clone(), NEW_PAGE_LABEL, PageIcon::File));
        renumber(&mut self.pages);

        if len > 0 && index <= self.active_page {
            self.active_page += 1;
        }
        tracing::info!(%name, index, "page added");
        name
    }

    pub fn remove_page(&mut self, index: usize) -> Option<PageItem> {
        if index >= self.pages.len() {
            tracing::warn!(index, len = self.pages.len(), "remove_page out of range");
            return None;
        }
        let removed = self.pages.remove(index);
        renumber(&mut self.pages);

        if self.pages.is_empty() {
            self.active_page = 0;
        } else if index < self.active_page {
            self.active_page -= 1;
        } else {
            self.active_page = self.active_page.min(self.pages.len() - 1);
        }
        tracing::info!(name = %removed.name, index, "page removed");
        Some(removed)
    }

    pub fn set_active_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.active_page = index;
        } else {
            tracing::warn!(index, len = self.pages.len(), "set_active_page out of range");
        }
    }

    /// Replace the whole order at once.
    pub fn set_page_order(&mut self, mut pages: Vec<PageItem>) {
        renumber(&mut pages);
        self.pages = pages;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(state: &PageNavigationState) -> Vec<&str> {
        state.pages.iter().map(|p| p.name.as_str()).collect()
    }

    fn assert_ranked(state: &PageNavigationState) {
        for (i, p) in state.pages.iter().enumerate() {
            assert_eq!(p.position, i, "position of {}", p.name);
        }
    }

    #[test]
    fn default_state() {
        let state = PageNavigationState::default();
        assert_eq!(state.active_page, 0);
        assert_eq!(state.active_page_name(), Some("info"));
        assert_eq!(state.pages.len(), 4);
    }

    #[test]
    fn add_page_appends_by_default() {
        let mut state = PageNavigationState::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let name = state.add_page_with(&mut rng, None);
        assert_eq!(state.pages.len(), 5);
        assert_eq!(state.pages[4].name, name);
        assert_eq!(state.pages[4].label, "New Page");
        assert_eq!(state.pages[4].icon, PageIcon::File);
        assert!(name.starts_with("page-"));
        assert_ranked(&state);
    }

    #[test]
    fn add_page_before_active_keeps_logical_active() {
        let mut state = PageNavigationState::default();
        state.set_active_page(2);
        let mut rng = SmallRng::seed_from_u64(1);
        state.add_page_with(&mut rng, Some(1));
        assert_eq!(state.active_page_name(), Some("other"));
        assert_eq!(state.active_page, 3);
        assert_ranked(&state);
    }

    #[test]
    fn add_page_after_active_leaves_index() {
        let mut state = PageNavigationState::default();
        state.set_active_page(1);
        let mut rng = SmallRng::seed_from_u64(2);
        state.add_page_with(&mut rng, Some(2));
        assert_eq!(state.active_page, 1);
        assert_eq!(state.active_page_name(), Some("details"));
    }

    #[test]
    fn add_page_clamps_insertion_point() {
        let mut state = PageNavigationState::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let name = state.add_page_with(&mut rng, Some(99));
        assert_eq!(state.pages.last().map(|p| p.name.as_str()), Some(name.as_str()));
    }

    #[test]
    fn add_page_into_empty_list() {
        let mut state = PageNavigationState::new(Vec::new());
        let mut rng = SmallRng::seed_from_u64(4);
        state.add_page_with(&mut rng, Some(0));
        assert_eq!(state.active_page, 0);
        assert_eq!(state.pages.len(), 1);
    }

    #[test]
    fn added_names_stay_unique() {
        let mut state = PageNavigationState::default();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..64 {
            state.add_page_with(&mut rng, None);
        }
        let mut all = names(&state);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), state.pages.len());
    }

    #[test]
    fn remove_before_active_shifts_down() {
        let mut state = PageNavigationState::default();
        state.set_active_page(3);
        let removed = state.remove_page(1);
        assert_eq!(removed.map(|p| p.name), Some("details".to_string()));
        assert_eq!(names(&state), ["info", "other", "ending"]);
        assert_eq!(state.active_page_name(), Some("ending"));
        assert_ranked(&state);
    }

    #[test]
    fn remove_active_last_clamps() {
        let mut state = PageNavigationState::default();
        state.set_active_page(3);
        state.remove_page(3);
        assert_eq!(state.active_page, 2);
        assert_eq!(state.active_page_name(), Some("other"));
    }

    #[test]
    fn remove_active_middle_keeps_slot() {
        let mut state = PageNavigationState::default();
        state.set_active_page(1);
        state.remove_page(1);
        assert_eq!(state.active_page, 1);
        assert_eq!(state.active_page_name(), Some("other"));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut state = PageNavigationState::default();
        assert!(state.remove_page(4).is_none());
        assert_eq!(state.pages.len(), 4);
    }

    #[test]
    fn remove_everything() {
        let mut state = PageNavigationState::default();
        state.set_active_page(2);
        while !state.pages.is_empty() {
            state.remove_page(0);
        }
        assert_eq!(state.active_page, 0);
        assert_eq!(state.active_page_name(), None);
    }

    #[test]
    fn set_active_rejects_out_of_range() {
        let mut state = PageNavigationState::default();
        state.set_active_page(2);
        state.set_active_page(10);
        assert_eq!(state.active_page, 2);
    }

    #[test]
    fn set_page_order_renumbers() {
        let mut state = PageNavigationState::default();
        let mut reversed = state.pages.clone();
        reversed.reverse();
        state.set_page_order(reversed);
        assert_eq!(names(&state), ["ending", "other", "details", "info"]);
        assert_ranked(&state);
    }
}
