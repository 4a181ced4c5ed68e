//! Components - the page bar and its buttons

mod gap_button;
mod icons;
mod nav_button;
mod page_navigation;

pub use gap_button::GapHiddenButton;
pub use nav_button::PageNavigationButton;
pub use page_navigation::PageNavigation;
