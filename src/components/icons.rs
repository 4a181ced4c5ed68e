//! Inline SVG glyphs. `currentColor` lets the caller tint them.

use crate::store::PageIcon;

pub const INFO: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/></svg>"#;
pub const FILE: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/></svg>"#;
pub const CHECK: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10"/><polyline points="8 12 11 15 16 9"/></svg>"#;
pub const DOTS: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor"><circle cx="5" cy="12" r="1.6"/><circle cx="12" cy="12" r="1.6"/><circle cx="19" cy="12" r="1.6"/></svg>"#;
pub const PLUS: &str = r#"<svg width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5"><line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/></svg>"#;

pub const fn page_icon(icon: PageIcon) -> &'static str {
    match icon {
        PageIcon::Info => INFO,
        PageIcon::File => FILE,
        PageIcon::Check => CHECK,
    }
}

/// Info and check icons pick up an accent when their page is active.
pub const fn icon_color(icon: PageIcon, active: bool) -> &'static str {
    match (icon, active) {
        (PageIcon::Info, true) => "#f97316",
        (PageIcon::Check, true) => "#16a34a",
        (PageIcon::File, _) => "#374151",
        _ => "#9ca3af",
    }
}
