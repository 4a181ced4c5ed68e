//! PageItem - one entry of the page navigation bar

/// Icon tag rendered in front of a page label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIcon {
    Info,
    File,
    Check,
}

impl PageIcon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::File => "file",
            Self::Check => "check",
        }
    }
}

/// A page. `name` is the identity and is unique within a list; `position`
/// is derived and always equals the page's index after any mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageItem {
    pub name: String,
    pub label: String,
    pub position: usize,
    pub icon: PageIcon,
}

impl PageItem {
    pub fn new(name: impl Into<String>, label: impl Into<String>, icon: PageIcon) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            position: 0,
            icon,
        }
    }
}

const DEFAULT_PAGES: &[(&str, &str, PageIcon)] = &[
    ("info", "Info", PageIcon::Info),
    ("details", "Details", PageIcon::File),
    ("other", "Other", PageIcon::File),
    ("ending", "Ending", PageIcon::Check),
];

pub fn default_pages() -> Vec<PageItem> {
    let mut pages: Vec<PageItem> = DEFAULT_PAGES
        .iter()
        .map(|&(name, label, icon)| PageItem::new(name, label, icon))
        .collect();
    renumber(&mut pages);
    pages
}

/// Rewrite every `position` to its index.
pub fn renumber(pages: &mut [PageItem]) {
    for (i, page) in pages.iter_mut().enumerate() {
        page.position = i;
    }
}
