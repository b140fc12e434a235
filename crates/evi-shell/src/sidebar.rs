//! Navigation sidebar entries

use serde::Serialize;

use evi_desktop::WindowManager;

use crate::content::ContentRegistry;

/// One sidebar entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub category: String,
    pub title: String,
    /// A window for this category is open
    pub active: bool,
}

/// Sidebar entries for every registered module
///
/// The highlight is derived by scanning the window collection, not tracked
/// separately, so it can never disagree with what is on the desktop.
pub fn navigation(registry: &ContentRegistry, windows: &WindowManager) -> Vec<NavItem> {
    registry
        .entries()
        .map(|entry| NavItem {
            category: entry.category.as_str().to_string(),
            title: entry.title.clone(),
            active: windows.is_open(entry.category.as_str()),
        })
        .collect()
}
