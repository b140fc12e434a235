//! Window registry module
//!
//! Provides window lifecycle, the one-window-per-category rule,
//! z-order focus and hit testing of window chrome.

mod manager;
mod region;
#[allow(clippy::module_inception)]
mod window;

pub use manager::WindowManager;
pub use region::WindowRegion;
pub use window::{Category, Window};

// Re-export WindowId from crate types module for convenience
pub use crate::types::{WindowId, ZIndex};
