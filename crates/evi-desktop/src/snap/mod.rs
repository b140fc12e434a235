//! Snap engine
//!
//! Two entry points share the same layouts: the proximity preview computed
//! on every move tick ([`SnapPreview::at`]), and [`apply_snap`] which
//! rewrites a window's geometry either when a move is released over an
//! active preview or when a layout is picked from the snap menu.

mod layout;
mod proximity;

pub use layout::SnapLayout;
pub use proximity::snap_at;

use serde::Serialize;
use tracing::debug;

use crate::math::{Rect, Size, Vec2};
use crate::types::WindowId;
use crate::window::WindowManager;

/// Overlay hinting which layout a release would commit
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SnapPreview {
    pub layout: SnapLayout,
    pub rect: Rect,
}

impl SnapPreview {
    /// Preview for a pointer at `pointer` on a surface of `surface` size
    pub fn at(pointer: Vec2, surface: Size, margin: f32) -> Option<Self> {
        snap_at(pointer, surface, margin).map(|layout| Self {
            layout,
            rect: layout.rect(surface),
        })
    }
}

/// Snap a window to `layout` on a surface of `surface` size
///
/// Sets the maximized flag from the layout, replaces the free-form
/// geometry for non-maximizing layouts, and focuses the window.
/// Returns false if the window is not open.
pub fn apply_snap(windows: &mut WindowManager, id: WindowId, layout: SnapLayout, surface: Size) -> bool {
    let maximize = layout.maximizes();
    if !windows.set_maximized(id, maximize) {
        return false;
    }
    if !maximize {
        windows.set_rect(id, layout.rect(surface));
    }
    windows.bring_to_front(id);
    debug!(id, %layout, "snap applied");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: Size = Size::new(1000.0, 800.0);

    #[test]
    fn test_preview_carries_layout_rect() {
        let preview = SnapPreview::at(Vec2::new(990.0, 400.0), SURFACE, 20.0).unwrap();
        assert_eq!(preview.layout, SnapLayout::Right);
        assert_eq!(preview.rect, Rect::new(500.0, 0.0, 500.0, 800.0));

        assert!(SnapPreview::at(Vec2::new(500.0, 400.0), SURFACE, 20.0).is_none());
    }

    #[test]
    fn test_apply_half_layout() {
        let mut wm = WindowManager::new();
        let a = wm.open("sales", "Sales");
        let b = wm.open("inventory", "Inventory");

        assert!(apply_snap(&mut wm, a, SnapLayout::Left, SURFACE));
        let window = wm.get(a).unwrap();
        assert_eq!(window.rect, Rect::new(0.0, 0.0, 500.0, 800.0));
        assert!(!window.maximized);
        assert!(window.z_index > wm.get(b).unwrap().z_index);
    }

    #[test]
    fn test_apply_full_keeps_geometry() {
        let mut wm = WindowManager::new();
        let id = wm.open("sales", "Sales");
        let before = wm.get(id).unwrap().rect;

        assert!(apply_snap(&mut wm, id, SnapLayout::Full, SURFACE));
        let window = wm.get(id).unwrap();
        assert!(window.maximized);
        assert_eq!(window.rect, before);
    }

    #[test]
    fn test_apply_non_full_clears_maximize() {
        let mut wm = WindowManager::new();
        let id = wm.open("sales", "Sales");
        wm.toggle_maximize(id);

        assert!(apply_snap(&mut wm, id, SnapLayout::Column3, Size::new(1200.0, 600.0)));
        let window = wm.get(id).unwrap();
        assert!(!window.maximized);
        assert_eq!(window.rect, Rect::new(800.0, 0.0, 400.0, 600.0));
    }

    #[test]
    fn test_apply_to_missing_window() {
        let mut wm = WindowManager::new();
        let counter = wm.z_counter();
        assert!(!apply_snap(&mut wm, 42, SnapLayout::Left, SURFACE));
        assert_eq!(wm.z_counter(), counter);
    }
}
