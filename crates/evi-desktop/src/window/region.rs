//! Window chrome regions for hit testing

use serde::Serialize;

use crate::input::ResizeDirection;
use crate::math::{Rect, Vec2};

/// Part of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Draggable part of the title bar
    TitleBar,
    /// Button strip in the title bar (close, maximize, snap menu)
    TitleBarControl,
    /// Hosted content area
    Content,
    /// One of the eight resize handles
    Resize(ResizeDirection),
}

impl WindowRegion {
    /// Check if this is a resize handle
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// Resize handle hit by `point`, if it lies in the band around `rect`
    pub(crate) fn resize_band(rect: Rect, point: Vec2, handle: f32) -> Option<WindowRegion> {
        let half = handle * 0.5;
        if !rect.expand(half).contains(point) {
            return None;
        }

        let north = point.y < rect.y + half;
        let south = point.y >= rect.bottom() - half;
        let west = point.x < rect.x + half;
        let east = point.x >= rect.right() - half;

        ResizeDirection::from_edges(north, south, east, west).map(WindowRegion::Resize)
    }
}
