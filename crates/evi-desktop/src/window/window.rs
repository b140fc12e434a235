//! Window entity and category tag

use serde::{Deserialize, Serialize};

use super::region::WindowRegion;
use crate::config::FrameMetrics;
use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, ZIndex};

/// Tag naming the business module a window hosts
///
/// At most one window per category is open at any time.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category tag
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An open panel on the desktop surface
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Window {
    /// Stable identity for the window's lifetime
    pub id: WindowId,
    /// Module hosted by this window
    pub category: Category,
    /// Title bar label, fixed at creation
    pub title: String,
    /// Free-form geometry; retained but not applied while maximized
    pub rect: Rect,
    /// Whether the window covers the whole surface
    pub maximized: bool,
    /// Stacking order (higher paints on top)
    pub z_index: ZIndex,
}

impl Window {
    /// Bounds the window actually occupies on a surface of `surface` size
    pub fn rendered_rect(&self, surface: Size) -> Rect {
        if self.maximized {
            Rect::from_size(surface)
        } else {
            self.rect
        }
    }

    /// Region of this window's chrome under a surface-local point
    ///
    /// Resize bands straddle the border, so a point slightly outside the
    /// rendered bounds can still hit a handle. Maximized windows have none.
    pub fn region_at(&self, point: Vec2, frame: &FrameMetrics, surface: Size) -> Option<WindowRegion> {
        let rect = self.rendered_rect(surface);

        if !self.maximized {
            if let Some(region) = WindowRegion::resize_band(rect, point, frame.resize_handle_size) {
                return Some(region);
            }
        }

        if !rect.contains(point) {
            return None;
        }

        if point.y < rect.y + frame.title_bar_height {
            if point.x >= rect.right() - frame.controls_width {
                Some(WindowRegion::TitleBarControl)
            } else {
                Some(WindowRegion::TitleBar)
            }
        } else {
            Some(WindowRegion::Content)
        }
    }
}
