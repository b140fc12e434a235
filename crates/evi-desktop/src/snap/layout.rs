//! Named snap layouts and their geometry

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use crate::math::{Rect, Size};

/// A named layout a window can be snapped to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapLayout {
    /// Whole surface (maximizes the window)
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
    #[serde(rename = "col1")]
    Column1,
    #[serde(rename = "col2")]
    Column2,
    #[serde(rename = "col3")]
    Column3,
}

impl SnapLayout {
    /// Every layout the engine knows
    pub const ALL: [SnapLayout; 11] = [
        SnapLayout::Full,
        SnapLayout::Left,
        SnapLayout::Right,
        SnapLayout::Bottom,
        SnapLayout::TopLeft,
        SnapLayout::TopRight,
        SnapLayout::BottomLeft,
        SnapLayout::BottomRight,
        SnapLayout::Column1,
        SnapLayout::Column2,
        SnapLayout::Column3,
    ];

    /// Targets offered by the snap menu, in display order
    pub const MENU: [SnapLayout; 10] = [
        SnapLayout::Full,
        SnapLayout::Left,
        SnapLayout::Right,
        SnapLayout::Column1,
        SnapLayout::Column2,
        SnapLayout::Column3,
        SnapLayout::TopLeft,
        SnapLayout::TopRight,
        SnapLayout::BottomLeft,
        SnapLayout::BottomRight,
    ];

    /// Short name used by the page ("full", "tl", "col2", ...)
    pub fn name(self) -> &'static str {
        match self {
            SnapLayout::Full => "full",
            SnapLayout::Left => "left",
            SnapLayout::Right => "right",
            SnapLayout::Bottom => "bottom",
            SnapLayout::TopLeft => "tl",
            SnapLayout::TopRight => "tr",
            SnapLayout::BottomLeft => "bl",
            SnapLayout::BottomRight => "br",
            SnapLayout::Column1 => "col1",
            SnapLayout::Column2 => "col2",
            SnapLayout::Column3 => "col3",
        }
    }

    /// Whether committing this layout maximizes instead of setting geometry
    pub fn maximizes(self) -> bool {
        matches!(self, SnapLayout::Full)
    }

    /// Target rectangle on a surface of the given size
    pub fn rect(self, surface: Size) -> Rect {
        let w = surface.width;
        let h = surface.height;
        let half_w = w / 2.0;
        let half_h = h / 2.0;
        let third_w = w / 3.0;

        match self {
            SnapLayout::Full => Rect::new(0.0, 0.0, w, h),
            SnapLayout::Left => Rect::new(0.0, 0.0, half_w, h),
            SnapLayout::Right => Rect::new(half_w, 0.0, half_w, h),
            SnapLayout::Bottom => Rect::new(0.0, half_h, w, half_h),
            SnapLayout::TopLeft => Rect::new(0.0, 0.0, half_w, half_h),
            SnapLayout::TopRight => Rect::new(half_w, 0.0, half_w, half_h),
            SnapLayout::BottomLeft => Rect::new(0.0, half_h, half_w, half_h),
            SnapLayout::BottomRight => Rect::new(half_w, half_h, half_w, half_h),
            SnapLayout::Column1 => Rect::new(0.0, 0.0, third_w, h),
            SnapLayout::Column2 => Rect::new(third_w, 0.0, third_w, h),
            SnapLayout::Column3 => Rect::new(2.0 * w / 3.0, 0.0, third_w, h),
        }
    }
}

impl std::fmt::Display for SnapLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnapLayout {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnapLayout::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| DesktopError::UnknownLayout(s.to_string()))
    }
}
