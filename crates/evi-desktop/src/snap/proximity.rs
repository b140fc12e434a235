//! Edge and corner proximity during a window move

use super::SnapLayout;
use crate::math::{Size, Vec2};

/// Layout the pointer is hovering over, if it is within `margin` of an edge
///
/// Corners are tested before edges because a pointer near a corner is also
/// near both adjoining edges. The top edge alone maps to [`SnapLayout::Full`].
/// Points outside the surface count as near the edges they have crossed.
pub fn snap_at(pointer: Vec2, surface: Size, margin: f32) -> Option<SnapLayout> {
    let near_left = pointer.x < margin;
    let near_right = pointer.x > surface.width - margin;
    let near_top = pointer.y < margin;
    let near_bottom = pointer.y > surface.height - margin;

    if near_top && near_left {
        Some(SnapLayout::TopLeft)
    } else if near_top && near_right {
        Some(SnapLayout::TopRight)
    } else if near_bottom && near_left {
        Some(SnapLayout::BottomLeft)
    } else if near_bottom && near_right {
        Some(SnapLayout::BottomRight)
    } else if near_top {
        Some(SnapLayout::Full)
    } else if near_left {
        Some(SnapLayout::Left)
    } else if near_right {
        Some(SnapLayout::Right)
    } else {
        None
    }
}
