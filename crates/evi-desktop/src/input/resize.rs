//! Resize geometry

use super::ResizeDirection;
use crate::math::{Rect, Size, Vec2};

/// Geometry for a resize drag, from the grab-time snapshot and total pointer delta
///
/// Far edges (east, south) grow with the delta and are floored at `min`.
/// Near edges (west, north) move the origin along with the edge; once the
/// size would drop below `min` it is clamped there and the origin stops at
/// `start + (start_size - min)`, so the opposite edge never moves.
pub fn calculate_resize(direction: ResizeDirection, start: Rect, delta: Vec2, min: Size) -> Rect {
    let mut rect = start;

    if direction.has_east() {
        rect.width = (start.width + delta.x).max(min.width);
    }
    if direction.has_west() {
        let (x, width) = shrink_near_edge(start.x, start.width, delta.x, min.width);
        rect.x = x;
        rect.width = width;
    }

    if direction.has_south() {
        rect.height = (start.height + delta.y).max(min.height);
    }
    if direction.has_north() {
        let (y, height) = shrink_near_edge(start.y, start.height, delta.y, min.height);
        rect.y = y;
        rect.height = height;
    }

    rect
}

/// One axis of a near-edge resize: returns (origin, length)
fn shrink_near_edge(start_pos: f32, start_len: f32, delta: f32, min_len: f32) -> (f32, f32) {
    let proposed = start_len - delta;
    if proposed >= min_len {
        (start_pos + delta, proposed)
    } else {
        (start_pos + (start_len - min_len), min_len)
    }
}
