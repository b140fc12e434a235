//! Pointer input: the drag/resize state machine
//!
//! The [`InputRouter`] holds the single live [`DragState`]. Geometry for a
//! resize is always derived from the snapshot taken at grab time by
//! [`calculate_resize`], never accumulated tick by tick.

mod direction;
mod drag;
mod resize;

pub use direction::ResizeDirection;
pub use drag::{DragState, InputResult, InputRouter};
pub use resize::calculate_resize;
