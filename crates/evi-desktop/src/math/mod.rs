//! Core geometry types for the desktop surface
//!
//! All window geometry is expressed in surface-local pixels with the
//! origin at the top-left corner of the desktop surface's client box.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
