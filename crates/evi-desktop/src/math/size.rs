//! 2D size

use serde::{Deserialize, Serialize};

/// Width and height in surface pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, used to floor a size at a minimum
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Whether both dimensions are at least those of `min`
    pub fn fits(self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}
