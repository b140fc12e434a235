//! 2D vector for positions, offsets and pointer deltas

use serde::{Deserialize, Serialize};

/// 2D vector for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let pointer = Vec2::new(130.0, 75.0);
        let origin = Vec2::new(100.0, 60.0);

        let offset = pointer - origin;
        assert!((offset.x - 30.0).abs() < 0.001);
        assert!((offset.y - 15.0).abs() < 0.001);

        let back = origin + offset;
        assert_eq!(back, pointer);

        let step = Vec2::new(30.0, 30.0) * 3.0;
        assert!((step.x - 90.0).abs() < 0.001);
        assert!((step.y - 90.0).abs() < 0.001);
    }
}
