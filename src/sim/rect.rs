//! Axis-aligned rectangle geometry for blocks and the paddle
//!
//! Rectangles are stored as center + half extents; collision code works
//! against the derived min/max corners.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_point;

/// An axis-aligned box in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec2,
    /// Half extents (half width, half height)
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Lower-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    /// Upper-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half.y * 2.0
    }

    /// Closest point of the box to `p` (clamp per axis)
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        clamp_point(p, self.min(), self.max())
    }

    /// Whether `p` lies inside the box (inclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// The same box shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            half: self.half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let rect = Aabb::new(Vec2::new(1.0, 2.0), 4.0, 2.0);
        assert_eq!(rect.min(), Vec2::new(-1.0, 1.0));
        assert_eq!(rect.max(), Vec2::new(3.0, 3.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_closest_point() {
        let rect = Aabb::new(Vec2::ZERO, 2.0, 2.0);
        // Interior point is its own closest point
        assert_eq!(rect.closest_point(Vec2::new(0.5, -0.5)), Vec2::new(0.5, -0.5));
        // Point past a corner clamps to the corner
        assert_eq!(rect.closest_point(Vec2::new(5.0, 5.0)), Vec2::new(1.0, 1.0));
        // Point past one edge clamps only that axis
        assert_eq!(rect.closest_point(Vec2::new(-3.0, 0.2)), Vec2::new(-1.0, 0.2));
    }

    #[test]
    fn test_contains() {
        let rect = Aabb::new(Vec2::new(0.5, 0.5), 1.0, 1.0);
        assert!(rect.contains(Vec2::new(0.5, 0.5)));
        assert!(rect.contains(Vec2::new(0.0, 1.0))); // Edge is inclusive
        assert!(!rect.contains(Vec2::new(1.1, 0.5)));
    }

    #[test]
    fn test_translated() {
        let rect = Aabb::new(Vec2::ZERO, 2.0, 2.0).translated(Vec2::new(3.0, -1.0));
        assert_eq!(rect.center, Vec2::new(3.0, -1.0));
        assert_eq!(rect.half, Vec2::new(1.0, 1.0));
    }
}
