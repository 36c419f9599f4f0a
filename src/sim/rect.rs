//! Axis-aligned rectangle geometry for sprites and hit-boxes
//!
//! Screen coordinates: x grows rightward, y grows downward, so `bottom` is
//! the larger y value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive under strict overlap tests)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive under strict overlap tests)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrink the rectangle by `amount` on every side
    ///
    /// The inset is clamped so a small rectangle degenerates to a zero-size
    /// one at its center rather than inverting.
    pub fn inset(&self, amount: f32) -> Self {
        let inset = amount.min(self.width / 2.0).min(self.height / 2.0);
        Self {
            x: self.x + inset,
            y: self.y + inset,
            width: self.width - 2.0 * inset,
            height: self.height - 2.0 * inset,
        }
    }

    /// Check if a point lies inside the rectangle
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_rect_inset() {
        let r = Rect::new(100.0, 350.0, 50.0, 50.0).inset(10.0);
        assert_eq!(r.x, 110.0);
        assert_eq!(r.y, 360.0);
        assert_eq!(r.width, 30.0);
        assert_eq!(r.height, 30.0);
    }

    #[test]
    fn test_rect_inset_never_inverts() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert!(r.width >= 0.0);
        assert!(r.height >= 0.0);
        assert_eq!(r.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(5.0, 5.0)));
        assert!(r.contains_point(Vec2::new(0.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(-0.1, 5.0)));
        assert!(!r.contains_point(Vec2::new(5.0, 10.1)));
    }
}
