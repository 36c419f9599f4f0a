//! Collision detection for axis-aligned sprites
//!
//! Collision is intentionally forgiving: the player's hit-box is inset from
//! the sprite bounds, and all overlap tests use strict inequalities so that
//! rectangles merely touching edge-to-edge do not collide.

use super::rect::Rect;

/// Axis-aligned overlap test with strict inequality on all four half-planes
///
/// Symmetric in its arguments: `rects_overlap(a, b) == rects_overlap(b, a)`.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
