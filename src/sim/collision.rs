//! Axis-aligned rectangle overlap testing
//!
//! The only collision primitive the game needs: bird vs. pipe bounding
//! boxes. Strict inequalities on all four sides, so rectangles that merely
//! touch edges do not collide.

use glam::Vec2;

/// Check whether two axis-aligned rectangles overlap.
///
/// Each rectangle is given by its top-left corner and its size. Edge
/// contact (equal coordinates) counts as a miss.
#[inline]
pub fn rects_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    pos_a.x < pos_b.x + size_b.x
        && pos_a.x + size_a.x > pos_b.x
        && pos_a.y < pos_b.y + size_b.y
        && pos_a.y + size_a.y > pos_b.y
}
