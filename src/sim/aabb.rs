//! Axis-aligned rectangles
//!
//! Everything in the world is an axis-aligned square in screen space
//! (y grows downward), so collision reduces to interval tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Square of side `side` at `pos`
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Open-interval overlap on the x axis (touching edges do not overlap)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// Open-interval overlap on the y axis
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.bottom() > other.top() && self.top() < other.bottom()
    }

    /// Strict rectangle overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Point containment with inclusive edges
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32) -> Aabb {
        Aabb::square(Vec2::new(x, y), 32.0)
    }

    #[test]
    fn test_edges() {
        let a = square(10.0, 20.0);
        assert_eq!(a.left(), 10.0);
        assert_eq!(a.right(), 42.0);
        assert_eq!(a.top(), 20.0);
        assert_eq!(a.bottom(), 52.0);
        assert_eq!(a.center(), Vec2::new(26.0, 36.0));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = square(0.0, 0.0);
        assert!(!a.overlaps(&square(32.0, 0.0)));
        assert!(!a.overlaps(&square(0.0, 32.0)));
        assert!(a.overlaps(&square(31.5, 0.0)));
        assert!(a.overlaps(&square(-31.0, 31.0)));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let a = square(0.0, 0.0);
        assert!(a.contains_point(Vec2::new(0.0, 0.0)));
        assert!(a.contains_point(Vec2::new(32.0, 32.0)));
        assert!(!a.contains_point(Vec2::new(32.1, 16.0)));
    }
}
