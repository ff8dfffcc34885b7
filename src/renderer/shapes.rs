//! Shape generation for 2D primitives
//!
//! All shapes are built in surface pixel space (origin top-left, y down);
//! `RenderState` converts to NDC at upload time.

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Aabb, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// The four edge strips of a rectangle outline drawn inside `r`
pub fn outline_strips(r: &Aabb, line_width: f32) -> [Aabb; 4] {
    let w = line_width.min(r.size.x / 2.0).min(r.size.y / 2.0);
    let inner_h = r.size.y - 2.0 * w;
    [
        // top, bottom
        Aabb::new(r.pos, Vec2::new(r.size.x, w)),
        Aabb::new(Vec2::new(r.left(), r.bottom() - w), Vec2::new(r.size.x, w)),
        // left, right (between top and bottom strips)
        Aabb::new(Vec2::new(r.left(), r.top() + w), Vec2::new(w, inner_h)),
        Aabb::new(Vec2::new(r.right() - w, r.top() + w), Vec2::new(w, inner_h)),
    ]
}
