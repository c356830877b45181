//! Edge-function coverage test and plane-equation depth.
//!
//! # Edge Function
//!
//! For a directed edge from `p0` to `p1`, the edge function at `(x, y)` is
//!
//! ```text
//! E(x, y) = (x - p0.x) * (p1.y - p0.y) - (y - p0.y) * (p1.x - p0.x)
//! ```
//!
//! which is the signed area of the parallelogram spanned by the edge and the
//! point. A point is inside triangle `(a, b, c)` when the edges `(b, a)`,
//! `(c, b)` and `(a, c)` all give a non-negative value.
//!
//! # Winding Order
//!
//! Only one orientation is accepted. A triangle listed in the opposite order
//! covers nothing, and the edges themselves count as inside, so two triangles
//! sharing an edge may both claim the pixels on it.
//!
//! # Depth
//!
//! Depth is read off the plane through the three projected vertices rather
//! than from barycentric weights. After the perspective divide the projected
//! `z` is an affine function of screen `x` and `y`, so the plane is exact.

use crate::math::vec4::Vec4;

#[inline]
fn edge_function(p0: Vec4, p1: Vec4, x: f32, y: f32) -> f32 {
    (x - p0.x) * (p1.y - p0.y) - (y - p0.y) * (p1.x - p0.x)
}

/// Whether `(x, y)` lies inside or on the boundary of triangle `(a, b, c)`.
#[inline]
pub fn inside_triangle(a: Vec4, b: Vec4, c: Vec4, x: f32, y: f32) -> bool {
    edge_function(b, a, x, y) >= 0.0
        && edge_function(c, b, x, y) >= 0.0
        && edge_function(a, c, x, y) >= 0.0
}

/// Supporting plane `x_p * X + y_p * Y + z_p * Z + w_p = 0` of a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub x_p: f32,
    pub y_p: f32,
    pub z_p: f32,
    pub w_p: f32,
}

impl Plane {
    /// Plane through three points, with the normal taken from the cross
    /// product of `b - a` and `c - a`.
    pub fn through(a: Vec4, b: Vec4, c: Vec4) -> Self {
        let x_p = (b.y - a.y) * (c.z - a.z) - (c.y - a.y) * (b.z - a.z);
        let y_p = (b.z - a.z) * (c.x - a.x) - (c.z - a.z) * (b.x - a.x);
        let z_p = (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y);
        let w_p = -(x_p * a.x + y_p * a.y + z_p * a.z);
        Self { x_p, y_p, z_p, w_p }
    }

    /// Solves the plane for `Z` at `(x, y)`. Undefined when `z_p == 0`.
    #[inline]
    pub fn depth_at(&self, x: f32, y: f32) -> f32 {
        (-self.x_p * x - self.y_p * y - self.w_p) / self.z_p
    }
}

/// Depth of triangle `(a, b, c)` at screen point `(x, y)`.
#[inline]
pub fn get_z_component(a: Vec4, b: Vec4, c: Vec4, x: f32, y: f32) -> f32 {
    Plane::through(a, b, c).depth_at(x, y)
}
