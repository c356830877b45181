//! Mapping between pixel coordinates and normalized device coordinates.
//!
//! Pixel `0` maps to `-1` and pixel `extent - 1` maps to `1`, so both edges
//! of the buffer sample the edges of the NDC square.

use crate::math::vec4::Vec4;

/// Maps a discrete coordinate in `[0, extent - 1]` to `[-1, 1]`.
///
/// Requires `extent > 1`.
#[inline]
pub fn to_cartesian(coord: usize, extent: usize) -> f32 {
    ((coord as f64 * 2.0) / (extent - 1) as f64 - 1.0) as f32
}

/// Inverse of [`to_cartesian`]: maps an NDC value back to a continuous
/// pixel coordinate.
#[inline]
pub fn to_discrete(ndc: f32, extent: usize) -> f32 {
    (ndc + 1.0) * (extent - 1) as f32 / 2.0
}

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl BoundingBox {
    /// The whole `width x height` buffer.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            x_min: 0,
            x_max: width - 1,
            y_min: 0,
            y_max: height - 1,
        }
    }
}

/// Pixel-space box around three perspective-divided points, clamped to the
/// buffer.
///
/// The box is padded by one pixel on each side so that points accepted by
/// the inside test through rounding are never cut off. Returns `None` when
/// the footprint lies entirely outside the buffer.
pub fn bounding_box(a: Vec4, b: Vec4, c: Vec4, width: usize, height: usize) -> Option<BoundingBox> {
    let (x_min, x_max) = span(a.x, b.x, c.x, width)?;
    let (y_min, y_max) = span(a.y, b.y, c.y, height)?;
    Some(BoundingBox {
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

fn span(p: f32, q: f32, r: f32, extent: usize) -> Option<(usize, usize)> {
    let lo = to_discrete(p.min(q).min(r), extent).floor() - 1.0;
    let hi = to_discrete(p.max(q).max(r), extent).ceil() + 1.0;
    let last = (extent - 1) as f32;

    if lo.is_nan() || hi.is_nan() || hi < 0.0 || lo > last {
        return None;
    }
    Some((lo.max(0.0) as usize, hi.min(last) as usize))
}
