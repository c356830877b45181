//! Perspective projection parameters.
//!
//! The [`Frustum`] struct holds the six view-frustum bounds and derives the
//! off-axis projection matrix from them. The matrix keeps camera-space depth
//! in the `w` component so the perspective divide can follow it.

use crate::error::{RasterError, Result};
use crate::math::mat4::Mat4;

/// View-frustum bounds in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            near,
            far,
        }
    }

    /// Rejects bounds that would divide by zero in [`get_projection`].
    pub fn validate(&self) -> Result<()> {
        if self.left == self.right {
            return Err(RasterError::InvalidFrustum("left and right planes coincide"));
        }
        if self.top == self.bottom {
            return Err(RasterError::InvalidFrustum("top and bottom planes coincide"));
        }
        if self.near == self.far {
            return Err(RasterError::InvalidFrustum("near and far planes coincide"));
        }
        Ok(())
    }

    pub fn matrix(&self) -> Mat4 {
        get_projection(
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.near,
            self.far,
        )
    }
}

impl Default for Frustum {
    /// Symmetric frustum with the near plane at depth 1 and the far plane at depth 2.
    fn default() -> Self {
        Self::new(-1.0, 1.0, -1.0, 1.0, 1.0, 2.0)
    }
}

/// Builds the off-axis perspective matrix for the given frustum bounds.
///
/// The last row copies camera-space `z` into `w`. No checks are made here;
/// use [`Frustum::validate`] first when the bounds come from outside.
pub fn get_projection(l: f32, r: f32, t: f32, b: f32, n: f32, f: f32) -> Mat4 {
    Mat4::new([
        [2.0 * n / (r - l), 0.0, (l + r) / (l - r), 0.0],
        [0.0, 2.0 * n / (b - t), (t + b) / (t - b), 0.0],
        [0.0, 0.0, (f + n) / (f - n), 2.0 * n * f / (n - f)],
        [0.0, 0.0, 1.0, 0.0],
    ])
}
