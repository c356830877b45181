//! 4D vector for homogeneous coordinates.

use std::fmt;

use super::vec3::Vec3;
use crate::error::{RasterError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (w=1) from x, y, z coordinates.
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Divides every component, `w` included, by `w`.
    ///
    /// After a successful divide `w` is 1 and the clip-space `w` is gone.
    /// A zero or non-finite `w` leaves the vector untouched and fails with
    /// [`RasterError::DegenerateVertex`].
    pub fn perspective_divide(&mut self) -> Result<()> {
        if self.w == 0.0 || !self.w.is_finite() {
            return Err(RasterError::DegenerateVertex);
        }
        let w = self.w;
        self.x /= w;
        self.y /= w;
        self.z /= w;
        self.w /= w;
        Ok(())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl From<Vec3> for Vec4 {
    /// Convert Vec3 to Vec4 as a point (w=1).
    fn from(v: Vec3) -> Self {
        Self::point(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {} y: {} z: {} w: {}",
            self.x, self.y, self.z, self.w
        )
    }
}
