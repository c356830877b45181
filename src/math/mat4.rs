//! 4x4 matrix stored row-major.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - `data[row][col]`, so the first row produces the `x` component

use std::fmt;
use std::ops::Mul;

use super::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }
}

/// Row-major 4x4 by 4x1 product `m * v`.
#[inline]
pub fn mat4_mul_vec4(m: &Mat4, v: Vec4) -> Vec4 {
    let row = |r: usize| {
        m.data[r][0] * v.x + m.data[r][1] * v.y + m.data[r][2] * v.z + m.data[r][3] * v.w
    };
    Vec4::new(row(0), row(1), row(2), row(3))
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        mat4_mul_vec4(&self, v)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
