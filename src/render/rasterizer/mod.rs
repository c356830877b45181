//! Triangle rasterization.
//!
//! [`ProjectedTriangle`] takes camera-space vertices through the projection
//! and perspective divide once per draw. [`EdgeFunctionRasterizer`] then walks
//! the pixels of the chosen [`RasterDomain`], tests coverage, computes depth
//! and pushes shaded cells through the frame buffer's depth gate.

mod edgefunction;

pub use edgefunction::{get_z_component, inside_triangle, Plane};

use super::framebuffer::FrameBuffer;
use super::shader::Shader;
use crate::error::{RasterError, Result};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::screen::{bounding_box, to_cartesian, BoundingBox};

/// A triangle after projection and perspective divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedTriangle {
    pub points: [Vec4; 3],
    plane: Plane,
}

impl ProjectedTriangle {
    /// Projects three camera-space vertices.
    ///
    /// Fails with [`RasterError::DegenerateVertex`] when a vertex lands on
    /// `w == 0` or at a non-finite position, and with
    /// [`RasterError::DegenerateTriangle`] when the projected triangle has
    /// exactly zero area (its plane cannot be solved for depth). Tiny but
    /// non-zero triangles are kept.
    pub fn project(projection: &Mat4, vertices: [Vec3; 3]) -> Result<Self> {
        let mut points = vertices.map(|v| *projection * Vec4::from(v));
        for p in &mut points {
            p.perspective_divide()?;
            if !p.is_finite() {
                return Err(RasterError::DegenerateVertex);
            }
        }

        let [a, b, c] = points;
        let plane = Plane::through(a, b, c);
        if plane.z_p == 0.0 || !plane.z_p.is_finite() {
            return Err(RasterError::DegenerateTriangle);
        }

        Ok(Self { points, plane })
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let [a, b, c] = self.points;
        inside_triangle(a, b, c, x, y)
    }

    #[inline]
    pub fn depth_at(&self, x: f32, y: f32) -> f32 {
        self.plane.depth_at(x, y)
    }

    pub fn bounding_box(&self, width: usize, height: usize) -> Option<BoundingBox> {
        let [a, b, c] = self.points;
        bounding_box(a, b, c, width, height)
    }
}

/// Which pixels a draw call visits.
///
/// Both domains produce identical buffers; the bounding box only skips
/// pixels that cannot be covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RasterDomain {
    /// Pixels inside the triangle's screen-space bounding box.
    #[default]
    BoundingBox,
    /// Every pixel of the buffer.
    FullBuffer,
}

impl std::fmt::Display for RasterDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterDomain::BoundingBox => write!(f, "BoundingBox"),
            RasterDomain::FullBuffer => write!(f, "FullBuffer"),
        }
    }
}

/// Pixel counters for one draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Pixels visited.
    pub tested: usize,
    /// Pixels inside the triangle.
    pub covered: usize,
    /// Pixels that passed the depth gate.
    pub written: usize,
}

/// Bounding-box iteration with edge function tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeFunctionRasterizer {
    domain: RasterDomain,
}

impl EdgeFunctionRasterizer {
    pub fn new(domain: RasterDomain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> RasterDomain {
        self.domain
    }

    /// Fill a projected triangle into the frame buffer.
    pub fn fill_triangle(
        &self,
        triangle: &ProjectedTriangle,
        buffer: &mut FrameBuffer,
        shader: &Shader,
    ) -> DrawStats {
        let (width, height) = (buffer.width(), buffer.height());
        let bounds = match self.domain {
            RasterDomain::BoundingBox => match triangle.bounding_box(width, height) {
                Some(bb) => bb,
                None => return DrawStats::default(),
            },
            RasterDomain::FullBuffer => BoundingBox::full(width, height),
        };

        let mut stats = DrawStats::default();
        for y in bounds.y_min..=bounds.y_max {
            let ny = to_cartesian(y, height);
            for x in bounds.x_min..=bounds.x_max {
                let nx = to_cartesian(x, width);
                stats.tested += 1;

                if !triangle.contains(nx, ny) {
                    continue;
                }
                stats.covered += 1;

                let depth = triangle.depth_at(nx, ny);
                if let Some(cell) = buffer.claim(x, y, depth) {
                    *cell = shader.shade(depth);
                    stats.written += 1;
                }
            }
        }
        stats
    }
}
