//! Core rendering engine.
//!
//! The [`Engine`] owns the frame buffer, the shading policy, the projection
//! matrix and the rasterizer. A frame is built by constructing an engine,
//! issuing any number of [`Engine::draw`] calls and finishing with
//! [`Engine::render`].

use std::io::Write;

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::projection::Frustum;
use crate::render::{
    DrawStats, EdgeFunctionRasterizer, FrameBuffer, ProjectedTriangle, RasterDomain, Shader,
};
use crate::sink::TerminalSink;

pub struct Engine {
    buffer: FrameBuffer,
    shader: Shader,
    projection: Mat4,
    rasterizer: EdgeFunctionRasterizer,
}

impl Engine {
    /// Engine with the default frustum and bounding-box rasterization.
    pub fn new(width: usize, height: usize, shader: Shader) -> Result<Self> {
        Self::build(width, height, shader, Frustum::default(), RasterDomain::default())
    }

    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        Self::build(
            config.width,
            config.height,
            config.shading.shader(),
            config.frustum,
            config.domain,
        )
    }

    fn build(
        width: usize,
        height: usize,
        shader: Shader,
        frustum: Frustum,
        domain: RasterDomain,
    ) -> Result<Self> {
        frustum.validate()?;
        let buffer = FrameBuffer::new(width, height, shader.blank())?;
        let projection = frustum.matrix();
        debug!(width, height, %domain, "projection matrix:\n{projection}");

        Ok(Self {
            buffer,
            shader,
            projection,
            rasterizer: EdgeFunctionRasterizer::new(domain),
        })
    }

    pub fn set_domain(&mut self, domain: RasterDomain) {
        self.rasterizer = EdgeFunctionRasterizer::new(domain);
    }

    pub fn domain(&self) -> RasterDomain {
        self.rasterizer.domain()
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Rasterizes one camera-space triangle into the frame buffer.
    ///
    /// A degenerate triangle is rejected before any pixel is written.
    pub fn draw(&mut self, v1: Vec3, v2: Vec3, v3: Vec3) -> Result<DrawStats> {
        let triangle = ProjectedTriangle::project(&self.projection, [v1, v2, v3])?;
        let [a, b, c] = triangle.points;
        trace!(%a, %b, %c, "projected triangle");

        let stats = self
            .rasterizer
            .fill_triangle(&triangle, &mut self.buffer, &self.shader);
        debug!(
            tested = stats.tested,
            covered = stats.covered,
            written = stats.written,
            "triangle drawn"
        );
        Ok(stats)
    }

    /// Draws each triangle in order and sums the counters.
    pub fn draw_all(&mut self, triangles: &[[Vec3; 3]]) -> Result<DrawStats> {
        let mut total = DrawStats::default();
        for &[v1, v2, v3] in triangles {
            let stats = self.draw(v1, v2, v3)?;
            total.tested += stats.tested;
            total.covered += stats.covered;
            total.written += stats.written;
        }
        Ok(total)
    }

    /// Writes the frame to `out` in the style matching the shader.
    pub fn render<W: Write>(&self, out: W) -> Result<()> {
        let mut sink = TerminalSink::new(out, self.shader.sink_style());
        sink.write_frame(&self.buffer)?;
        Ok(())
    }
}
