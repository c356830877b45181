//! Render configuration.

use crate::error::Result;
use crate::projection::Frustum;
use crate::render::framebuffer::cell_count;
use crate::render::{RasterDomain, Shader};

pub const DEFAULT_WIDTH: usize = 150;
pub const DEFAULT_HEIGHT: usize = 50;

/// Shading presets selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ShadingMode {
    /// Depth digits in a bordered plain-text frame.
    #[default]
    Monochrome,
    /// Gray blocks in 24-bit ANSI color.
    Color,
}

impl ShadingMode {
    pub fn shader(self) -> Shader {
        match self {
            ShadingMode::Monochrome => Shader::Monochrome,
            ShadingMode::Color => Shader::gray(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub frustum: Frustum,
    pub shading: ShadingMode,
    pub domain: RasterDomain,
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        cell_count(self.width, self.height)?;
        self.frustum.validate()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frustum: Frustum::default(),
            shading: ShadingMode::default(),
            domain: RasterDomain::default(),
        }
    }
}
