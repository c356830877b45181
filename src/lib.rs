//! A CPU triangle rasterizer that draws into a terminal character grid.
//!
//! Camera-space triangles are projected, perspective-divided and filled into
//! a fixed-size grid of cells using edge functions. Each pixel's depth is read
//! off the triangle's plane and resolved against a depth buffer, then shaded
//! either as a depth digit or as a 24-bit ANSI colored block.
//!
//! # Quick Start
//!
//! ```no_run
//! use termrast::prelude::*;
//!
//! let mut engine = Engine::new(150, 50, Shader::Monochrome)?;
//! for [a, b, c] in termrast::scene::QUAD_TRIANGLES {
//!     engine.draw(a, b, c)?;
//! }
//! engine.render(std::io::stdout().lock())?;
//! # Ok::<(), termrast::RasterError>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod screen;
pub mod sink;
pub mod snapshot;

// Re-export commonly needed types at crate root for convenience
pub use config::{RenderConfig, ShadingMode};
pub use engine::Engine;
pub use error::RasterError;
pub use projection::{get_projection, Frustum};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colors::Rgb;
    pub use crate::config::{RenderConfig, ShadingMode};
    pub use crate::engine::Engine;
    pub use crate::error::RasterError;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;
    pub use crate::projection::Frustum;
    pub use crate::render::{Cell, DrawStats, FrameBuffer, RasterDomain, Shader};
    pub use crate::sink::{SinkStyle, TerminalSink};
}
