//! Rasterization, depth resolution and shading.

pub mod framebuffer;
pub mod rasterizer;
pub mod shader;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{DrawStats, EdgeFunctionRasterizer, ProjectedTriangle, RasterDomain};
pub use shader::{Cell, Shader};
