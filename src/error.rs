//! Error types for the rasterization pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("buffer dimensions {width}x{height} are out of range")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid frustum: {0}")]
    InvalidFrustum(&'static str),

    #[error("vertex projects onto the camera plane (w == 0) or to a non-finite point")]
    DegenerateVertex,

    #[error("triangle has zero area after projection")]
    DegenerateTriangle,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RasterError>;
