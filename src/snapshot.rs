//! Depth-map export of a resolved frame.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::colors::depth_to_level;
use crate::error::{RasterError, Result};
use crate::render::FrameBuffer;

/// One gray pixel per cell: covered cells get their depth's gray level,
/// uncovered cells stay black.
///
/// Fails when a side of the frame does not fit an image dimension.
pub fn depth_image(frame: &FrameBuffer) -> Result<GrayImage> {
    let (width, height) = (frame.width(), frame.height());
    let invalid = || RasterError::InvalidDimensions { width, height };
    let w = u32::try_from(width).map_err(|_| invalid())?;
    let h = u32::try_from(height).map_err(|_| invalid())?;

    Ok(GrayImage::from_fn(w, h, |x, y| {
        let (x, y) = (x as usize, y as usize);
        match frame.depth(x, y) {
            Some(d) if frame.is_covered(x, y) => Luma([depth_to_level(d)]),
            _ => Luma([0]),
        }
    }))
}

/// Writes [`depth_image`] of `frame` as a PNG.
pub fn save_png<P: AsRef<Path>>(frame: &FrameBuffer, path: P) -> Result<()> {
    depth_image(frame)?.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
