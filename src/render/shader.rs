//! Depth-to-cell shading.
//!
//! The rasterizer resolves visibility and hands the winning depth to a
//! [`Shader`], which decides what the cell looks like. Depth here is the
//! perspective-divided `z`, so the visible range is `[-1, 1]` from the near
//! plane to the far plane.

use crate::colors::{depth_to_level, Rgb};
use crate::sink::SinkStyle;

/// One slot of the character grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Cell {
    pub const fn new(glyph: char, foreground: Rgb, background: Rgb) -> Self {
        Self {
            glyph,
            foreground,
            background,
        }
    }

    /// A glyph with no color, as used by the monochrome sink.
    pub const fn plain(glyph: char) -> Self {
        Self::new(glyph, Rgb::BLACK, Rgb::BLACK)
    }
}

/// Shading policy selected at engine construction.
#[derive(Clone, Copy, Debug, Default)]
pub enum Shader {
    /// Digit glyph `'0' + (depth + 1) * 5`, clamped to `'0'..='9'`.
    #[default]
    Monochrome,
    /// Caller-supplied mapping producing a glyph and a color pair.
    Color(fn(f32) -> Cell),
}

impl Shader {
    /// Color shader using [`gray_block`].
    pub fn gray() -> Self {
        Shader::Color(gray_block)
    }

    #[inline]
    pub fn shade(&self, depth: f32) -> Cell {
        match self {
            Shader::Monochrome => Cell::plain(depth_glyph(depth)),
            Shader::Color(f) => f(depth),
        }
    }

    /// The cell a fresh buffer is filled with.
    pub fn blank(&self) -> Cell {
        match self {
            Shader::Monochrome => Cell::plain('.'),
            Shader::Color(_) => Cell::plain(' '),
        }
    }

    /// How a buffer shaded by this policy should be written out.
    pub fn sink_style(&self) -> SinkStyle {
        match self {
            Shader::Monochrome => SinkStyle::Bordered,
            Shader::Color(_) => SinkStyle::Ansi,
        }
    }
}

/// Monochrome glyph for a depth value.
#[inline]
pub fn depth_glyph(depth: f32) -> char {
    let code = f32::from(b'0') + (depth + 1.0) * 5.0;
    (code as u8).clamp(b'0', b'9') as char
}

/// Solid block whose foreground and background share the depth's gray level.
pub fn gray_block(depth: f32) -> Cell {
    let gray = Rgb::gray(depth_to_level(depth));
    Cell::new('█', gray, gray)
}
