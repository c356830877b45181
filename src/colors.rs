//! 24-bit colors for the ANSI sink.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// Maps a depth in `[-1, 1]` to a gray level, `(depth + 1) * 128`.
///
/// Out-of-range depths saturate at 0 and 255.
#[inline]
pub fn depth_to_level(depth: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    ((depth + 1.0) * 128.0).clamp(0.0, 255.0) as u8
}
