//! Character grid with a parallel depth buffer.
//!
//! Cells and depths are stored row-major in two flat vectors indexed by
//! `y * width + x`. Depths start at 0.
//!
//! # Depth gate
//!
//! A candidate at depth `d` claims a cell when `d <= stored + 1`, where
//! `stored` is the depth of the last accepted write. Larger depth is farther.
//! The one-unit slack lets coplanar neighbours overwrite each other instead of
//! fighting, but it also means a later, slightly farther surface can replace
//! a nearer one: the outcome depends on submission order.

use super::shader::Cell;
use crate::error::{RasterError, Result};

const DEPTH_TOLERANCE: f32 = 1.0;

/// Number of cells in a `width x height` grid.
///
/// Each dimension must lie in `2..=u32::MAX`: at least 2 so pixel coordinates
/// can be mapped onto `[-1, 1]`, at most `u32::MAX` so the grid can be
/// exported as an image. The product must not overflow `usize`.
pub fn cell_count(width: usize, height: usize) -> Result<usize> {
    let invalid = RasterError::InvalidDimensions { width, height };
    if width < 2 || height < 2 || u32::try_from(width).is_err() || u32::try_from(height).is_err()
    {
        return Err(invalid);
    }
    width.checked_mul(height).ok_or(invalid)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    cells: Vec<Cell>,
    depth: Vec<f32>,
    blank: Cell,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    /// Allocates a `width x height` grid filled with `blank`.
    ///
    /// See [`cell_count`] for the accepted dimensions.
    pub fn new(width: usize, height: usize, blank: Cell) -> Result<Self> {
        let size = cell_count(width, height)?;
        Ok(Self {
            cells: vec![blank; size],
            depth: vec![0.0; size],
            blank,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell the buffer was filled with.
    pub fn blank(&self) -> Cell {
        self.blank
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Runs the depth gate for `(x, y)`.
    ///
    /// On success the stored depth becomes `depth` and the cell is handed back
    /// for the caller to fill. Returns `None`, changing nothing, when the
    /// candidate is too far behind the stored depth, when `depth` is NaN, or
    /// when the coordinates fall outside the buffer.
    #[inline]
    pub fn claim(&mut self, x: usize, y: usize, depth: f32) -> Option<&mut Cell> {
        let idx = self.index(x, y)?;
        if depth.is_nan() || depth > self.depth[idx] + DEPTH_TOLERANCE {
            return None;
        }
        self.depth[idx] = depth;
        Some(&mut self.cells[idx])
    }

    /// Claims `(x, y)` and stores `cell` there. Returns whether the write
    /// passed the depth gate.
    #[inline]
    pub fn write(&mut self, x: usize, y: usize, depth: f32, cell: Cell) -> bool {
        match self.claim(x, y, depth) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn depth(&self, x: usize, y: usize) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth[idx])
    }

    /// Whether anything has been written at `(x, y)`.
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(|c| c != self.blank)
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Number of cells that differ from the blank cell.
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.blank).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> FrameBuffer {
        FrameBuffer::new(4, 3, Cell::plain('.')).unwrap()
    }

    #[test]
    fn starts_blank_with_zero_depth() {
        let fb = buffer();
        assert_eq!(fb.cell(3, 2), Some(Cell::plain('.')));
        assert_eq!(fb.depth(0, 0), Some(0.0));
        assert_eq!(fb.covered_count(), 0);
        assert_eq!(fb.rows().count(), 3);
    }

    #[test]
    fn rejects_too_small_dimensions() {
        assert!(matches!(
            FrameBuffer::new(1, 10, Cell::plain('.')),
            Err(RasterError::InvalidDimensions { width: 1, height: 10 })
        ));
        assert!(FrameBuffer::new(10, 0, Cell::plain('.')).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected_before_allocating() {
        assert!(matches!(
            FrameBuffer::new(usize::MAX, 2, Cell::plain('.')),
            Err(RasterError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            cell_count(usize::MAX / 2 + 1, 2),
            Err(RasterError::InvalidDimensions { .. })
        ));
        assert_eq!(cell_count(150, 50).unwrap(), 7500);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn dimensions_beyond_u32_are_rejected() {
        let wide = u32::MAX as usize + 1;
        assert!(cell_count(wide, 2).is_err());
        assert!(cell_count(2, wide).is_err());
        assert!(cell_count(u32::MAX as usize, 2).is_ok());
    }

    #[test]
    fn first_write_needs_depth_within_one() {
        let mut fb = buffer();
        assert!(!fb.write(0, 0, 1.5, Cell::plain('x')));
        assert_eq!(fb.cell(0, 0), Some(Cell::plain('.')));
        assert!(fb.write(0, 0, 1.0, Cell::plain('x')));
        assert_eq!(fb.cell(0, 0), Some(Cell::plain('x')));
    }

    #[test]
    fn write_within_tolerance_replaces_stored_depth() {
        let mut fb = buffer();
        assert!(fb.write(1, 1, 0.2, Cell::plain('a')));
        assert!(fb.write(1, 1, 1.2, Cell::plain('b')));
        assert_eq!(fb.depth(1, 1), Some(1.2));
        assert_eq!(fb.cell(1, 1), Some(Cell::plain('b')));

        // tolerance slides with the stored value
        assert!(fb.write(1, 1, 2.1, Cell::plain('c')));
        assert_eq!(fb.depth(1, 1), Some(2.1));
    }

    #[test]
    fn write_beyond_tolerance_is_rejected() {
        let mut fb = buffer();
        assert!(fb.write(2, 0, -0.5, Cell::plain('a')));
        assert!(!fb.write(2, 0, 0.75, Cell::plain('b')));
        assert_eq!(fb.depth(2, 0), Some(-0.5));
        assert_eq!(fb.cell(2, 0), Some(Cell::plain('a')));
    }

    #[test]
    fn repeated_write_is_idempotent() {
        let mut once = buffer();
        once.write(3, 1, 0.4, Cell::plain('q'));

        let mut twice = buffer();
        twice.write(3, 1, 0.4, Cell::plain('q'));
        twice.write(3, 1, 0.4, Cell::plain('q'));

        assert_eq!(once, twice);
    }

    #[test]
    fn nan_and_out_of_bounds_do_not_touch_buffer() {
        let mut fb = buffer();
        assert!(fb.claim(0, 0, f32::NAN).is_none());
        assert!(fb.claim(4, 0, 0.0).is_none());
        assert!(fb.claim(0, 3, 0.0).is_none());
        assert_eq!(fb, buffer());
    }

    #[test]
    fn claim_hands_back_the_cell() {
        let mut fb = buffer();
        if let Some(cell) = fb.claim(1, 2, 0.0) {
            cell.glyph = '#';
        }
        assert!(fb.is_covered(1, 2));
        assert!(!fb.is_covered(2, 1));
        assert_eq!(fb.covered_count(), 1);
    }
}
