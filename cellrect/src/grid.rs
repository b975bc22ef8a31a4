// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense binary occupancy grid.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::GridError;
use crate::rect::CellRect;

/// Two-dimensional occupancy grid of `width × height` boolean cells.
///
/// `true` marks an occupied cell and `false` an unoccupied one. Cells are
/// addressed by column `xi` and row `yi`, with `(0, 0)` in the upper-left
/// corner. Every cell always holds a value; a new grid starts unoccupied.
///
/// Cloning duplicates the buffer, so a clone can be marked up freely without
/// affecting the original. The algorithms in this crate rely on that when
/// they need scratch state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    // Row-major, `yi * width + xi`.
    cells: Vec<bool>,
}

impl Grid {
    /// Create an unoccupied grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid whose cell `(xi, yi)` is `f(xi, yi)`.
    ///
    /// Panics if either dimension is zero.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut grid = Self::new(width, height);
        for yi in 0..height {
            for xi in 0..width {
                grid.cells[yi * width + xi] = f(xi, yi);
            }
        }
        grid
    }

    /// Width in cells.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// State of cell `(xi, yi)`.
    ///
    /// Returns [`GridError::OutOfBounds`] when the cell lies outside the grid.
    pub fn at(&self, xi: usize, yi: usize) -> Result<bool, GridError> {
        if xi >= self.width || yi >= self.height {
            return Err(GridError::OutOfBounds {
                xi,
                yi,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get(xi, yi))
    }

    /// Unchecked-by-contract cell read for in-crate scans that already stay in bounds.
    #[inline]
    pub(crate) fn get(&self, xi: usize, yi: usize) -> bool {
        debug_assert!(
            xi < self.width && yi < self.height,
            "cell ({xi}, {yi}) outside {}x{}",
            self.width,
            self.height
        );
        self.cells[yi * self.width + xi]
    }

    /// Set every cell in the closed rectangle spanned by two corners to `value`.
    ///
    /// Corners are clamped into the grid and reordered so the first is the
    /// upper-left one. Out-of-range or inverted input is therefore corrected
    /// instead of rejected, and this never fails.
    pub fn fill_rectangle(&mut self, xi1: i64, yi1: i64, xi2: i64, yi2: i64, value: bool) {
        let [mut xi1, mut xi2] = [xi1, xi2].map(|i| clamp_index(i, self.width));
        let [mut yi1, mut yi2] = [yi1, yi2].map(|i| clamp_index(i, self.height));
        if xi1 > xi2 {
            core::mem::swap(&mut xi1, &mut xi2);
        }
        if yi1 > yi2 {
            core::mem::swap(&mut yi1, &mut yi2);
        }
        self.fill_span(xi1, yi1, xi2, yi2, value);
    }

    /// Set every cell covered by `rect` to `value`.
    ///
    /// Parts of `rect` outside the grid are ignored.
    pub fn fill_rect(&mut self, rect: &CellRect, value: bool) {
        if rect.xi1() >= self.width || rect.yi1() >= self.height {
            return;
        }
        let xi2 = rect.xi2().min(self.width - 1);
        let yi2 = rect.yi2().min(self.height - 1);
        self.fill_span(rect.xi1(), rect.yi1(), xi2, yi2, value);
    }

    fn fill_span(&mut self, xi1: usize, yi1: usize, xi2: usize, yi2: usize, value: bool) {
        for yi in yi1..=yi2 {
            let row = yi * self.width;
            self.cells[row + xi1..=row + xi2].fill(value);
        }
    }

    /// Mark every cell unoccupied.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of cells whose state equals `value`.
    pub fn count(&self, value: bool) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}

/// Clamp a signed index into `0..len`.
fn clamp_index(i: i64, len: usize) -> usize {
    let max = len - 1;
    if i < 0 {
        0
    } else {
        // Positive values too large for `usize` (32-bit targets) are past the end.
        usize::try_from(i).map_or(max, |i| i.min(max))
    }
}
