// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cell rectangle value type produced by every algorithm in this crate.

use core::fmt;

/// Axis-aligned rectangle of grid cells with inclusive bounds.
///
/// A `CellRect` covers the closed range `xi1..=xi2` × `yi1..=yi2`, so its
/// width and height are always at least one cell. Rectangles are created by
/// the algorithms in this crate and handed to the caller; they cannot be
/// built from arbitrary corners outside the crate, which keeps the
/// `xi1 <= xi2`, `yi1 <= yi2` ordering an invariant rather than a convention.
///
/// Rectangles returned for a [`Grid`](crate::Grid) also lie inside it:
/// `xi2 < width` and `yi2 < height`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellRect {
    xi1: usize,
    yi1: usize,
    xi2: usize,
    yi2: usize,
}

impl CellRect {
    /// Panics if the corners are inverted; algorithms only ever produce ordered corners.
    pub(crate) fn new(xi1: usize, yi1: usize, xi2: usize, yi2: usize) -> Self {
        assert!(
            xi1 <= xi2 && yi1 <= yi2,
            "inverted cell rectangle ({xi1}, {yi1})-({xi2}, {yi2})"
        );
        Self { xi1, yi1, xi2, yi2 }
    }

    /// Leftmost column.
    pub const fn xi1(&self) -> usize {
        self.xi1
    }

    /// Topmost row.
    pub const fn yi1(&self) -> usize {
        self.yi1
    }

    /// Rightmost column (inclusive).
    pub const fn xi2(&self) -> usize {
        self.xi2
    }

    /// Bottommost row (inclusive).
    pub const fn yi2(&self) -> usize {
        self.yi2
    }

    /// Corners as `(xi1, yi1, xi2, yi2)`.
    pub const fn bounds(&self) -> (usize, usize, usize, usize) {
        (self.xi1, self.yi1, self.xi2, self.yi2)
    }

    /// Number of columns covered.
    pub const fn width(&self) -> usize {
        self.xi2 - self.xi1 + 1
    }

    /// Number of rows covered.
    pub const fn height(&self) -> usize {
        self.yi2 - self.yi1 + 1
    }

    /// Number of cells covered.
    pub const fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the cell `(xi, yi)` lies inside this rectangle.
    pub const fn contains(&self, xi: usize, yi: usize) -> bool {
        self.xi1 <= xi && xi <= self.xi2 && self.yi1 <= yi && yi <= self.yi2
    }

    /// Whether the two rectangles share at least one cell.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.xi1 <= other.xi2
            && other.xi1 <= self.xi2
            && self.yi1 <= other.yi2
            && other.yi1 <= self.yi2
    }

    /// Iterate the covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (xi1, yi1, xi2, yi2) = self.bounds();
        (yi1..=yi2).flat_map(move |yi| (xi1..=xi2).map(move |xi| (xi, yi)))
    }

    /// The same rectangle as a [`kurbo::Rect`] in cell units.
    ///
    /// Cell `(xi, yi)` spans `[xi, xi + 1) × [yi, yi + 1)`, so the result
    /// runs from `(xi1, yi1)` to `(xi2 + 1, yi2 + 1)`. Scaling to display
    /// space is left to the caller.
    #[cfg(feature = "kurbo")]
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.xi1 as f64,
            self.yi1 as f64,
            (self.xi2 + 1) as f64,
            (self.yi2 + 1) as f64,
        )
    }
}

impl fmt::Debug for CellRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellRect({}, {})-({}, {})",
            self.xi1, self.yi1, self.xi2, self.yi2
        )
    }
}
