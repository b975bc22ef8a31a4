// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Largest rectangle of a given occupancy.

use alloc::vec;

use crate::grid::Grid;
use crate::rect::CellRect;

/// Find the largest-area rectangle made entirely of cells equal to `occupancy`.
///
/// Returns `None` when no cell matches.
///
/// The grid is scanned row by row, left to right. For every matching cell
/// the scan tracks how many matching cells run upward (`height`) and leftward
/// (`width`) from it, then walks up that column keeping the narrowest run
/// seen so far; each step is a candidate rectangle whose lower-right corner
/// is the current cell. A candidate replaces the best one only when its area
/// is strictly larger, so among equal-area rectangles the one found first in
/// row-major order (and, for the same cell, with the smaller height) wins.
///
/// ```
/// use cellrect::{Grid, find_max_rectangle};
///
/// let mut grid = Grid::new(4, 4);
/// grid.fill_rectangle(1, 1, 2, 2, true);
///
/// let rect = find_max_rectangle(&grid, true).unwrap();
/// assert_eq!(rect.bounds(), (1, 1, 2, 2));
///
/// // The free cells form a one-cell ring; its top row is found first.
/// assert_eq!(find_max_rectangle(&grid, false).unwrap().bounds(), (0, 0, 3, 0));
/// ```
pub fn find_max_rectangle(grid: &Grid, occupancy: bool) -> Option<CellRect> {
    let (w, h) = (grid.width(), grid.height());
    // Upward run per column for the current row.
    let mut heights = vec![0_usize; w];
    // Leftward run per cell; rows above are read back while walking up.
    let mut widths = vec![0_usize; w * h];

    let mut best: Option<(usize, CellRect)> = None;

    for yi in 0..h {
        for xi in 0..w {
            if grid.get(xi, yi) != occupancy {
                heights[xi] = 0;
                continue;
            }

            heights[xi] += 1;
            let width = if xi == 0 {
                1
            } else {
                widths[yi * w + xi - 1] + 1
            };
            widths[yi * w + xi] = width;

            let mut min_width = width;
            for dh in 0..heights[xi] {
                min_width = min_width.min(widths[(yi - dh) * w + xi]);
                let area = (dh + 1) * min_width;
                if best.is_none_or(|(best_area, _)| area > best_area) {
                    let rect = CellRect::new(xi + 1 - min_width, yi - dh, xi, yi);
                    best = Some((area, rect));
                }
            }
        }
    }

    let found = best.map(|(_, rect)| rect);
    log::debug!("max rectangle in {w}x{h} grid for occupancy={occupancy}: {found:?}");
    found
}
