// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning a grid into non-overlapping rectangles.
//!
//! Both strategies return rectangles that are pairwise disjoint and whose
//! union is exactly the set of cells equal to the requested occupancy.
//! Neither mutates the caller's grid.
//!
//! - [`partition_greedy`]: one scanline pass that grows each rectangle right
//!   and then down. Fast, but tends to produce many thin rectangles.
//! - [`partition_iterative_maximal`]: repeatedly removes the largest
//!   remaining rectangle. Fewer, larger rectangles at `O(k · width · height)`
//!   for `k` rectangles.

use alloc::vec;
use alloc::vec::Vec;

use crate::grid::Grid;
use crate::max_rect::find_max_rectangle;
use crate::rect::CellRect;

/// Which partitioning algorithm to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionStrategy {
    /// Single scanline pass; see [`partition_greedy`].
    Greedy,
    /// Repeated largest-rectangle extraction; see [`partition_iterative_maximal`].
    #[default]
    IterativeMaximal,
}

/// Partition the cells equal to `occupancy` using `strategy`.
pub fn partition(grid: &Grid, occupancy: bool, strategy: PartitionStrategy) -> Vec<CellRect> {
    match strategy {
        PartitionStrategy::Greedy => partition_greedy(grid, occupancy),
        PartitionStrategy::IterativeMaximal => partition_iterative_maximal(grid, occupancy),
    }
}

/// Partition by repeatedly taking the largest remaining rectangle.
///
/// Works on a private copy of `grid`: each rectangle found is filled with
/// `!occupancy` in the copy so later passes cannot reuse its cells. Stops
/// once no matching cell remains. Rectangles are returned in the order they
/// were extracted, so areas are non-increasing.
pub fn partition_iterative_maximal(grid: &Grid, occupancy: bool) -> Vec<CellRect> {
    let mut working = grid.clone();
    let mut rects = Vec::new();
    while let Some(rect) = find_max_rectangle(&working, occupancy) {
        log::trace!("iterative-maximal: extracted {rect:?}");
        working.fill_rect(&rect, !occupancy);
        rects.push(rect);
    }
    log::debug!(
        "iterative-maximal partition of {}x{} grid (occupancy={occupancy}): {} rectangles",
        grid.width(),
        grid.height(),
        rects.len()
    );
    rects
}

/// Partition with a single greedy scanline pass.
///
/// Rows are scanned top to bottom and columns left to right. Each unclaimed
/// matching cell starts a rectangle that first extends right along its row
/// (fixing the width) and then extends down while every cell under that
/// width still matches and is unclaimed. The rectangle's cells are then
/// claimed and the scan resumes just past its right edge.
pub fn partition_greedy(grid: &Grid, occupancy: bool) -> Vec<CellRect> {
    let mut scan = GreedyScan {
        grid,
        occupancy,
        claimed: vec![false; grid.width() * grid.height()],
    };
    let mut rects = Vec::new();

    for yi in 0..grid.height() {
        let mut xi = 0;
        while let Some(start) = scan.next_start(xi, yi) {
            let rect = scan.grow(start, yi);
            log::trace!("greedy: grew {rect:?}");
            scan.claim(&rect);
            rects.push(rect);
            xi = rect.xi2() + 1;
        }
    }

    log::debug!(
        "greedy partition of {}x{} grid (occupancy={occupancy}): {} rectangles",
        grid.width(),
        grid.height(),
        rects.len()
    );
    rects
}

/// Bookkeeping for [`partition_greedy`]; only `claimed` is ever written.
struct GreedyScan<'a> {
    grid: &'a Grid,
    occupancy: bool,
    claimed: Vec<bool>,
}

impl GreedyScan<'_> {
    fn usable(&self, xi: usize, yi: usize) -> bool {
        !self.claimed[yi * self.grid.width() + xi] && self.grid.get(xi, yi) == self.occupancy
    }

    /// First usable column at or after `xi` on row `yi`.
    fn next_start(&self, xi: usize, yi: usize) -> Option<usize> {
        (xi..self.grid.width()).find(|&x| self.usable(x, yi))
    }

    /// Grow a rectangle whose upper-left corner is the usable cell `(xi1, yi1)`.
    fn grow(&self, xi1: usize, yi1: usize) -> CellRect {
        // The first row fixes the width.
        let xi2 = (xi1..self.grid.width())
            .take_while(|&xi| self.usable(xi, yi1))
            .last()
            .unwrap_or(xi1);

        // Later rows either fit entirely or end the rectangle.
        let yi2 = (yi1 + 1..self.grid.height())
            .take_while(|&yi| (xi1..=xi2).all(|xi| self.usable(xi, yi)))
            .last()
            .unwrap_or(yi1);

        CellRect::new(xi1, yi1, xi2, yi2)
    }

    fn claim(&mut self, rect: &CellRect) {
        let w = self.grid.width();
        for yi in rect.yi1()..=rect.yi2() {
            self.claimed[yi * w + rect.xi1()..=yi * w + rect.xi2()].fill(true);
        }
    }
}
