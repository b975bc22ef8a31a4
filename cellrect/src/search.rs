// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Searching for rectangles of exact or minimum dimensions.
//!
//! ## Exact dimensions
//!
//! [`find_exact`] reports every placement of a `width × height` window whose
//! cells all equal the requested occupancy. The scan caches, per anchor
//! column, the last row known to block a window in that column, so most
//! blocked anchors are rejected without touching the grid. When the window to
//! the left was clear, only the newly exposed right column is checked.
//!
//! ## Minimum dimensions
//!
//! [`find_minimum`] partitions the grid with
//! [`partition_iterative_maximal`], keeps the pieces that are large enough,
//! and adds every merge of two edge-adjacent pieces that is large enough.
//! Only pairs are merged: a qualifying rectangle that can only be assembled
//! from three or more pieces is not reported.

use alloc::vec;
use alloc::vec::Vec;

use bitflags::bitflags;

use crate::grid::Grid;
use crate::partition::partition_iterative_maximal;
use crate::rect::CellRect;

/// Every anchor whose `width × height` window is entirely `occupancy`.
///
/// Anchors are upper-left corners, reported in row-major order. Returns an
/// empty list when either dimension is non-positive or larger than the grid.
///
/// ```
/// use cellrect::{Grid, find_exact};
///
/// let mut grid = Grid::new(4, 3);
/// grid.fill_rectangle(0, 0, 2, 1, true);
///
/// let hits: Vec<_> = find_exact(&grid, 2, 2, true).iter().map(|r| r.bounds()).collect();
/// assert_eq!(hits, [(0, 0, 1, 1), (1, 0, 2, 1)]);
/// assert!(find_exact(&grid, 0, 2, true).is_empty());
/// ```
pub fn find_exact(grid: &Grid, width: i64, height: i64, occupancy: bool) -> Vec<CellRect> {
    let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
        return Vec::new();
    };
    if w == 0 || h == 0 || w > grid.width() || h > grid.height() {
        return Vec::new();
    }

    let obstructed = !occupancy;
    let mut rects = Vec::new();

    // Row of the most recent obstruction seen inside a window anchored at each column.
    let mut nearest_obstruction: Vec<Option<usize>> = vec![None; grid.width()];
    // Whether the window anchored at each column was blocked on the current row.
    let mut was_obstructed = vec![false; grid.width()];

    for yi in 0..=grid.height() - h {
        let yi2 = yi + h - 1;
        for xi in 0..=grid.width() - w {
            let xi2 = xi + w - 1;

            if nearest_obstruction[xi].is_some_and(|oy| (yi..=yi2).contains(&oy)) {
                was_obstructed[xi] = true;
                continue;
            }

            let hit = if xi == 0 || was_obstructed[xi - 1] {
                // No clear neighbour to the left to reuse, so check the whole window.
                (yi..=yi2).find(|&ry| (xi..=xi2).any(|rx| grid.get(rx, ry) == obstructed))
            } else {
                (yi..=yi2).find(|&ry| grid.get(xi2, ry) == obstructed)
            };

            was_obstructed[xi] = hit.is_some();
            match hit {
                Some(oy) => nearest_obstruction[xi] = Some(oy),
                None => rects.push(CellRect::new(xi, yi, xi2, yi2)),
            }
        }
    }

    log::debug!(
        "exact {w}x{h} search (occupancy={occupancy}) in {}x{} grid: {} placements",
        grid.width(),
        grid.height(),
        rects.len()
    );
    rects
}

/// [`find_exact`] for dimensions that arrive as floating point.
///
/// Non-finite or non-integral dimensions yield an empty list, the same as
/// any other unusable size.
pub fn find_exact_f64(grid: &Grid, width: f64, height: f64, occupancy: bool) -> Vec<CellRect> {
    match (integral(width), integral(height)) {
        (Some(w), Some(h)) => find_exact(grid, w, h, occupancy),
        _ => Vec::new(),
    }
}

fn integral(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Out-of-range values saturate and then fail the round-trip check."
    )]
    let i = v as i64;
    (i as f64 == v).then_some(i)
}

/// [`find_exact`] for a window that may be placed in either orientation.
///
/// Placements of the `width × height` window come first, followed by those of
/// the rotated `height × width` window. Square windows are searched once.
pub fn find_exact_either_orientation(
    grid: &Grid,
    width: i64,
    height: i64,
    occupancy: bool,
) -> Vec<CellRect> {
    let mut rects = find_exact(grid, width, height, occupancy);
    if width != height {
        rects.extend(find_exact(grid, height, width, occupancy));
    }
    rects
}

bitflags! {
    /// Shared-edge directions [`find_minimum_with`] may merge along.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MergeAxes: u8 {
        /// Side-by-side pieces sharing a vertical edge.
        const VERTICAL   = 0b0000_0001;
        /// Stacked pieces sharing a horizontal edge.
        const HORIZONTAL = 0b0000_0010;
    }
}

impl Default for MergeAxes {
    fn default() -> Self {
        Self::VERTICAL | Self::HORIZONTAL
    }
}

/// How a rectangle is compared against the minimum dimensions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Width is checked against the minimum width and height against the minimum height.
    #[default]
    Fixed,
    /// A rectangle also qualifies if it meets the minimums once rotated by 90°.
    Either,
}

/// Options for [`find_minimum_with`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimumSearch {
    /// Smallest acceptable width in cells.
    pub min_width: i64,
    /// Smallest acceptable height in cells.
    pub min_height: i64,
    /// Occupancy value the rectangles must consist of.
    pub occupancy: bool,
    /// Which adjacent pieces may be merged.
    pub merge_axes: MergeAxes,
    /// Whether rotated rectangles qualify.
    pub orientation: Orientation,
}

impl MinimumSearch {
    /// Search for `occupancy` rectangles of at least `min_width × min_height`,
    /// merging along both axes in a fixed orientation.
    pub fn new(min_width: i64, min_height: i64, occupancy: bool) -> Self {
        Self {
            min_width,
            min_height,
            occupancy,
            merge_axes: MergeAxes::default(),
            orientation: Orientation::default(),
        }
    }

    /// Whether `rect` is large enough.
    pub fn accepts(&self, rect: &CellRect) -> bool {
        let fits = |w, h| at_least(w, self.min_width) && at_least(h, self.min_height);
        match self.orientation {
            Orientation::Fixed => fits(rect.width(), rect.height()),
            Orientation::Either => {
                fits(rect.width(), rect.height()) || fits(rect.height(), rect.width())
            }
        }
    }
}

fn at_least(extent: usize, min: i64) -> bool {
    i64::try_from(extent).map_or(true, |e| e >= min)
}

/// Rectangles of `occupancy` at least `min_width × min_height` in size.
///
/// Equivalent to [`find_minimum_with`] with [`MinimumSearch::new`].
///
/// ```
/// use cellrect::{Grid, find_minimum};
///
/// // Two offset 2x2 blocks. Neither is 3 wide, but the row they share is.
/// let mut grid = Grid::new(4, 3);
/// grid.fill_rectangle(0, 0, 1, 1, true);
/// grid.fill_rectangle(2, 1, 3, 2, true);
///
/// let found: Vec<_> = find_minimum(&grid, 3, 1, true).iter().map(|r| r.bounds()).collect();
/// assert_eq!(found, [(0, 1, 3, 1)]);
/// ```
pub fn find_minimum(
    grid: &Grid,
    min_width: i64,
    min_height: i64,
    occupancy: bool,
) -> Vec<CellRect> {
    find_minimum_with(grid, &MinimumSearch::new(min_width, min_height, occupancy))
}

/// Rectangles satisfying `search`, built from an iterative-maximal partition.
///
/// The qualifying partition pieces are listed first, in partition order,
/// followed by every qualifying merge of two adjacent pieces, in pair order.
/// Merged rectangles overlap the pieces they came from.
pub fn find_minimum_with(grid: &Grid, search: &MinimumSearch) -> Vec<CellRect> {
    let pieces = partition_iterative_maximal(grid, search.occupancy);

    let mut rects: Vec<CellRect> = pieces
        .iter()
        .copied()
        .filter(|r| search.accepts(r))
        .collect();
    let kept = rects.len();

    for (i, a) in pieces.iter().enumerate() {
        for b in &pieces[i + 1..] {
            if let Some(merged) = merge_along(a, b, search.merge_axes)
                && search.accepts(&merged)
            {
                rects.push(merged);
            }
        }
    }

    log::debug!(
        "minimum search {search:?}: {} pieces, {kept} kept, {} merged",
        pieces.len(),
        rects.len() - kept
    );
    rects
}

/// Merge two non-overlapping rectangles that share part of an edge.
///
/// If `a` and `b` sit side by side (one's right column directly left of the
/// other's left column) and their rows overlap, the result spans both column
/// ranges over the overlapping rows. Stacked rectangles with overlapping
/// columns merge the same way with rows and columns swapped. Returns `None`
/// when no edge is shared.
///
/// ```text
/// aaa..          .....
/// aaabb   ==>    mmmmm
/// ...bb          .....
/// ```
pub fn merge_adjacent(a: &CellRect, b: &CellRect) -> Option<CellRect> {
    merge_along(a, b, MergeAxes::all())
}

fn merge_along(a: &CellRect, b: &CellRect, axes: MergeAxes) -> Option<CellRect> {
    let vertical = if axes.contains(MergeAxes::VERTICAL) {
        merge_vertical(a, b)
    } else {
        None
    };
    vertical.or_else(|| {
        if axes.contains(MergeAxes::HORIZONTAL) {
            merge_horizontal(a, b)
        } else {
            None
        }
    })
}

fn merge_vertical(a: &CellRect, b: &CellRect) -> Option<CellRect> {
    let (left, right) = if b.xi1() < a.xi1() { (b, a) } else { (a, b) };
    if left.xi2() + 1 != right.xi1() {
        return None;
    }
    let yi1 = left.yi1().max(right.yi1());
    let yi2 = left.yi2().min(right.yi2());
    (yi1 <= yi2).then(|| CellRect::new(left.xi1(), yi1, right.xi2(), yi2))
}

fn merge_horizontal(a: &CellRect, b: &CellRect) -> Option<CellRect> {
    let (top, bottom) = if b.yi1() < a.yi1() { (b, a) } else { (a, b) };
    if top.yi2() + 1 != bottom.yi1() {
        return None;
    }
    let xi1 = top.xi1().max(bottom.xi1());
    let xi2 = top.xi2().min(bottom.xi2());
    (xi1 <= xi2).then(|| CellRect::new(xi1, top.yi1(), xi2, bottom.yi2()))
}
