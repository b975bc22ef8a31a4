// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellrect: rectangle decompositions and searches over binary occupancy grids.
//!
//! Cellrect is a reusable building block for editors, floor planners, and
//! map tools that keep a coarse occupied/unoccupied grid and need to reason
//! about it in terms of rectangles.
//!
//! - Find the largest rectangle of occupied (or unoccupied) cells.
//! - Partition every cell of one occupancy into non-overlapping rectangles.
//! - Search for every placement of an exact-size rectangle, or for rectangles
//!   of at least a given size.
//!
//! Every algorithm takes the target occupancy as a `bool` (`true` for
//! occupied), so occupied and free space are handled the same way.
//! Results are plain [`CellRect`] lists in discovery order; drawing, colors,
//! and mapping cells to screen space are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use cellrect::{Grid, PartitionStrategy, find_max_rectangle, partition};
//!
//! // An 8x6 room with a 3x2 obstacle.
//! let mut grid = Grid::new(8, 6);
//! grid.fill_rectangle(2, 1, 4, 2, true);
//!
//! // Largest free area.
//! let free = find_max_rectangle(&grid, false).unwrap();
//! assert_eq!(free.bounds(), (0, 3, 7, 5));
//!
//! // Cover all free cells with disjoint rectangles.
//! let pieces = partition(&grid, false, PartitionStrategy::IterativeMaximal);
//! let covered: usize = pieces.iter().map(|r| r.area()).sum();
//! assert_eq!(covered, grid.count(false));
//! ```
//!
//! ## Choosing a partition strategy
//!
//! - [`PartitionStrategy::Greedy`]: single scanline pass, linear in the grid
//!   size, produces more and thinner rectangles.
//! - [`PartitionStrategy::IterativeMaximal`] (default): repeatedly removes the
//!   largest remaining rectangle; fewer, larger rectangles at higher cost.
//!
//! ## Searching
//!
//! [`find_exact`] reports every anchor of a fixed-size window that fits.
//! [`find_minimum`] builds on the iterative-maximal partition and also merges
//! pairs of adjacent pieces; see [`search`] for its limits.
//! [`MinimumSearch`] exposes the merge axes and whether rotated rectangles
//! qualify.
//!
//! ## Errors and logging
//!
//! Only [`Grid::at`] can fail, with [`GridError::OutOfBounds`]. Fills clamp
//! their corners, and searches with unusable dimensions return nothing.
//! Algorithms report summaries through the [`log`] facade at `debug` level
//! and per-rectangle detail at `trace` level.
//!
//! ## Features
//!
//! - `std` (default): forwards to optional dependencies that need it.
//! - `libm`: `no_std` math for optional dependencies.
//! - `kurbo`: [`CellRect::to_kurbo`] for handing results to a Kurbo-based renderer.
//! - `serde`: serialization for results and search options.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod max_rect;
pub mod partition;
pub mod rect;
pub mod search;

pub use error::GridError;
pub use grid::Grid;
pub use max_rect::find_max_rectangle;
pub use partition::{PartitionStrategy, partition, partition_greedy, partition_iterative_maximal};
pub use rect::CellRect;
pub use search::{
    MergeAxes, MinimumSearch, Orientation, find_exact, find_exact_either_orientation,
    find_exact_f64, find_minimum, find_minimum_with, merge_adjacent,
};
