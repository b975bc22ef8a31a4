// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by grid queries.

use thiserror::Error;

/// Error returned by [`Grid::at`](crate::Grid::at).
///
/// This is the only user-facing error in the crate. Mutations clamp their
/// input instead of failing, and searches with unusable dimensions return an
/// empty result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum GridError {
    /// The requested cell lies outside `[0, width) × [0, height)`.
    #[error("cell ({xi}, {yi}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        xi: usize,
        /// Requested row.
        yi: usize,
        /// Grid width in cells.
        width: usize,
        /// Grid height in cells.
        height: usize,
    },
}
