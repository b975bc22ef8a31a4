// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle search.
//!
//! Look for places to put a 3x2 piece of furniture on a floor plan, first at
//! exactly that size, then in either orientation, then anywhere at least that
//! large.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p cellrect_demos --example rectangle_search`

use cellrect::{
    Grid, MinimumSearch, Orientation, find_exact, find_exact_either_orientation, find_minimum,
    find_minimum_with,
};

fn main() {
    env_logger::init();

    // Walls are occupied; the room interior is free.
    let mut grid = Grid::new(12, 9);
    grid.fill_rectangle(0, 0, 11, 8, true);
    grid.fill_rectangle(1, 1, 10, 7, false);
    // A column and a cabinet.
    grid.fill_rectangle(5, 3, 5, 4, true);
    grid.fill_rectangle(8, 1, 10, 2, true);

    let exact = find_exact(&grid, 3, 2, false);
    println!("3x2 placements: {}", exact.len());
    if let Some(first) = exact.first() {
        println!("  first at {:?}", first.bounds());
    }

    let either = find_exact_either_orientation(&grid, 3, 2, false);
    println!("3x2 or 2x3 placements: {}", either.len());

    let minimum = find_minimum(&grid, 3, 2, false);
    println!("free rectangles at least 3x2: {}", minimum.len());
    for r in &minimum {
        println!("  {:?} ({}x{})", r.bounds(), r.width(), r.height());
    }

    let rotated = MinimumSearch {
        orientation: Orientation::Either,
        ..MinimumSearch::new(3, 2, false)
    };
    let found = find_minimum_with(&grid, &rotated);
    println!("at least 3x2 in either orientation: {}", found.len());
    log::info!("search finished");
}
