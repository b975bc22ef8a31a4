// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition basics.
//!
//! Paint a few obstacles, find the largest free area, and compare the two
//! partition strategies. Each rectangle is printed as a letter.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p cellrect_demos --example partition_basics`

use cellrect::{CellRect, Grid, PartitionStrategy, find_max_rectangle, partition};
use kurbo::Affine;

/// Render `rects` over `grid`: `#` for occupied cells not in any rectangle,
/// `.` for free ones, and a letter per rectangle.
fn render(grid: &Grid, rects: &[CellRect]) -> String {
    let mut out = String::new();
    for yi in 0..grid.height() {
        for xi in 0..grid.width() {
            let label = rects.iter().position(|r| r.contains(xi, yi));
            let c = match label {
                Some(i) => char::from(b'a' + (i % 26) as u8),
                None if grid.at(xi, yi).unwrap_or(false) => '#',
                None => '.',
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::init();

    let mut grid = Grid::new(16, 8);
    grid.fill_rectangle(3, 1, 5, 3, true);
    grid.fill_rectangle(10, 0, 11, 5, true);
    grid.fill_rectangle(0, 6, 6, 7, true);
    // Corners are clamped and reordered, so this fills (13, 4)-(15, 7).
    grid.fill_rectangle(20, 9, 13, 4, true);
    println!("grid:\n{}", render(&grid, &[]));

    let free = find_max_rectangle(&grid, false).expect("grid has free cells");
    println!("largest free rectangle: {free:?} (area {})", free.area());
    println!("{}", render(&grid, &[free]));

    for strategy in [
        PartitionStrategy::Greedy,
        PartitionStrategy::IterativeMaximal,
    ] {
        let rects = partition(&grid, false, strategy);
        println!("{strategy:?}: {} rectangles", rects.len());
        println!("{}", render(&grid, &rects));
    }

    // A renderer with 24 px cells maps results through its own transform.
    let to_screen = Affine::scale(24.0);
    let on_screen = to_screen.transform_rect_bbox(free.to_kurbo());
    println!("largest free rectangle on screen: {on_screen:?}");
}
