// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cellrect::{Grid, MinimumSearch, Orientation, find_exact, find_minimum, find_minimum_with};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_noise_grid(n: usize, density: f64) -> Grid {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    Grid::from_fn(n, n, |_, _| rng.next_f64() < density)
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_exact");
    for &n in &[32usize, 64, 128] {
        let grid = gen_noise_grid(n, 0.02);
        group.throughput(Throughput::Elements((n * n) as u64));
        for &(w, h) in &[(2i64, 2i64), (8, 4), (16, 16)] {
            group.bench_function(format!("noise_n{}_{}x{}", n, w, h), |b| {
                b.iter(|| black_box(find_exact(black_box(&grid), w, h, false)))
            });
        }
    }
    // Dense obstructions exercise the full-rescan path after blocked columns.
    let grid = gen_noise_grid(64, 0.3);
    group.bench_function("dense_n64_3x3", |b| {
        b.iter(|| black_box(find_exact(black_box(&grid), 3, 3, false)))
    });
    group.finish();
}

fn bench_minimum(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_minimum");
    for &n in &[16usize, 32] {
        let grid = gen_noise_grid(n, 0.1);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("noise_n{}_3x2", n), |b| {
            b.iter(|| black_box(find_minimum(black_box(&grid), 3, 2, false)))
        });
        let search = MinimumSearch {
            orientation: Orientation::Either,
            ..MinimumSearch::new(3, 2, false)
        };
        group.bench_function(format!("noise_n{}_3x2_either", n), |b| {
            b.iter(|| black_box(find_minimum_with(black_box(&grid), &search)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact, bench_minimum);
criterion_main!(benches);
