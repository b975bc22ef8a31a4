// Copyright 2025 the Cellrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cellrect::{Grid, PartitionStrategy, find_max_rectangle, partition};
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

/// Scattered single-cell obstacles.
fn gen_noise_grid(n: usize, density: f64) -> Grid {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    Grid::from_fn(n, n, |_, _| rng.next_f64() < density)
}

/// Rectangular obstacles of random size, like furniture on a floor plan.
fn gen_block_grid(n: usize, blocks: usize) -> Grid {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    let mut grid = Grid::new(n, n);
    for _ in 0..blocks {
        let x = (rng.next_u64() % n as u64) as i64;
        let y = (rng.next_u64() % n as u64) as i64;
        let w = (rng.next_u64() % 8) as i64;
        let h = (rng.next_u64() % 8) as i64;
        grid.fill_rectangle(x, y, x + w, y + h, true);
    }
    grid
}

fn bench_max_rectangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_rectangle");
    for &n in &[32usize, 64, 128] {
        let grid = gen_noise_grid(n, 0.1);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("noise_free_n{}", n), |b| {
            b.iter(|| black_box(find_max_rectangle(black_box(&grid), false)))
        });
    }
    let grid = Grid::new(128, 128);
    group.bench_function("empty_free_n128", |b| {
        b.iter(|| black_box(find_max_rectangle(black_box(&grid), false)))
    });
    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for (name, strategy) in [
        ("greedy", PartitionStrategy::Greedy),
        ("iterative_maximal", PartitionStrategy::IterativeMaximal),
    ] {
        for &n in &[32usize, 64, 128] {
            let grid = gen_block_grid(n, n / 2);
            group.throughput(Throughput::Elements((n * n) as u64));
            group.bench_function(format!("{}_blocks_n{}", name, n), |b| {
                b.iter(|| black_box(partition(black_box(&grid), false, strategy)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_max_rectangle, bench_partition);
criterion_main!(benches);
