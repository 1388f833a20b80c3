//! Grid benchmarks using criterion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spatial_hash::{Bounds, Handle, SpatialHashGrid};

const WORLD: f64 = 1000.0;

fn grid() -> SpatialHashGrid {
    SpatialHashGrid::with_bounds(Bounds::new((0.0, WORLD), (0.0, WORLD)), (64, 64)).unwrap()
}

/// Deterministic scatter so runs are comparable.
fn position(i: u64) -> (f64, f64) {
    let x = (i.wrapping_mul(2_654_435_761) % 10_000) as f64 / 10.0;
    let y = (i.wrapping_mul(40_503) % 10_000) as f64 / 10.0;
    (x, y)
}

fn populated(count: u64) -> (SpatialHashGrid, Vec<Handle>) {
    let mut grid = grid();
    let handles = (0..count)
        .map(|i| grid.insert(position(i), (8.0, 8.0), "bench").unwrap())
        .collect();
    (grid, handles)
}

fn insert_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for count in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("small", count), &count, |b, &count| {
            b.iter(|| {
                let mut grid = grid();
                for i in 0..count {
                    black_box(grid.insert(position(i), (8.0, 8.0), "bench").unwrap());
                }
            });
        });
    }

    group.finish();
}

fn update_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for count in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("shift", count), &count, |b, &count| {
            let (mut grid, handles) = populated(count);
            let mut step = 0_u64;

            b.iter(|| {
                step += 1;
                for (i, &handle) in handles.iter().enumerate() {
                    grid.update(handle, position(i as u64 + step)).unwrap();
                }
            });
        });
    }

    group.finish();
}

fn query_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for count in [100, 1000, 10000] {
        let (grid, _) = populated(count);

        group.bench_with_input(BenchmarkId::new("window_32", count), &grid, |b, grid| {
            let mut i = 0_u64;
            b.iter(|| {
                i += 1;
                black_box(grid.query(position(i), (32.0, 32.0)));
            });
        });

        // Brute force scan for comparison.
        group.bench_with_input(BenchmarkId::new("linear_scan", count), &grid, |b, grid| {
            let mut i = 0_u64;
            b.iter(|| {
                i += 1;
                let center = position(i);
                black_box(
                    grid.records()
                        .filter(|record| record.intersects(center, (32.0, 32.0)))
                        .count(),
                );
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    insert_benchmarks,
    update_benchmarks,
    query_benchmarks
);
criterion_main!(benches);
