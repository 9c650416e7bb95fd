//! Benchmarks for the exhaustive sweep.
//!
//! Run with: cargo bench -p skera-solve

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use skera_graph::generators;
use skera_solve::solve;

/// Sweep cost as the candidate space doubles.
fn bench_sweep_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_by_size");

    for n in &[8u32, 12, 16] {
        let graph = generators::random(*n, 0.5, 42);
        group.bench_with_input(BenchmarkId::new("random_p50", n), &graph, |b, graph| {
            b.iter(|| solve(black_box(graph)).unwrap());
        });
    }

    group.finish();
}

/// Edge count dominates the per-candidate cost.
fn bench_sweep_by_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_by_density");

    for (label, p) in &[("sparse", 0.2), ("medium", 0.5), ("dense", 0.9)] {
        let graph = generators::random(12, *p, 42);
        group.bench_with_input(BenchmarkId::new("n12", label), &graph, |b, graph| {
            b.iter(|| solve(black_box(graph)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep_by_size, bench_sweep_by_density);
criterion_main!(benches);
