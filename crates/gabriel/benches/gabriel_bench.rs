//! Criterion benchmarks for triangulation and the Gabriel filter.
//! Focus sizes: n in {100, 1_000, 10_000} uniform points in the unit square.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gabriel::api::{
    build_with, uniform_points, Bounds2, Euclidean, GabrielCfg, GabrielGraph, ReplayToken,
    SpadeDelaunay, Triangulator,
};

fn bench_gabriel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gabriel");
    for &n in &[100usize, 1_000, 10_000] {
        let tok = ReplayToken { seed: 43, index: n as u64 };
        let points = uniform_points(n, Bounds2::unit(), tok);
        let simplices = SpadeDelaunay.triangulate(&points).unwrap();

        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, _| {
            b.iter(|| SpadeDelaunay.triangulate(&points).unwrap())
        });

        for parallel in [false, true] {
            let id = if parallel { "filter_par" } else { "filter_seq" };
            group.bench_with_input(BenchmarkId::new(id, n), &n, |b, _| {
                b.iter(|| {
                    build_with(&points, &simplices, &Euclidean, GabrielCfg { parallel }).unwrap()
                })
            });
        }

        group.bench_with_input(BenchmarkId::new("graph_new", n), &n, |b, _| {
            b.iter_batched(
                || points.clone(),
                |pts| GabrielGraph::new(pts).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gabriel);
criterion_main!(benches);
