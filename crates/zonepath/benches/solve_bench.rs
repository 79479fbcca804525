//! Criterion benchmarks for the covered shortest-path pipeline.
//! Focus sizes: n in {0, 5, 10, 20, 40} zones.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use zonepath::coverage::covers;
use zonepath::geom::Segment;
use zonepath::graph::build_graph;
use zonepath::rand::{draw_instance, InstanceCfg, ReplayToken};
use zonepath::solve;

fn cfg(n: usize) -> InstanceCfg {
    InstanceCfg {
        zones: n,
        ..InstanceCfg::default()
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("zonepath");
    for &n in &[0usize, 5, 10, 20, 40] {
        group.bench_with_input(BenchmarkId::new("covers", n), &n, |b, &n| {
            b.iter_batched(
                || draw_instance(cfg(n), ReplayToken { seed: 41, index: 0 }),
                |inst| {
                    let _ok = covers(&inst.zones, &Segment::new(inst.source, inst.target));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("build_graph", n), &n, |b, &n| {
            b.iter_batched(
                || draw_instance(cfg(n), ReplayToken { seed: 42, index: 0 }),
                |inst| {
                    let _g = build_graph(inst.source, inst.target, &inst.zones);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve", n), &n, |b, &n| {
            b.iter_batched(
                || draw_instance(cfg(n), ReplayToken { seed: 43, index: 0 }),
                |inst| {
                    let _sol = solve(&inst);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
