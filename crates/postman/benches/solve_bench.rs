//! Criterion benchmarks for the route inspection solver.
//! Focus sizes: vertices per island in {10, 50, 200}; islands in {1, 8}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use postman::api::{draw_islands, solve, IslandsCfg, ReplayToken, VertexCount};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &islands in &[1usize, 8] {
        for &n in &[10usize, 50, 200] {
            let cfg = IslandsCfg {
                islands,
                vertices_per_island: VertexCount::Fixed(n),
                extra_edges: n / 2,
                ..IslandsCfg::default()
            };
            let id = BenchmarkId::new(format!("islands_{islands}"), n);
            group.bench_with_input(id, &cfg, |b, &cfg| {
                b.iter_batched(
                    || draw_islands(cfg, ReplayToken { seed: 43, index: n as u64 }),
                    |g| {
                        let _sol = solve(&g).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    for &n in &[50usize, 200] {
        let cfg = IslandsCfg {
            vertices_per_island: VertexCount::Fixed(n),
            extra_edges: n,
            ..IslandsCfg::default()
        };
        let g = draw_islands(cfg, ReplayToken { seed: 44, index: 0 });
        let odd = g.odd_vertices();
        group.bench_with_input(BenchmarkId::new("greedy_pairing", n), &n, |b, _| {
            b.iter(|| {
                let _paths = g.shortest_paths(&odd).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_pairing);
criterion_main!(benches);
