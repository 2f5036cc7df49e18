//! Criterion benchmarks for skeleton derivation from finished meshes.
//! Focus sizes: n in {16, 32, 64, 128} contour vertices (n - 2 triangles).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figrig::figure::{Color, Figure};
use figrig::rand::{draw_contour_radial, ContourCfg, ReplayToken};
use figrig::skeleton::Skeleton;

fn mesh(n: usize) -> Figure {
    let cfg = ContourCfg {
        vertex_count: n,
        ..ContourCfg::default()
    };
    let pts = draw_contour_radial(cfg, ReplayToken { seed: 47, index: 0 });
    match Figure::from_contour(&pts, Color::WHITE) {
        Ok(figure) => figure,
        Err(e) => panic!("bench contour failed to triangulate: {e}"),
    }
}

fn bench_skeleton(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton");
    for &n in &[16usize, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("from_figure", n), &n, |b, &n| {
            b.iter_batched(
                || mesh(n),
                |figure| {
                    let _sk = Skeleton::from_figure(&figure);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_skeleton);
criterion_main!(benches);
