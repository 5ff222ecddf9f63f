//! Criterion benchmarks for the hull finders.
//! Focus sizes: n in {16, 128, 1024, 8192}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::hull::{chains, graham, jarvis};
use planar::rand::{draw_cloud, CloudCfg};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[16usize, 128, 1024, 8192] {
        let pts = draw_cloud(
            CloudCfg {
                count: n,
                span: 1000.0,
            },
            42,
        );

        group.bench_with_input(BenchmarkId::new("chains", n), &pts, |b, pts| {
            b.iter(|| chains(pts))
        });
        group.bench_with_input(BenchmarkId::new("graham", n), &pts, |b, pts| {
            b.iter(|| graham(pts).unwrap())
        });
        // Jarvis is O(n·h); keep the largest size out of its sweep.
        if n <= 1024 {
            group.bench_with_input(BenchmarkId::new("jarvis", n), &pts, |b, pts| {
                b.iter(|| jarvis(pts).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
