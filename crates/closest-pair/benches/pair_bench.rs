//! Criterion benchmarks: divide-and-conquer vs the O(n²) baseline.
//! Sizes: n in {16, 128, 1024, 4096}; brute force stops at 1024.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use closest_pair::pair::{brute_force, closest_pair, closest_pair_with, SolveCfg};
use closest_pair::sample::{draw_points, PointCloud, ReplayToken, SampleCfg};

fn cloud(n: usize, cloud: PointCloud, seed: u64) -> Vec<closest_pair::pair::Point> {
    draw_points(&SampleCfg { count: n, cloud }, ReplayToken::new(seed)).unwrap()
}

fn bench_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[16usize, 128, 1024, 4096] {
        let uniform = PointCloud::Uniform { half_width: 1.0 };
        group.bench_with_input(BenchmarkId::new("divide_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, uniform, 43),
                |pts| closest_pair(&pts).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("no_cutoff", n), &n, |b, &n| {
            let cfg = SolveCfg {
                y_gap_cutoff: false,
                ..SolveCfg::default()
            };
            b.iter_batched(
                || cloud(n, uniform, 44),
                |pts| closest_pair_with(&pts, cfg).unwrap(),
                BatchSize::SmallInput,
            )
        });
        // Every point shares x, so every strip holds the whole subsequence.
        group.bench_with_input(BenchmarkId::new("column", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    cloud(
                        n,
                        PointCloud::Column {
                            x: 0.0,
                            height: 1.0,
                        },
                        45,
                    )
                },
                |pts| closest_pair(&pts).unwrap(),
                BatchSize::SmallInput,
            )
        });
        if n <= 1024 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                b.iter_batched(
                    || cloud(n, uniform, 43),
                    |pts| brute_force(&pts),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pair);
criterion_main!(benches);
