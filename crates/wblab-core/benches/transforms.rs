//! Benchmarks for wblab-core transforms
//!
//! Run with: cargo bench -p wblab-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wblab_core::scene::TintedScene;
use wblab_core::{kelvin_to_rgb, nearest_preset, white_balance_filter, Rgb};

/// Benchmark the Kelvin conversion across the slider domain
fn bench_kelvin_to_rgb(c: &mut Criterion) {
    c.bench_function("kelvin_to_rgb/slider_sweep", |b| {
        b.iter(|| {
            let mut kelvin = 2000.0;
            while kelvin <= 10000.0 {
                black_box(kelvin_to_rgb(black_box(kelvin)));
                kelvin += 100.0;
            }
        });
    });
}

/// Benchmark filter composition and application
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for (label, wb) in [("neutral", 5500.0), ("warm", 8500.0), ("cool", 2850.0)] {
        group.bench_with_input(BenchmarkId::new("compose", label), &wb, |b, &wb| {
            b.iter(|| white_balance_filter(black_box(wb), black_box(5500.0)));
        });

        let filter = white_balance_filter(wb, 5500.0);
        group.bench_with_input(BenchmarkId::new("apply", label), &filter, |b, f| {
            b.iter(|| f.apply(black_box(Rgb::from_u32(0xF5DEB3))));
        });
    }

    group.finish();
}

fn bench_nearest_preset(c: &mut Criterion) {
    c.bench_function("nearest_preset", |b| {
        b.iter(|| nearest_preset(black_box(4750.0)));
    });
}

fn bench_scene(c: &mut Criterion) {
    c.bench_function("tinted_scene/render", |b| {
        b.iter(|| TintedScene::render(black_box(3200.0), black_box(6500.0)));
    });
}

criterion_group!(
    benches,
    bench_kelvin_to_rgb,
    bench_filter,
    bench_nearest_preset,
    bench_scene
);
criterion_main!(benches);
