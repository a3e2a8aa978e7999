//! Benchmarks for band extraction and polyline post-processing.
//!
//! Run with: cargo bench --package isoband --bench isoband_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use isoband::chain::chain_tolerance;
use isoband::{
    bands_from_thresholds, clip_to_box, connect_segments, extract_bands, extract_bands_par,
    generate_levels, march_band, rescale, smooth, Band, ClipBox, OutputSize, Point, Polyline,
    ScalarGrid,
};
use rand::Rng;
use test_utils::create_wave_grid;

/// Smooth field with hills and valleys.
fn smooth_grid(width: usize, height: usize) -> ScalarGrid {
    ScalarGrid::from_vec(width, height, create_wave_grid(width, height))
        .expect("generated grid is valid")
}

/// Smooth field with random noise on top (many more segments).
fn noisy_grid(width: usize, height: usize) -> ScalarGrid {
    let mut rng = rand::thread_rng();
    let data = create_wave_grid(width, height)
        .into_iter()
        .map(|v| v + rng.gen_range(-5.0..5.0))
        .collect();
    ScalarGrid::from_vec(width, height, data).expect("generated grid is valid")
}

// =============================================================================
// MARCHING BENCHMARKS
// =============================================================================

fn bench_march_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("march_band");
    let band = Band::new(45.0, 55.0).expect("valid band");

    let sizes = [(64, 64), (128, 128), (256, 256), (512, 512)];

    for (width, height) in sizes {
        let smooth = smooth_grid(width, height);
        let noisy = noisy_grid(width, height);

        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::new("smooth", format!("{}x{}", width, height)),
            &smooth,
            |b, grid| {
                b.iter(|| march_band(black_box(grid), black_box(&band)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("noisy", format!("{}x{}", width, height)),
            &noisy,
            |b, grid| {
                b.iter(|| march_band(black_box(grid), black_box(&band)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// SEGMENT CHAINING BENCHMARKS
// =============================================================================

fn bench_connect_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect_segments");
    let band = Band::new(45.0, 55.0).expect("valid band");

    for (width, height) in [(128, 128), (256, 256)] {
        let grid = noisy_grid(width, height);
        let segments = march_band(&grid, &band);
        let tolerance = chain_tolerance(grid.size());

        group.throughput(Throughput::Elements(segments.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("noisy", format!("{}x{}_{}seg", width, height, segments.len())),
            &segments,
            |b, segs| {
                b.iter(|| connect_segments(black_box(segs), tolerance));
            },
        );
    }

    group.finish();
}

// =============================================================================
// FULL EXTRACTION BENCHMARKS
// =============================================================================

fn bench_extract_bands(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_bands");
    group.sample_size(20);

    let levels = generate_levels(20.0, 80.0, 5.0);
    let bands = bands_from_thresholds(&levels).expect("levels are increasing");

    for (width, height) in [(128, 128), (256, 256)] {
        let grid = smooth_grid(width, height);
        let label = format!("{}x{}_{}bands", width, height, bands.len());

        group.bench_with_input(BenchmarkId::new("sequential", &label), &grid, |b, grid| {
            b.iter(|| extract_bands(black_box(grid), black_box(&bands)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", &label), &grid, |b, grid| {
            b.iter(|| extract_bands_par(black_box(grid), black_box(&bands)));
        });
    }

    group.finish();
}

// =============================================================================
// POST-PROCESSING BENCHMARKS
// =============================================================================

fn bench_post_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("post_processing");

    let grid = smooth_grid(256, 256);
    let bands = bands_from_thresholds(&generate_levels(20.0, 80.0, 5.0)).expect("valid levels");
    let polylines = extract_bands(&grid, &bands).expect("valid bands");
    let size = OutputSize::new(1920.0, 1080.0);
    let scaled = rescale(&polylines, grid.size(), size);
    let viewport = ClipBox::from_size(size).inset(200.0);

    group.bench_function("rescale_256x256", |b| {
        b.iter(|| rescale(black_box(&polylines), grid.size(), size));
    });

    group.bench_function("clip_to_box_256x256", |b| {
        b.iter(|| clip_to_box(black_box(&scaled), black_box(&viewport)));
    });

    for count in [10, 100, 500] {
        let points: Vec<Point> = (0..=count)
            .map(|i| {
                let angle = (i % count) as f64 / count as f64 * std::f64::consts::TAU;
                let radius = 100.0 + (angle * 5.0).sin() * 20.0;
                Point::new(128.0 + radius * angle.cos(), 128.0 + radius * angle.sin())
            })
            .collect();
        let ring = Polyline::new(points, true);

        for passes in [1, 2, 3] {
            group.bench_with_input(
                BenchmarkId::new(format!("smooth_{}_passes", passes), format!("{}_points", count)),
                &ring,
                |b, ring| {
                    b.iter(|| smooth(black_box(ring), black_box(passes)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_march_band,
    bench_connect_segments,
    bench_extract_bands,
    bench_post_processing,
);

criterion_main!(benches);
