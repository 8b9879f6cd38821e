//! Criterion micro-benchmarks for scene generation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use foray_bench::{reference_config, stress_config};
use foray_scene::{extract_details, extract_start_positions, generate_scene, SceneGenerator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: Sample a 4-arena scene with a caller-owned RNG.
fn bench_generate_reference(c: &mut Criterion) {
    let config = reference_config(42).scene;
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("generate_scene_4_arenas", |b| {
        b.iter(|| {
            let scene = generate_scene(&config, &mut rng).unwrap();
            black_box(&scene);
        });
    });
}

/// Benchmark: Sample a 64-arena scene from an owned generator.
fn bench_generate_stress(c: &mut Criterion) {
    let mut generator = SceneGenerator::new(stress_config(42).scene, 42).unwrap();

    c.bench_function("generate_scene_64_arenas", |b| {
        b.iter(|| black_box(generator.generate()));
    });
}

/// Benchmark: Flatten a 64-arena scene into details and a start report.
fn bench_extract(c: &mut Criterion) {
    let mut generator = SceneGenerator::new(stress_config(7).scene, 7).unwrap();
    let scene = generator.generate();

    c.bench_function("extract_details_64_arenas", |b| {
        b.iter(|| black_box(extract_details(&scene)));
    });
    c.bench_function("extract_start_positions_64_arenas", |b| {
        b.iter(|| black_box(extract_start_positions(&scene)));
    });
}

criterion_group!(
    benches,
    bench_generate_reference,
    bench_generate_stress,
    bench_extract
);
criterion_main!(benches);
