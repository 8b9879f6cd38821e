//! Criterion micro-benchmarks for pose tracking and goal features.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use foray_bench::{scripted_actions, stress_config};
use foray_core::Vec3;
use foray_scene::{extract_start_positions, SceneGenerator};
use foray_test_utils::tracker_at;
use foray_track::PositionTracker;

fn stress_tracker() -> PositionTracker {
    let mut generator = SceneGenerator::new(stress_config(42).scene, 42).unwrap();
    let (positions, rotations) = extract_start_positions(&generator.generate());
    PositionTracker::new(&positions, &rotations).unwrap()
}

/// Benchmark: 1000 single-agent steps.
fn bench_step_single(c: &mut Criterion) {
    let actions = scripted_actions(1, 0);
    let velocity = Vec3::new(0.0, 0.0, 5.0);

    c.bench_function("step_single_1k", |b| {
        b.iter(|| {
            let mut t = tracker_at(Vec3::new(5.0, 1.0, 5.0), Vec3::new(30.0, 1.0, 30.0), 0.0);
            for _ in 0..1000 {
                t.step(velocity, actions[0]);
            }
            black_box(t.position());
        });
    });
}

/// Benchmark: One batched step across 64 agents.
fn bench_step_batch_64(c: &mut Criterion) {
    let mut tracker = stress_tracker();
    let agents = tracker.agent_count();
    let velocities = vec![Vec3::new(0.5, 0.0, 3.0); agents];
    let actions = scripted_actions(agents, 0);

    c.bench_function("step_batch_64_agents", |b| {
        b.iter(|| {
            tracker.step_batch(&velocities, &actions).unwrap();
            black_box(tracker.heading());
        });
    });
}

/// Benchmark: Build the goal occupancy map and full feature tensor.
fn bench_features(c: &mut Criterion) {
    let tracker = tracker_at(Vec3::new(5.0, 1.0, 5.0), Vec3::new(20.5, 1.0, 17.5), 30.0);

    c.bench_function("occupancy_map", |b| {
        b.iter(|| black_box(tracker.occupancy_map()));
    });
    c.bench_function("features_to_tensor", |b| {
        b.iter(|| black_box(tracker.features().to_tensor()));
    });
}

criterion_group!(
    benches,
    bench_step_single,
    bench_step_batch_64,
    bench_features
);
criterion_main!(benches);
