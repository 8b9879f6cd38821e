//! End-to-end lockstep episode example.
//!
//! Demonstrates: build config → LockstepHarness → step with scripted
//! actions → read goal features → reset → repeat.
//!
//! Set `RUST_LOG=foray_engine=debug` to see episode boundaries.

use foray_bench::{reference_config, scripted_actions};
use foray_engine::LockstepHarness;
use foray_test_utils::KinematicSimulator;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Foray Lockstep Example ===\n");

    let mut harness = LockstepHarness::new(reference_config(42), KinematicSimulator::new(4.0))
        .expect("reference config is valid");
    let agents = harness.tracker().agent_count();

    println!("Scene:\n{}", harness.scene());

    for episode in 0..3 {
        println!("Episode {episode}: up to 200 steps");
        let mut total_us = 0u64;
        for tick in 0..200 {
            let result = harness
                .step(&scripted_actions(agents, tick))
                .expect("kinematic simulator never fails");
            total_us += result.metrics.total_us;

            if tick % 50 == 0 || result.done {
                println!(
                    "  tick {:>3}: distance {:>6.2}  angle {:>6.1}°  visited {:>4}",
                    result.tick,
                    result.features.distance_to_goal,
                    result.features.angle_to_goal,
                    result.metrics.visited_cells,
                );
            }
            if result.done {
                break;
            }
        }
        println!(
            "  final pose {} heading {:.1}°, {total_us} µs total\n",
            harness.tracker().position(),
            harness.tracker().heading(),
        );

        harness
            .reset_with_seed(42 + episode + 1)
            .expect("reset with a fresh seed");
    }

    println!("Debug: {harness:?}");
}
