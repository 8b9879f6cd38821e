//! Integration test: full episodes through the lockstep harness.
//!
//! Uses the shared simulator stand-ins to check that the harness keeps
//! simulator, scene and tracker in step across resets and failures.

use foray_core::{Action, ItemKind, Move, SimulatorError, Turn, Vec3};
use foray_engine::{HarnessConfig, HarnessError, LockstepHarness};
use foray_scene::{extract_start_positions, SceneConfig};
use foray_test_utils::{KinematicSimulator, MockSimulator};
use foray_track::DISTANCE_PER_VELOCITY;
use proptest::prelude::*;

fn config(n_arenas: u32, time_limit: u32, seed: u64) -> HarnessConfig {
    HarnessConfig::new(SceneConfig::new(n_arenas, 3, time_limit), seed)
}

#[test]
fn simulator_sees_every_scene() {
    let mut h = LockstepHarness::new(config(2, 50, 1), MockSimulator::default()).unwrap();
    assert_eq!(h.simulator().last_scene(), Some(h.scene()));

    h.reset().unwrap();
    assert_eq!(h.simulator().resets(), 2);
    assert_eq!(h.simulator().last_scene(), Some(h.scene()));
}

#[test]
fn actions_reach_simulator_unchanged() {
    let mut h = LockstepHarness::new(config(2, 50, 1), MockSimulator::default()).unwrap();
    let actions = [
        Action::new(Move::Forward, Turn::Left),
        Action::new(Move::Backward, Turn::Right),
    ];
    h.step(&actions).unwrap();
    assert_eq!(h.simulator().last_actions(), &actions);
}

#[test]
fn scripted_velocities_drive_tracker() {
    let mut sim = MockSimulator::default();
    sim.push_step(vec![Vec3::new(0.0, 0.0, 10.0)]);
    let mut h = LockstepHarness::new(config(1, 50, 5), sim).unwrap();
    let start = h.tracker().position();

    h.step(&[Action::NOOP]).unwrap();
    let moved = h.tracker().position() - start;
    assert!((moved.z - 10.0 * DISTANCE_PER_VELOCITY).abs() < 1e-12);

    // Script exhausted: fallback is zero velocity.
    h.step(&[Action::NOOP]).unwrap();
    assert_eq!(h.tracker().position() - start, moved);
}

#[test]
fn failure_surfaces_and_episode_survives() {
    let sim = MockSimulator::default().fail_after(2);
    let mut h = LockstepHarness::new(config(1, 50, 5), sim).unwrap();
    h.step(&[Action::NOOP]).unwrap();
    h.step(&[Action::NOOP]).unwrap();

    let err = h.step(&[Action::NOOP]).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Simulator(SimulatorError::Failed { .. })
    ));
    assert_eq!(h.current_tick(), 2);
}

#[test]
fn extra_velocity_rows_desync_until_reset() {
    let v = Vec3::new(0.0, 0.0, 10.0);
    let mut sim = MockSimulator::default();
    sim.push_step(vec![v, v]);
    let mut h = LockstepHarness::new(config(1, 50, 5), sim).unwrap();
    let start = h.tracker().position();

    let err = h.step(&[Action::NOOP]).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Simulator(SimulatorError::Failed { .. })
    ));
    assert_eq!(h.simulator().steps(), 1);
    assert_eq!(h.current_tick(), 0);
    assert_eq!(h.tracker().position(), start);

    // Further steps are refused without reaching the simulator.
    assert!(h.step(&[Action::NOOP]).is_err());
    assert_eq!(h.simulator().steps(), 1);

    h.reset().unwrap();
    assert_eq!(h.step(&[Action::NOOP]).unwrap().tick, 1);
    assert_eq!(h.simulator().steps(), 2);
}

#[test]
fn kinematic_walk_matches_dead_reckoning() {
    let mut h = LockstepHarness::new(config(1, 20, 9), KinematicSimulator::new(4.0)).unwrap();
    assert_eq!(h.simulator().speed(), 4.0);
    let start = h.tracker().position();
    let forward = [Action::new(Move::Forward, Turn::None)];

    let mut last = None;
    for _ in 0..20 {
        last = Some(h.step(&forward).unwrap());
    }
    let last = last.unwrap();
    assert!(last.done);
    assert_eq!(last.tick, 20);

    let travelled = h.tracker().position() - start;
    assert!(travelled.x.abs() < 1e-12);
    assert!((travelled.z - 20.0 * 4.0 * DISTANCE_PER_VELOCITY).abs() < 1e-9);
    assert!(last.metrics.visited_cells >= 1);
}

#[test]
fn tracker_rebuilt_from_new_scene_on_reset() {
    let mut h = LockstepHarness::new(config(3, 50, 2), KinematicSimulator::new(1.0)).unwrap();
    h.step(&[Action::new(Move::Forward, Turn::Right); 3]).unwrap();
    h.reset_with_seed(123).unwrap();

    let (positions, rotations) = extract_start_positions(h.scene());
    assert_eq!(h.tracker().positions(), positions[&ItemKind::Agent].as_slice());
    assert_eq!(h.tracker().headings(), rotations[&ItemKind::Agent].as_slice());
    assert_eq!(
        h.tracker().goal_start(),
        positions[&ItemKind::GoodGoal].as_slice()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn done_exactly_at_time_limit(time_limit in 1u32..40, seed in any::<u64>()) {
        let mut h = LockstepHarness::new(config(1, time_limit, seed), MockSimulator::default())
            .unwrap();
        for tick in 1..=u64::from(time_limit) {
            let r = h.step(&[Action::NOOP]).unwrap();
            prop_assert_eq!(r.tick, tick);
            prop_assert_eq!(r.done, tick == u64::from(time_limit));
        }
    }

    #[test]
    fn features_match_tracker(
        seed in any::<u64>(),
        codes in prop::collection::vec((0u8..3, 0u8..3), 1..30),
    ) {
        let mut h = LockstepHarness::new(config(1, 100, seed), KinematicSimulator::new(3.0))
            .unwrap();
        for (m, t) in codes {
            let action = Action::from_codes([m, t]).unwrap();
            let r = h.step(&[action]).unwrap();
            prop_assert_eq!(&r.features, &h.tracker().features());
            prop_assert_eq!(r.metrics.visited_cells, h.tracker().visited_count());
        }
    }
}
