//! Start-report and tracker fixtures.

use foray_core::{ItemKind, StartPositions, StartRotations, Vec3};
use foray_track::PositionTracker;

/// A single-agent start report with the agent at `agent` facing
/// `heading` degrees and one good goal at `goal`.
pub fn start_report(agent: Vec3, goal: Vec3, heading: f64) -> (StartPositions, StartRotations) {
    let mut positions = StartPositions::new();
    positions.insert(ItemKind::Agent, vec![agent]);
    positions.insert(ItemKind::GoodGoal, vec![goal]);
    let mut rotations = StartRotations::new();
    rotations.insert(ItemKind::Agent, vec![heading]);
    (positions, rotations)
}

/// A tracker built from [`start_report`].
pub fn tracker_at(agent: Vec3, goal: Vec3, heading: f64) -> PositionTracker {
    let (positions, rotations) = start_report(agent, goal, heading);
    PositionTracker::new(&positions, &rotations).expect("fixture start report is complete")
}
