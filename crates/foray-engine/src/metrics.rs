//! Per-step timing for the lockstep harness.

/// Timing and coverage data collected during a single harness step.
///
/// All durations are in microseconds. Steps fed through
/// [`observe`](crate::LockstepHarness::observe) report `simulator_us = 0`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step.
    pub total_us: u64,
    /// Time spent waiting on the simulator.
    pub simulator_us: u64,
    /// Time spent integrating the tracker.
    pub tracker_us: u64,
    /// Time spent computing goal features.
    pub features_us: u64,
    /// Floor cells the reference agent has visited this episode.
    pub visited_cells: usize,
}
