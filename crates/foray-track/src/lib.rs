//! Dead-reckoning pose tracking for the Foray harness.
//!
//! The simulator reports the agent's velocity in the agent's own frame
//! but never its world position after spawn. [`PositionTracker`] turns
//! that stream back into a pose by integrating heading from discrete turn
//! actions and position from yaw-rotated velocity, and derives the
//! goal-relative features a training loop consumes.
//!
//! # Step order
//!
//! 1. Heading: `Turn::Left` subtracts [`TURN_STEP_DEG`], `Turn::Right` adds it.
//! 2. Rotation: velocity is rotated about `y` by the first agent's heading.
//! 3. Integration: position += [`DISTANCE_PER_VELOCITY`] × world velocity.
//! 4. Visited grid: the first agent's floor cell is marked visited.
//!
//! `step` must be called exactly once per simulator step, with the action
//! that produced the velocity. Skipped or reordered calls corrupt the
//! estimate silently; there is no drift correction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod features;
pub mod tracker;

pub use features::{Features, TENSOR_LEN};
pub use tracker::{rotate_yaw, PositionTracker};

/// Heading change per turn action, in degrees.
pub const TURN_STEP_DEG: f64 = 7.0;

/// World distance covered per unit of reported velocity in one step.
///
/// Calibrated to the simulator's fixed physics step.
pub const DISTANCE_PER_VELOCITY: f64 = 0.0595;

/// Value of an unvisited cell in the visited grid.
pub const UNVISITED: f32 = 1.0;

/// Value of a visited cell in the visited grid.
pub const VISITED: f32 = 0.0;
