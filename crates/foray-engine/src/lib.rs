//! Lockstep harness for the Foray arena.
//!
//! [`LockstepHarness`] owns one episode at a time: it samples a scene,
//! hands it to a [`Simulator`], seeds a
//! [`PositionTracker`](foray_track::PositionTracker) from the scene's
//! start report, and then advances simulator and tracker together one
//! step per call.
//!
//! The simulator itself is external. Anything that can accept a scene
//! and return per-agent velocities for a batch of actions can implement
//! [`Simulator`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod lockstep;
pub mod metrics;
pub mod simulator;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use lockstep::{LockstepHarness, StepResult};
pub use metrics::StepMetrics;
pub use simulator::Simulator;
