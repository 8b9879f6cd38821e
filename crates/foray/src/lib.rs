//! Foray: arena scene generation and dead-reckoning goal features for
//! reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Foray sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use foray::prelude::*;
//!
//! // A simulator that never moves.
//! struct Still;
//! impl Simulator for Still {
//!     fn reset(&mut self, _scene: &Scene) -> Result<(), SimulatorError> {
//!         Ok(())
//!     }
//!     fn step(&mut self, actions: &[Action]) -> Result<Vec<Vec3>, SimulatorError> {
//!         Ok(vec![Vec3::ZERO; actions.len()])
//!     }
//! }
//!
//! let config = HarnessConfig::new(SceneConfig::new(1, 7, 100), 42);
//! let mut harness = LockstepHarness::new(config, Still).unwrap();
//! let result = harness.step(&[Action::new(Move::Stay, Turn::Left)]).unwrap();
//! assert_eq!(result.tick, 1);
//! assert_eq!(harness.tracker().heading(), -7.0);
//! assert!((0.0..=180.0).contains(&result.features.angle_to_goal));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `foray-core` | Vectors, item kinds, actions, start reports, errors |
//! | [`space`] | `foray-space` | Floor grid and edge handling |
//! | [`scene`] | `foray-scene` | Scene model, generation and flattening |
//! | [`track`] | `foray-track` | Position tracker and goal features |
//! | [`engine`] | `foray-engine` | Simulator seam and lockstep harness |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and error types (`foray-core`).
pub use foray_core as types;

/// The 40×40 floor grid (`foray-space`).
///
/// [`space::FloorGrid`] backs both the visited grid and the goal
/// occupancy map.
pub use foray_space as space;

/// Scene model and randomized generation (`foray-scene`).
pub use foray_scene as scene;

/// Dead-reckoning pose tracking (`foray-track`).
///
/// [`track::PositionTracker`] integrates simulator velocities into a pose
/// and derives [`track::Features`] for the first good goal.
pub use foray_track as track;

/// Simulator seam and lockstep harness (`foray-engine`).
pub use foray_engine as engine;

/// Common imports for typical Foray usage.
///
/// ```rust
/// use foray::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use foray_core::{
        Action, ArenaId, ItemKind, Move, Rgb, StartPositions, StartRotations, Turn, Vec3,
    };

    // Errors
    pub use foray_core::{ActionError, SceneError, SimulatorError, TrackerError};

    // Space
    pub use foray_space::{EdgeBehavior, FloorGrid};

    // Scene
    pub use foray_scene::{
        extract_details, extract_start_positions, generate_scene, Scene, SceneConfig,
        SceneGenerator,
    };

    // Tracking
    pub use foray_track::{Features, PositionTracker};

    // Engine
    pub use foray_engine::{
        HarnessConfig, HarnessError, LockstepHarness, Simulator, StepMetrics, StepResult,
    };
}
