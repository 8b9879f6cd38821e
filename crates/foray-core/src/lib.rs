//! Core types for the Foray arena harness.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value types shared by scene generation and pose tracking:
//! 3-D vectors, colors, item kinds, discrete actions, start reports,
//! and the error types for each subsystem.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod angle;
pub mod error;
pub mod id;
pub mod item;
pub mod vec3;

pub use action::{Action, Move, Turn};
pub use angle::{deg_to_rad, rad_to_deg};
pub use error::{ActionError, SceneError, SimulatorError, TrackerError};
pub use id::ArenaId;
pub use item::{ItemKind, Rgb, StartPositions, StartRotations};
pub use vec3::Vec3;
