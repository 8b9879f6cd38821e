//! Error types for the Foray harness, organized by subsystem:
//! scene generation, pose tracking, action decoding, and the simulator seam.

use crate::ItemKind;
use std::error::Error;
use std::fmt;

/// Errors from scene configuration and generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// A scene needs at least one arena.
    NoArenas,
    /// Episodes must last at least one step.
    ZeroTimeLimit,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArenas => write!(f, "scene must contain at least one arena"),
            Self::ZeroTimeLimit => write!(f, "arena time limit must be positive"),
        }
    }
}

impl Error for SceneError {}

/// Errors from position tracker construction and batched stepping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrackerError {
    /// The start report lacks a required entry, or the entry is empty.
    MissingStart {
        /// The item kind that was looked up.
        kind: ItemKind,
        /// Which attribute map was searched (`"position"` or `"rotation"`).
        attribute: &'static str,
    },
    /// Input row count does not match the number of tracked agents.
    ShapeMismatch {
        /// What was being matched.
        what: &'static str,
        /// Rows expected.
        expected: usize,
        /// Rows supplied.
        actual: usize,
    },
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart { kind, attribute } => {
                write!(f, "start report has no {attribute} for '{kind}'")
            }
            Self::ShapeMismatch {
                what,
                expected,
                actual,
            } => {
                write!(f, "{what}: expected {expected} rows, got {actual}")
            }
        }
    }
}

impl Error for TrackerError {}

/// Errors decoding the simulator's discrete action codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// Branch 0 code outside `0..=2`.
    InvalidMove {
        /// The rejected code.
        code: u8,
    },
    /// Branch 1 code outside `0..=2`.
    InvalidTurn {
        /// The rejected code.
        code: u8,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove { code } => write!(f, "invalid move code {code}, expected 0..=2"),
            Self::InvalidTurn { code } => write!(f, "invalid turn code {code}, expected 0..=2"),
        }
    }
}

impl Error for ActionError {}

/// Errors reported by a simulator backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulatorError {
    /// The simulator process is gone.
    Disconnected,
    /// The simulator rejected or failed a request.
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "simulator disconnected"),
            Self::Failed { reason } => write!(f, "simulator failed: {reason}"),
        }
    }
}

impl Error for SimulatorError {}
