//! Harness error type.

use foray_core::{SceneError, SimulatorError, TrackerError};
use std::error::Error;
use std::fmt;

/// Errors surfaced by [`LockstepHarness`](crate::LockstepHarness).
#[derive(Clone, Debug, PartialEq)]
pub enum HarnessError {
    /// The scene configuration is invalid.
    Config(SceneError),
    /// The simulator failed to reset or step.
    Simulator(SimulatorError),
    /// The tracker rejected the start report or a step's inputs.
    Tracker(TrackerError),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Simulator(e) => write!(f, "simulator: {e}"),
            Self::Tracker(e) => write!(f, "tracker: {e}"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Simulator(e) => Some(e),
            Self::Tracker(e) => Some(e),
        }
    }
}

impl From<SceneError> for HarnessError {
    fn from(e: SceneError) -> Self {
        Self::Config(e)
    }
}

impl From<SimulatorError> for HarnessError {
    fn from(e: SimulatorError) -> Self {
        Self::Simulator(e)
    }
}

impl From<TrackerError> for HarnessError {
    fn from(e: TrackerError) -> Self {
        Self::Tracker(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_subsystem() {
        let e = HarnessError::from(SimulatorError::Disconnected);
        assert_eq!(e.to_string(), "simulator: simulator disconnected");
        let e = HarnessError::from(SceneError::NoArenas);
        assert_eq!(e.to_string(), "config: scene must contain at least one arena");
    }

    #[test]
    fn source_is_inner_error() {
        let e = HarnessError::from(TrackerError::ShapeMismatch {
            what: "actions",
            expected: 2,
            actual: 3,
        });
        let source = e.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("actions: expected 2 rows, got 3"));
    }
}
