//! Scene generation parameters.

use foray_core::{ItemKind, SceneError};

/// Parameters for [`generate_scene`](crate::generate_scene).
///
/// Validated before every generation; see [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    /// Number of parallel arenas. Must be at least 1.
    pub n_arenas: u32,
    /// Walls per arena. Zero omits the wall item entirely.
    pub wall_count: u32,
    /// Steps per episode. Must be at least 1.
    pub time_limit: u32,
}

impl SceneConfig {
    /// Default number of arenas.
    pub const DEFAULT_N_ARENAS: u32 = 1;

    /// Default walls per arena.
    pub const DEFAULT_WALL_COUNT: u32 = 7;

    /// Default episode length in steps.
    pub const DEFAULT_TIME_LIMIT: u32 = 1000;

    /// Create a config with explicit values.
    pub fn new(n_arenas: u32, wall_count: u32, time_limit: u32) -> Self {
        Self {
            n_arenas,
            wall_count,
            time_limit,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// [`SceneError::NoArenas`] if `n_arenas == 0`,
    /// [`SceneError::ZeroTimeLimit`] if `time_limit == 0`.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.n_arenas == 0 {
            return Err(SceneError::NoArenas);
        }
        if self.time_limit == 0 {
            return Err(SceneError::ZeroTimeLimit);
        }
        Ok(())
    }

    /// How many objects of `kind` each arena gets.
    pub fn count(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Wall => self.wall_count,
            ItemKind::Agent | ItemKind::GoodGoal | ItemKind::GoodGoalMulti | ItemKind::BadGoal => 1,
        }
    }

    /// Item kinds in the order they are written into each arena.
    ///
    /// Walls sit between the good goal and the remaining goals, and are
    /// left out when `wall_count` is zero.
    pub fn item_order(&self) -> impl Iterator<Item = ItemKind> + '_ {
        [
            ItemKind::Agent,
            ItemKind::GoodGoal,
            ItemKind::Wall,
            ItemKind::GoodGoalMulti,
            ItemKind::BadGoal,
        ]
        .into_iter()
        .filter(|&kind| self.count(kind) > 0)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_N_ARENAS,
            Self::DEFAULT_WALL_COUNT,
            Self::DEFAULT_TIME_LIMIT,
        )
    }
}
