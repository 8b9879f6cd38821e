//! Harness configuration.

use crate::error::HarnessError;
use foray_scene::SceneConfig;

/// Everything needed to start a [`LockstepHarness`](crate::LockstepHarness).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Scene sampling parameters, reused for every episode.
    pub scene: SceneConfig,
    /// Seed for the scene stream.
    pub seed: u64,
}

impl HarnessConfig {
    /// A config sampling `scene` from `seed`.
    pub fn new(scene: SceneConfig, seed: u64) -> Self {
        Self { scene, seed }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), HarnessError> {
        self.scene.validate()?;
        Ok(())
    }
}
