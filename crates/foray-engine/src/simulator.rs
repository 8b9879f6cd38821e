//! The seam between the harness and an external simulator.

use foray_core::{Action, SimulatorError, Vec3};
use foray_scene::Scene;

/// A simulator the harness can drive in lockstep.
///
/// Velocities are reported in each agent's local frame, one row per
/// agent, in the same order the scene lists arenas.
pub trait Simulator {
    /// Tear down the current episode and lay out `scene`.
    fn reset(&mut self, scene: &Scene) -> Result<(), SimulatorError>;

    /// Apply one action per agent and return the resulting velocities.
    fn step(&mut self, actions: &[Action]) -> Result<Vec<Vec3>, SimulatorError>;
}

impl<S: Simulator + ?Sized> Simulator for Box<S> {
    fn reset(&mut self, scene: &Scene) -> Result<(), SimulatorError> {
        (**self).reset(scene)
    }

    fn step(&mut self, actions: &[Action]) -> Result<Vec<Vec3>, SimulatorError> {
        (**self).step(actions)
    }
}
