//! Test utilities and mock types for Foray development.
//!
//! Provides simulator stand-ins implementing [`Simulator`] and fixtures
//! for building start reports and trackers at chosen poses.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{start_report, tracker_at};

use std::collections::VecDeque;

use foray_core::{Action, Move, SimulatorError, Vec3};
use foray_engine::Simulator;
use foray_scene::Scene;

/// Scripted implementation of [`Simulator`].
///
/// Each step pops the next queued velocity batch; once the script is
/// exhausted it returns `fallback` for every action. Optionally fails
/// every step after a set number of successful ones.
pub struct MockSimulator {
    script: VecDeque<Vec<Vec3>>,
    fallback: Vec3,
    fail_after: Option<usize>,
    resets: usize,
    steps: usize,
    last_scene: Option<Scene>,
    last_actions: Vec<Action>,
}

impl MockSimulator {
    pub fn new(fallback: Vec3) -> Self {
        Self {
            script: VecDeque::new(),
            fallback,
            fail_after: None,
            resets: 0,
            steps: 0,
            last_scene: None,
            last_actions: Vec::new(),
        }
    }

    /// Queue one step's velocity rows.
    pub fn push_step(&mut self, velocities: Vec<Vec3>) {
        self.script.push_back(velocities);
    }

    /// Fail every step once `succeed_count` steps have succeeded.
    pub fn fail_after(mut self, succeed_count: usize) -> Self {
        self.fail_after = Some(succeed_count);
        self
    }

    /// How many times `reset()` has been called.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// How many steps have succeeded.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The scene passed to the most recent `reset()`.
    pub fn last_scene(&self) -> Option<&Scene> {
        self.last_scene.as_ref()
    }

    /// The actions passed to the most recent `step()`.
    pub fn last_actions(&self) -> &[Action] {
        &self.last_actions
    }
}

impl Default for MockSimulator {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Simulator for MockSimulator {
    fn reset(&mut self, scene: &Scene) -> Result<(), SimulatorError> {
        self.resets += 1;
        self.last_scene = Some(scene.clone());
        Ok(())
    }

    fn step(&mut self, actions: &[Action]) -> Result<Vec<Vec3>, SimulatorError> {
        self.last_actions = actions.to_vec();
        if self.fail_after.is_some_and(|n| self.steps >= n) {
            return Err(SimulatorError::Failed {
                reason: format!("deliberate failure after {} successful steps", self.steps),
            });
        }
        self.steps += 1;
        Ok(self
            .script
            .pop_front()
            .unwrap_or_else(|| vec![self.fallback; actions.len()]))
    }
}

/// [`Simulator`] that reports a fixed local speed along `z` for
/// `Move::Forward`, its negation for `Move::Backward`, and zero otherwise.
///
/// With this simulator the tracked pose is exact, which makes it useful
/// for end-to-end checks and the runnable examples.
pub struct KinematicSimulator {
    speed: f64,
    resets: usize,
}

impl KinematicSimulator {
    pub fn new(speed: f64) -> Self {
        Self { speed, resets: 0 }
    }

    /// Local speed reported for a forward step.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Simulator for KinematicSimulator {
    fn reset(&mut self, _scene: &Scene) -> Result<(), SimulatorError> {
        self.resets += 1;
        Ok(())
    }

    fn step(&mut self, actions: &[Action]) -> Result<Vec<Vec3>, SimulatorError> {
        Ok(actions
            .iter()
            .map(|a| match a.movement {
                Move::Stay => Vec3::ZERO,
                Move::Forward => Vec3::new(0.0, 0.0, self.speed),
                Move::Backward => Vec3::new(0.0, 0.0, -self.speed),
            })
            .collect())
    }
}
