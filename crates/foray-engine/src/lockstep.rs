//! Lockstep (synchronous) harness.
//!
//! [`LockstepHarness`] runs one episode at a time. Each
//! [`step()`](LockstepHarness::step) sends actions to the simulator,
//! integrates the returned velocities into the tracker, and returns the
//! goal features for the new pose. [`reset()`](LockstepHarness::reset)
//! samples the next scene and replaces the tracker wholesale.
//!
//! For a simulator driven elsewhere, [`observe()`](LockstepHarness::observe)
//! feeds already-collected velocities through the same path without
//! touching the simulator.

use std::time::Instant;

use foray_core::{Action, SimulatorError, TrackerError, Vec3};
use foray_scene::{extract_details, extract_start_positions, Scene, SceneDetails, SceneGenerator};
use foray_track::{Features, PositionTracker};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::metrics::StepMetrics;
use crate::simulator::Simulator;

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`LockstepHarness::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// Steps taken this episode, including this one.
    pub tick: u64,
    /// Goal features for the reference agent after this step.
    pub features: Features,
    /// Whether the episode has reached its time limit.
    pub done: bool,
    /// Timing for this step.
    pub metrics: StepMetrics,
}

// ── LockstepHarness ─────────────────────────────────────────────

/// Single-threaded harness advancing a simulator and a tracker together.
///
/// # Example
///
/// ```ignore
/// let mut harness = LockstepHarness::new(config, simulator)?;
/// loop {
///     let result = harness.step(&actions)?;
///     if result.done {
///         harness.reset()?;
///     }
/// }
/// ```
pub struct LockstepHarness<S> {
    generator: SceneGenerator,
    simulator: S,
    scene: Scene,
    tracker: PositionTracker,
    tick: u64,
    episode: u64,
    last_metrics: StepMetrics,
    desynced: bool,
}

impl<S: Simulator> LockstepHarness<S> {
    /// Validate `config`, sample the first scene and start episode 0.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Config`] for an invalid scene config, otherwise
    /// whatever the simulator's reset or tracker construction reports.
    pub fn new(config: HarnessConfig, mut simulator: S) -> Result<Self, HarnessError> {
        config.validate()?;
        let mut generator = SceneGenerator::new(config.scene, config.seed)?;
        let (scene, tracker) = begin_episode(&mut generator, &mut simulator)?;

        tracing::info!(
            seed = config.seed,
            n_arenas = generator.config().n_arenas,
            agents = tracker.agent_count(),
            "harness started"
        );

        Ok(Self {
            generator,
            simulator,
            scene,
            tracker,
            tick: 0,
            episode: 0,
            last_metrics: StepMetrics::default(),
            desynced: false,
        })
    }

    /// Sample the next scene from the stream and start a new episode.
    ///
    /// Returns the features at the new spawn pose.
    ///
    /// On error the harness keeps its scene, tracker, tick and episode
    /// count, but the scene stream has already advanced and the simulator
    /// may have been reset to the new scene. Call `reset()` again before
    /// stepping.
    pub fn reset(&mut self) -> Result<Features, HarnessError> {
        let (scene, tracker) = begin_episode(&mut self.generator, &mut self.simulator)?;
        self.scene = scene;
        self.tracker = tracker;
        self.tick = 0;
        self.episode += 1;
        self.last_metrics = StepMetrics::default();
        self.desynced = false;

        tracing::info!(
            episode = self.episode,
            agent = %self.tracker.position(),
            goal = %self.tracker.goal_start()[0],
            "episode reset"
        );
        Ok(self.tracker.features())
    }

    /// Restart the scene stream from `seed`, then [`reset()`](Self::reset).
    pub fn reset_with_seed(&mut self, seed: u64) -> Result<Features, HarnessError> {
        self.generator.reseed(seed);
        self.reset()
    }

    /// Execute one step: simulator, then tracker, then features.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Tracker`] if `actions` does not hold one action per
    /// tracked agent; the simulator is not stepped in that case.
    /// [`HarnessError::Simulator`] if the simulator fails; tracker and
    /// tick are unchanged.
    ///
    /// A simulator that steps but returns the wrong number of velocity
    /// rows has moved ahead of the tracker. That step fails with
    /// [`SimulatorError::Failed`] and every later `step()` fails the same
    /// way, without calling the simulator, until [`reset()`](Self::reset)
    /// succeeds.
    pub fn step(&mut self, actions: &[Action]) -> Result<StepResult, HarnessError> {
        if self.desynced {
            return Err(SimulatorError::Failed {
                reason: "simulator out of step with tracker; reset required".to_string(),
            }
            .into());
        }
        self.check_actions(actions)?;
        let start = Instant::now();

        let tick = self.tick;
        let velocities = self
            .simulator
            .step(actions)
            .inspect_err(|e| tracing::warn!(tick, error = %e, "simulator step failed"))?;
        let simulator_us = start.elapsed().as_micros() as u64;

        let agents = self.tracker.agent_count();
        if velocities.len() != agents {
            self.desynced = true;
            tracing::warn!(
                tick,
                agents,
                rows = velocities.len(),
                "simulator returned wrong velocity row count"
            );
            return Err(SimulatorError::Failed {
                reason: format!(
                    "simulator returned {} velocity rows for {agents} agents",
                    velocities.len()
                ),
            }
            .into());
        }

        self.advance(&velocities, actions, start, simulator_us)
    }

    /// Integrate a step produced by an externally driven simulator.
    ///
    /// Same bookkeeping as [`step()`](Self::step) without calling
    /// [`Simulator::step`].
    pub fn observe(
        &mut self,
        velocities: &[Vec3],
        actions: &[Action],
    ) -> Result<StepResult, HarnessError> {
        self.check_actions(actions)?;
        self.advance(velocities, actions, Instant::now(), 0)
    }

    fn check_actions(&self, actions: &[Action]) -> Result<(), TrackerError> {
        let agents = self.tracker.agent_count();
        if actions.len() != agents {
            return Err(TrackerError::ShapeMismatch {
                what: "actions",
                expected: agents,
                actual: actions.len(),
            });
        }
        Ok(())
    }

    fn advance(
        &mut self,
        velocities: &[Vec3],
        actions: &[Action],
        start: Instant,
        simulator_us: u64,
    ) -> Result<StepResult, HarnessError> {
        let track_start = Instant::now();
        self.tracker.step_batch(velocities, actions)?;
        let tracker_us = track_start.elapsed().as_micros() as u64;
        self.tick += 1;

        let features_start = Instant::now();
        let features = self.tracker.features();
        let features_us = features_start.elapsed().as_micros() as u64;

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            simulator_us,
            tracker_us,
            features_us,
            visited_cells: self.tracker.visited_count(),
        };
        self.last_metrics = metrics.clone();

        let done = self.tick >= self.time_limit();
        if done {
            tracing::debug!(
                episode = self.episode,
                tick = self.tick,
                visited = metrics.visited_cells,
                "episode reached time limit"
            );
        } else {
            tracing::trace!(
                tick = self.tick,
                distance = features.distance_to_goal,
                angle = features.angle_to_goal,
                "step"
            );
        }

        Ok(StepResult {
            tick: self.tick,
            features,
            done,
            metrics,
        })
    }

    /// The scene for the current episode.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The current scene flattened to plain tuples.
    pub fn details(&self) -> SceneDetails {
        extract_details(&self.scene)
    }

    /// The tracker for the current episode.
    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Steps taken this episode (0 after construction or reset).
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Episodes started since construction; the first is episode 0.
    pub fn episode(&self) -> u64 {
        self.episode
    }

    /// Step limit shared by every arena in the scene.
    pub fn time_limit(&self) -> u64 {
        u64::from(self.generator.config().time_limit)
    }

    /// Metrics from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The wrapped simulator.
    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    /// Mutable access to the wrapped simulator.
    pub fn simulator_mut(&mut self) -> &mut S {
        &mut self.simulator
    }

    /// The seed the scene stream was last started from.
    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }
}

fn begin_episode<S: Simulator>(
    generator: &mut SceneGenerator,
    simulator: &mut S,
) -> Result<(Scene, PositionTracker), HarnessError> {
    let scene = generator.generate();
    simulator.reset(&scene)?;
    let (positions, rotations) = extract_start_positions(&scene);
    let tracker = PositionTracker::new(&positions, &rotations)?;
    Ok((scene, tracker))
}

impl<S> std::fmt::Debug for LockstepHarness<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockstepHarness")
            .field("episode", &self.episode)
            .field("tick", &self.tick)
            .field("desynced", &self.desynced)
            .field("seed", &self.generator.seed())
            .field("arenas", &self.scene.len())
            .finish()
    }
}
