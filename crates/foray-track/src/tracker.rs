//! The position tracker.

use crate::features::Features;
use crate::{DISTANCE_PER_VELOCITY, TURN_STEP_DEG, UNVISITED, VISITED};
use foray_core::{
    deg_to_rad, rad_to_deg, Action, ItemKind, StartPositions, StartRotations, TrackerError, Vec3,
};
use foray_space::{EdgeBehavior, FloorGrid};
use indexmap::IndexMap;

fn lookup<'a, T>(
    map: &'a IndexMap<ItemKind, Vec<T>>,
    kind: ItemKind,
    attribute: &'static str,
) -> Result<&'a [T], TrackerError> {
    map.get(&kind)
        .filter(|list| !list.is_empty())
        .map(Vec::as_slice)
        .ok_or(TrackerError::MissingStart { kind, attribute })
}

/// Rotate `v` about the vertical axis by `heading_deg`.
///
/// Uses the matrix `[[cos, 0, -sin], [0, 1, 0], [sin, 0, cos]]`, so a
/// local forward velocity `(0, 0, 1)` maps to the facing vector
/// `(-sin h, 0, cos h)`.
pub fn rotate_yaw(v: Vec3, heading_deg: f64) -> Vec3 {
    let (sin, cos) = deg_to_rad(heading_deg).sin_cos();
    Vec3::new(cos * v.x - sin * v.z, v.y, sin * v.x + cos * v.z)
}

/// Dead-reckoned pose of one or more agents plus a visited-cell grid.
///
/// Row 0 is the reference agent: its heading rotates every velocity
/// row, its position drives the visited grid, and goal features are
/// measured from it against the first good goal.
#[derive(Clone, Debug)]
pub struct PositionTracker {
    agent_start: Vec<Vec3>,
    good_goal_start: Vec<Vec3>,
    current_position: Vec<Vec3>,
    current_rotation: Vec<f64>,
    visited: FloorGrid,
}

impl PositionTracker {
    /// Start tracking from a start report.
    ///
    /// # Errors
    ///
    /// [`TrackerError::MissingStart`] if `positions` has no non-empty
    /// `Agent` or `GoodGoal` entry, or `rotations` no non-empty `Agent`
    /// entry. [`TrackerError::ShapeMismatch`] if agent headings and
    /// agent positions differ in count.
    pub fn new(
        positions: &StartPositions,
        rotations: &StartRotations,
    ) -> Result<Self, TrackerError> {
        let agent_start = lookup(positions, ItemKind::Agent, "position")?.to_vec();
        let good_goal_start = lookup(positions, ItemKind::GoodGoal, "position")?.to_vec();
        let headings = lookup(rotations, ItemKind::Agent, "rotation")?.to_vec();

        if headings.len() != agent_start.len() {
            return Err(TrackerError::ShapeMismatch {
                what: "agent rotations",
                expected: agent_start.len(),
                actual: headings.len(),
            });
        }

        tracing::debug!(
            agents = agent_start.len(),
            agent = %agent_start[0],
            goal = %good_goal_start[0],
            heading = headings[0],
            "position tracker started"
        );

        Ok(Self {
            current_position: agent_start.clone(),
            current_rotation: headings,
            agent_start,
            good_goal_start,
            visited: FloorGrid::arena_floor(UNVISITED),
        })
    }

    /// Advance one step from a single velocity vector and action.
    ///
    /// The turn applies to the reference agent only. The rotated velocity
    /// is added to every tracked row.
    pub fn step(&mut self, velocity: Vec3, action: Action) {
        self.current_rotation[0] += action.turn.heading_delta(TURN_STEP_DEG);
        let delta = self.world_delta(velocity);
        for pos in &mut self.current_position {
            *pos += delta;
        }
        self.mark_visited();
    }

    /// Advance one step from one velocity row and one action per agent.
    ///
    /// Row `i` turns by `actions[i]`; every row's velocity is rotated by
    /// the reference agent's (updated) heading.
    ///
    /// # Errors
    ///
    /// [`TrackerError::ShapeMismatch`] if either slice length differs
    /// from the number of tracked agents. State is unchanged on error.
    pub fn step_batch(
        &mut self,
        velocities: &[Vec3],
        actions: &[Action],
    ) -> Result<(), TrackerError> {
        let agents = self.current_position.len();
        if actions.len() != agents {
            return Err(TrackerError::ShapeMismatch {
                what: "actions",
                expected: agents,
                actual: actions.len(),
            });
        }
        if velocities.len() != agents {
            return Err(TrackerError::ShapeMismatch {
                what: "velocities",
                expected: agents,
                actual: velocities.len(),
            });
        }

        for (heading, action) in self.current_rotation.iter_mut().zip(actions) {
            *heading += action.turn.heading_delta(TURN_STEP_DEG);
        }
        let heading = self.current_rotation[0];
        for (pos, &velocity) in self.current_position.iter_mut().zip(velocities) {
            *pos += rotate_yaw(velocity, heading) * DISTANCE_PER_VELOCITY;
        }
        self.mark_visited();
        Ok(())
    }

    fn world_delta(&self, velocity: Vec3) -> Vec3 {
        rotate_yaw(velocity, self.current_rotation[0]) * DISTANCE_PER_VELOCITY
    }

    fn mark_visited(&mut self) {
        let pos = self.current_position[0];
        match self.visited.cell_at(pos, EdgeBehavior::Absorb) {
            Some(cell) => {
                self.visited.set(cell, VISITED);
            }
            None => tracing::trace!(position = %pos, "agent off floor grid"),
        }
    }

    /// Euclidean distance from the reference agent to the first good goal.
    pub fn distance_to_goal(&self) -> f64 {
        self.current_position[0].distance(self.good_goal_start[0])
    }

    /// Vector from the first good goal to the reference agent.
    pub fn agent_goal_vec(&self) -> Vec3 {
        self.current_position[0] - self.good_goal_start[0]
    }

    /// Unsigned ground-plane angle between facing and goal direction.
    ///
    /// Facing is `(-sin h, cos h)` over `(x, z)`. The result lies in
    /// `[0, 180]` degrees and does not distinguish left from right.
    /// Returns `0.0` when the agent sits exactly on the goal.
    pub fn angle_to_goal(&self) -> f64 {
        let (gx, gz) = (self.good_goal_start[0] - self.current_position[0]).ground();
        let h = deg_to_rad(self.current_rotation[0]);
        let (fx, fz) = (-h.sin(), h.cos());

        let norms = gx.hypot(gz) * fx.hypot(fz);
        if norms == 0.0 {
            return 0.0;
        }
        // Rounding can push an aligned cosine just past ±1.
        let cos = ((gx * fx + gz * fz) / norms).clamp(-1.0, 1.0);
        let deg = rad_to_deg(cos.acos());
        if deg.is_nan() {
            0.0
        } else {
            deg
        }
    }

    /// A fresh floor grid with the 3×3 block around the goal cell set to 1.
    ///
    /// The block is clamped at the grid border. The agent's own cell is
    /// not marked. A goal off the floor yields an all-zero map.
    pub fn occupancy_map(&self) -> FloorGrid {
        let mut map = FloorGrid::arena_floor(0.0);
        if let Some(center) = map.cell_at(self.good_goal_start[0], EdgeBehavior::Absorb) {
            for cell in map.block(center, 1, EdgeBehavior::Clamp) {
                map.set(cell, 1.0);
            }
        }
        map
    }

    /// Distance, angle and occupancy map in one bundle.
    pub fn features(&self) -> Features {
        Features {
            distance_to_goal: self.distance_to_goal(),
            angle_to_goal: self.angle_to_goal(),
            occupancy: self.occupancy_map(),
        }
    }

    /// Reference agent position.
    pub fn position(&self) -> Vec3 {
        self.current_position[0]
    }

    /// Reference agent heading in degrees, unwrapped.
    pub fn heading(&self) -> f64 {
        self.current_rotation[0]
    }

    /// Positions of every tracked agent.
    pub fn positions(&self) -> &[Vec3] {
        &self.current_position
    }

    /// Headings of every tracked agent.
    pub fn headings(&self) -> &[f64] {
        &self.current_rotation
    }

    /// Number of tracked agents.
    pub fn agent_count(&self) -> usize {
        self.current_position.len()
    }

    /// Spawn positions captured at construction.
    pub fn agent_start(&self) -> &[Vec3] {
        &self.agent_start
    }

    /// Good-goal positions captured at construction.
    pub fn goal_start(&self) -> &[Vec3] {
        &self.good_goal_start
    }

    /// The visited grid: [`UNVISITED`] until the reference agent enters a cell.
    pub fn visited(&self) -> &FloorGrid {
        &self.visited
    }

    /// Number of cells marked visited so far.
    pub fn visited_count(&self) -> usize {
        self.visited.count(VISITED)
    }
}
