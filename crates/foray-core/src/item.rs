//! Scene item kinds, colors, and the start-report maps built from them.

use crate::Vec3;
use indexmap::IndexMap;
use std::fmt;

/// The kinds of placeable object the harness puts into an arena.
///
/// Names match the simulator's item vocabulary exactly; see
/// [`ItemKind::name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    /// The learning agent.
    Agent,
    /// The reward-bearing goal the agent is trained to reach.
    GoodGoal,
    /// A smaller goal that does not end the episode.
    GoodGoalMulti,
    /// A goal with negative reward.
    BadGoal,
    /// An obstacle placed by the simulator.
    Wall,
}

impl ItemKind {
    /// The simulator's name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Agent => "Agent",
            ItemKind::GoodGoal => "GoodGoal",
            ItemKind::GoodGoalMulti => "GoodGoalMulti",
            ItemKind::BadGoal => "BadGoal",
            ItemKind::Wall => "Wall",
        }
    }

    /// Whether this kind is one of the three goal variants.
    pub fn is_goal(self) -> bool {
        matches!(
            self,
            ItemKind::GoodGoal | ItemKind::GoodGoalMulti | ItemKind::BadGoal
        )
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a plain tuple.
    pub fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Starting positions by item kind, one entry per arena in arena order.
pub type StartPositions = IndexMap<ItemKind, Vec<Vec3>>;

/// Starting headings in degrees by item kind, one entry per arena.
pub type StartRotations = IndexMap<ItemKind, Vec<f64>>;
