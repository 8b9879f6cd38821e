//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an arena within a scene.
///
/// Arenas are numbered sequentially from zero in generation order and
/// map one-to-one onto the simulator's parallel arena slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(pub u32);

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ArenaId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
