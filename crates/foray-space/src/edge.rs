//! Edge behavior for grid lookups.

/// How a grid resolves an index that falls outside its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds index maps to the nearest boundary cell.
    Clamp,
    /// Out-of-bounds index is dropped.
    Absorb,
}

impl EdgeBehavior {
    /// Resolve a single axis value against an axis of length `len`.
    ///
    /// Returns `Some(resolved)` or `None` for Absorb out-of-bounds.
    pub fn resolve_axis(self, val: i64, len: u32) -> Option<usize> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return Some(val as usize);
        }
        match self {
            EdgeBehavior::Absorb => None,
            EdgeBehavior::Clamp if n > 0 => Some(val.clamp(0, n - 1) as usize),
            EdgeBehavior::Clamp => None,
        }
    }
}
