//! Goal-relative features for a training loop.

use foray_space::{FloorGrid, GRID_SIZE};

/// Length of [`Features::to_tensor`]: distance, angle, then one value per
/// floor cell.
pub const TENSOR_LEN: usize = 2 + (GRID_SIZE as usize * GRID_SIZE as usize);

/// Snapshot of the reference agent's relation to the first good goal.
#[derive(Clone, Debug, PartialEq)]
pub struct Features {
    /// Euclidean distance in world units.
    pub distance_to_goal: f64,
    /// Unsigned facing-to-goal angle in degrees, `[0, 180]`.
    pub angle_to_goal: f64,
    /// 3×3 goal block on an otherwise zero floor grid.
    pub occupancy: FloorGrid,
}

impl Features {
    /// Flatten into `[distance, angle, occupancy...]` with the occupancy
    /// grid in row-major order.
    pub fn to_tensor(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(2 + self.occupancy.cell_count());
        out.push(self.distance_to_goal as f32);
        out.push(self.angle_to_goal as f32);
        out.extend_from_slice(self.occupancy.as_slice());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tensor_layout() {
        let mut occupancy = FloorGrid::arena_floor(0.0);
        occupancy.set((0, 1), 1.0);
        let f = Features {
            distance_to_goal: 5.0,
            angle_to_goal: 90.0,
            occupancy,
        };
        let t = f.to_tensor();
        assert_eq!(t.len(), TENSOR_LEN);
        assert_eq!(&t[..4], &[5.0, 90.0, 0.0, 1.0]);
        assert_eq!(t.iter().skip(2).filter(|&&v| v == 1.0).count(), 1);
    }
}
