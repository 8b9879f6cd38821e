//! Row-major 2-D grid over the arena floor.

use crate::edge::EdgeBehavior;
use crate::GRID_SIZE;
use foray_core::Vec3;
use smallvec::SmallVec;

/// A grid cell as `(row, col)`.
pub type Cell = (usize, usize);

/// A `rows × cols` grid of `f32` values stored row-major.
///
/// Row index comes from the world `z` axis and column index from `x`,
/// so the cell containing position `p` is `(floor(p.z), floor(p.x))`.
#[derive(Clone, Debug, PartialEq)]
pub struct FloorGrid {
    rows: u32,
    cols: u32,
    cells: Vec<f32>,
}

impl FloorGrid {
    /// A [`GRID_SIZE`]-square grid covering the whole arena floor.
    pub fn arena_floor(fill: f32) -> Self {
        Self {
            rows: GRID_SIZE,
            cols: GRID_SIZE,
            cells: vec![fill; GRID_SIZE as usize * GRID_SIZE as usize],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    /// Row-major index of `cell`, or `None` if it is out of bounds.
    pub fn flat_index(&self, (row, col): Cell) -> Option<usize> {
        if row < self.rows as usize && col < self.cols as usize {
            Some(row * self.cols as usize + col)
        } else {
            None
        }
    }

    /// Value at `cell`.
    pub fn get(&self, cell: Cell) -> Option<f32> {
        self.flat_index(cell).map(|i| self.cells[i])
    }

    /// Set the value at `cell`. Returns `false` if `cell` is out of bounds.
    pub fn set(&mut self, cell: Cell, value: f32) -> bool {
        match self.flat_index(cell) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// The cell containing the ground projection of `pos`.
    ///
    /// Non-finite coordinates never resolve to a cell.
    pub fn cell_at(&self, pos: Vec3, edge: EdgeBehavior) -> Option<Cell> {
        if !pos.x.is_finite() || !pos.z.is_finite() {
            return None;
        }
        let row = edge.resolve_axis(pos.z.floor() as i64, self.rows)?;
        let col = edge.resolve_axis(pos.x.floor() as i64, self.cols)?;
        Some((row, col))
    }

    /// Cells of the square block of half-width `radius` centered on `center`.
    ///
    /// Offsets are resolved per axis with `edge`; clamped duplicates are
    /// collapsed, so a corner block under Clamp yields 4 distinct cells.
    pub fn block(&self, center: Cell, radius: u32, edge: EdgeBehavior) -> SmallVec<[Cell; 9]> {
        let r = i64::from(radius);
        let (cr, cc) = (center.0 as i64, center.1 as i64);
        let mut out: SmallVec<[Cell; 9]> = SmallVec::new();
        for dr in -r..=r {
            let Some(row) = edge.resolve_axis(cr + dr, self.rows) else {
                continue;
            };
            for dc in -r..=r {
                let Some(col) = edge.resolve_axis(cc + dc, self.cols) else {
                    continue;
                };
                if !out.contains(&(row, col)) {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Number of cells holding exactly `value`.
    pub fn count(&self, value: f32) -> usize {
        self.cells.iter().filter(|&&v| v == value).count()
    }
}
