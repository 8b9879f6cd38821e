//! Arena floor grids for the Foray harness.
//!
//! The simulator's arena floor is a 40×40 square in world units. This
//! crate discretizes it into a [`FloorGrid`] of unit cells, with row
//! index taken from the world `z` axis and column index from `x`.
//!
//! Out-of-bounds handling for cell lookups is controlled by
//! [`EdgeBehavior`]: tracking drops off-floor positions (absorb) while
//! feature maps pin neighbourhoods to the border (clamp).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod grid;

pub use edge::EdgeBehavior;
pub use grid::{Cell, FloorGrid};

/// Side length of the arena floor in world units, and of the default grid.
pub const GRID_SIZE: u32 = 40;
