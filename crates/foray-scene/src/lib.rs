//! Randomized arena scene generation.
//!
//! A [`Scene`] describes what the simulator should place in each of its
//! parallel arenas. [`generate_scene`] samples one from a [`SceneConfig`]
//! using a caller-supplied RNG; [`SceneGenerator`] wraps that with an
//! owned, seedable ChaCha8 stream for reproducible episodes.
//!
//! Item-specific sampling lives in one table, [`Placement::for_kind`],
//! an exhaustive match over [`ItemKind`](foray_core::ItemKind).
//!
//! [`extract_details`] and [`extract_start_positions`] flatten a scene
//! into plain values for logging and for seeding the position tracker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod details;
pub mod generate;
pub mod model;
pub mod placement;

pub use config::SceneConfig;
pub use details::{extract_details, extract_start_positions, ItemDetails, SceneDetails};
pub use generate::{generate_scene, SceneGenerator};
pub use model::{Arena, Item, Scene};
pub use placement::{Placement, WALL_COLOR};
