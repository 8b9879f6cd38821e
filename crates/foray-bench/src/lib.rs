//! Benchmark profiles and utilities for the Foray harness.
//!
//! Provides pre-built [`HarnessConfig`] profiles for benchmarks and examples:
//!
//! - [`reference_config`]: 4 arenas, 7 walls, 1000-step episodes
//! - [`stress_config`]: 64 arenas for batched tracker throughput
//! - [`scripted_actions`]: deterministic per-agent action cycle

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use foray_core::{Action, Move, Turn};
use foray_engine::HarnessConfig;
use foray_scene::SceneConfig;

/// Arena count of [`reference_config`].
pub const REFERENCE_ARENAS: u32 = 4;

/// Arena count of [`stress_config`].
pub const STRESS_ARENAS: u32 = 64;

/// Build the reference profile: 4 arenas with the default wall count and
/// time limit.
pub fn reference_config(seed: u64) -> HarnessConfig {
    HarnessConfig::new(
        SceneConfig::new(
            REFERENCE_ARENAS,
            SceneConfig::DEFAULT_WALL_COUNT,
            SceneConfig::DEFAULT_TIME_LIMIT,
        ),
        seed,
    )
}

/// Build the stress profile: same as [`reference_config`] at 16x the
/// arena count.
pub fn stress_config(seed: u64) -> HarnessConfig {
    HarnessConfig::new(
        SceneConfig::new(
            STRESS_ARENAS,
            SceneConfig::DEFAULT_WALL_COUNT,
            SceneConfig::DEFAULT_TIME_LIMIT,
        ),
        seed,
    )
}

const CYCLE: [Action; 6] = [
    Action::new(Move::Forward, Turn::None),
    Action::new(Move::Forward, Turn::None),
    Action::new(Move::Forward, Turn::Left),
    Action::new(Move::Stay, Turn::Right),
    Action::new(Move::Backward, Turn::None),
    Action::new(Move::Forward, Turn::Right),
];

/// One action per agent for `tick`, cycling through a fixed pattern
/// offset by agent index.
pub fn scripted_actions(agents: usize, tick: u64) -> Vec<Action> {
    (0..agents)
        .map(|i| CYCLE[(tick as usize + i) % CYCLE.len()])
        .collect()
}
