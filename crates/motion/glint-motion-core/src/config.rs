//! Core configuration for glint-motion-core.

use serde::{Deserialize, Serialize};

/// Configuration for engine sizing.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hints for registration vectors.
    pub initial_counters: usize,
    pub initial_reveal_sets: usize,
    pub initial_layers: usize,

    /// Maximum events to retain per tick before backpressure policy applies.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_counters: 16,
            initial_reveal_sets: 8,
            initial_layers: 8,
            max_events_per_tick: 256,
        }
    }
}
