//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Top-level configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathtraceConfig {
    /// How distances are rendered
    #[serde(default)]
    pub display: DisplayConfig,

    /// Replay pacing
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Distance rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for finite distances (default 2)
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Marker printed for unreachable nodes (default "∞")
    #[serde(default = "default_unreachable")]
    pub unreachable: String,
}

/// Replay pacing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Delay between replayed steps in milliseconds (default 2000, 0 disables)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

pub const MAX_PRECISION: usize = 12;

fn default_precision() -> usize {
    2
}

fn default_unreachable() -> String {
    "∞".to_string()
}

fn default_interval_ms() -> u64 {
    2000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            precision: default_precision(),
            unreachable: default_unreachable(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            interval_ms: default_interval_ms(),
        }
    }
}
