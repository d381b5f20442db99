//! Output format handling for pathtrace
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format, one typed record per line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::PathtraceError;
use crate::graph::Distance;

/// Output format for pathtrace commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = PathtraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(PathtraceError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render a distance for display: fixed decimals, or the unreachable marker.
pub fn format_distance(distance: Distance, display: &DisplayConfig) -> String {
    if distance.is_reachable() {
        format!("{:.*}", display.precision, distance.value())
    } else {
        display.unreachable.clone()
    }
}
