//! CLI argument parsing for pathtrace
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GraphArgs, PathArgs, ReplayArgs};
use parse::parse_output_format;
pub use pathtrace_core::format::OutputFormat;

/// Pathtrace - step-by-step Dijkstra shortest paths for teaching
#[derive(Parser, Debug)]
#[command(name = "pathtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `pathtrace_core=trace`)
    #[arg(long, global = true, env = "PATHTRACE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the node ids of a graph file (candidate start nodes)
    Nodes {
        /// Graph file (JSON)
        file: PathBuf,
    },

    /// Run Dijkstra and print the step trace, distances and predecessors
    Run(GraphArgs),

    /// Print the shortest path between two nodes
    Path(PathArgs),

    /// Replay the step trace one frame at a time
    Replay(ReplayArgs),

    /// Show the effective configuration
    Config,
}
