use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph file (JSON)
    pub file: PathBuf,

    /// Start node id
    #[arg(long, short)]
    pub start: String,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Target node id
    #[arg(long, short)]
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Delay between steps in milliseconds (overrides config)
    #[arg(long, short)]
    pub interval_ms: Option<u64>,
}
