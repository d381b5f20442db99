//! Command dispatch logic for pathtrace

use std::time::Instant;

use crate::cli::{Cli, Commands};
use pathtrace_core::config::PathtraceConfig;
use pathtrace_core::error::Result;
use tracing::debug;

mod command;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = PathtraceConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Nodes { file } => crate::commands::nodes::execute(ctx.cli, file),
            Commands::Run(args) => crate::commands::run::execute(ctx.cli, ctx.config, args),
            Commands::Path(args) => crate::commands::path::execute(ctx.cli, ctx.config, args),
            Commands::Replay(args) => crate::commands::replay::execute(ctx.cli, ctx.config, args),
            Commands::Config => crate::commands::config::execute(ctx.cli, ctx.config),
        }?;
        debug!(elapsed = ?ctx.start.elapsed(), "command_complete");
        Ok(())
    }
}
