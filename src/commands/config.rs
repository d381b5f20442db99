//! `pathtrace config` - show the effective configuration

use crate::cli::{Cli, OutputFormat};
use pathtrace_core::config::PathtraceConfig;
use pathtrace_core::error::Result;
use pathtrace_core::records::{escape_quotes, header, record_token};

/// Execute the config command
pub fn execute(cli: &Cli, config: &PathtraceConfig) -> Result<()> {
    let source = cli
        .config
        .clone()
        .or_else(PathtraceConfig::default_path)
        .filter(|path| path.exists())
        .map(|path| path.display().to_string());

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                match &source {
                    Some(path) => println!("# loaded from {}", path),
                    None => println!("# defaults (no config file found)"),
                }
            }
            print!("{}", config.to_toml()?);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": source,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "config",
                    &[("source", source.as_deref().map_or("-".to_string(), record_token))],
                )
            );
            println!("K display.precision {}", config.display.precision);
            println!(
                "K display.unreachable \"{}\"",
                escape_quotes(&config.display.unreachable)
            );
            println!("K replay.interval_ms {}", config.replay.interval_ms);
        }
    }

    Ok(())
}
