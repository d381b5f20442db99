//! `pathtrace path` - shortest path between two nodes

use crate::cli::{Cli, OutputFormat, PathArgs};
use pathtrace_core::config::PathtraceConfig;
use pathtrace_core::error::Result;
use pathtrace_core::format::format_distance;
use pathtrace_core::graph::{compute_shortest_paths, Distance};
use pathtrace_core::records::{header, record_token};

use super::input::{load_graph, require_node};

/// Execute the path command
pub fn execute(cli: &Cli, config: &PathtraceConfig, args: &PathArgs) -> Result<()> {
    let from = &args.graph.start;
    let to = &args.to;

    let loaded = load_graph(&args.graph.file)?;
    require_node(&loaded.graph, from)?;
    require_node(&loaded.graph, to)?;

    let result = compute_shortest_paths(&loaded.graph, from);
    let path = result.path_to(to);
    let total = result.distance(to).unwrap_or(Distance::UNREACHABLE);

    // Distance reached at each hop
    let hops: Vec<(&str, Distance)> = path
        .iter()
        .flatten()
        .map(|id| {
            (
                id.as_str(),
                result.distance(id).unwrap_or(Distance::UNREACHABLE),
            )
        })
        .collect();

    let display = &config.display;

    match cli.format {
        OutputFormat::Human => match &path {
            Some(nodes) => {
                println!(
                    "{} (distance {})",
                    nodes.join(" -> "),
                    format_distance(total, display)
                );
                if !cli.quiet {
                    for (i, (id, distance)) in hops.iter().enumerate() {
                        println!("  {}. {} {}", i, id, format_distance(*distance, display));
                    }
                }
            }
            None => {
                if !cli.quiet {
                    println!("No path from {} to {}", from, to);
                }
            }
        },
        OutputFormat::Json => {
            let steps: Vec<serde_json::Value> = hops
                .iter()
                .map(|(id, distance)| serde_json::json!({ "node": id, "distance": distance }))
                .collect();
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "found": path.is_some(),
                "distance": total,
                "path": steps,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "path",
                    &[
                        ("from", record_token(from)),
                        ("to", record_token(to)),
                        ("found", path.is_some().to_string()),
                        ("distance", format_distance(total, display)),
                    ],
                )
            );
            for (i, (id, distance)) in hops.iter().enumerate() {
                println!(
                    "P {} {} {}",
                    i,
                    record_token(id),
                    format_distance(*distance, display)
                );
            }
        }
    }

    Ok(())
}
