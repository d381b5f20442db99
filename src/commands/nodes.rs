//! `pathtrace nodes` - list candidate start nodes

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use pathtrace_core::error::Result;
use pathtrace_core::records::{header, record_token};

use super::input::load_graph;

/// Execute the nodes command
pub fn execute(cli: &Cli, file: &Path) -> Result<()> {
    let loaded = load_graph(file)?;
    // Declaration order, the order a start-node picker would list them in
    let ids = loaded.document.node_ids();
    let graph = &loaded.graph;

    match cli.format {
        OutputFormat::Human => {
            if ids.is_empty() {
                if !cli.quiet {
                    println!("No nodes found");
                }
            } else {
                for id in &ids {
                    println!("{}", id);
                }
            }
        }
        OutputFormat::Json => {
            let nodes: Vec<serde_json::Value> = ids
                .iter()
                .map(|id| serde_json::json!({ "id": id, "degree": graph.degree(id) }))
                .collect();
            let output = serde_json::json!({
                "count": ids.len(),
                "edges": graph.edge_count(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "nodes",
                    &[
                        ("nodes", ids.len().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ],
                )
            );
            for id in &ids {
                println!("N {} degree={}", record_token(id), graph.degree(id));
            }
        }
    }

    Ok(())
}
