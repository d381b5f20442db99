//! `pathtrace run` - compute and print the full trace

use crate::cli::{Cli, GraphArgs, OutputFormat};
use pathtrace_core::config::PathtraceConfig;
use pathtrace_core::error::Result;
use pathtrace_core::format::format_distance;
use pathtrace_core::graph::{compute_shortest_paths, AdjacencyGraph, ShortestPaths};
use pathtrace_core::records::{header, record_token};

use super::input::{load_graph, require_node};

/// Execute the run command
pub fn execute(cli: &Cli, config: &PathtraceConfig, args: &GraphArgs) -> Result<()> {
    let loaded = load_graph(&args.file)?;
    require_node(&loaded.graph, &args.start)?;

    let result = compute_shortest_paths(&loaded.graph, &args.start);

    match cli.format {
        OutputFormat::Human => output_human(cli, config, &loaded.graph, &result),
        OutputFormat::Json => output_json(&loaded.graph, &result)?,
        OutputFormat::Records => output_records(config, &loaded.graph, &result),
    }

    Ok(())
}

fn output_human(
    cli: &Cli,
    config: &PathtraceConfig,
    graph: &AdjacencyGraph,
    result: &ShortestPaths,
) {
    let display = &config.display;

    if !cli.quiet {
        println!(
            "Dijkstra from {} ({} nodes, {} edges)",
            result.start,
            graph.node_count(),
            graph.edge_count()
        );
        println!();
        println!("Steps:");
    }
    if result.trace.is_empty() && !cli.quiet {
        println!("  (none)");
    }
    for (i, step) in result.trace.iter().enumerate() {
        println!(
            "  {}. {} = {} (from {})",
            i + 1,
            step.node,
            format_distance(step.distance, display),
            step.previous
        );
    }

    if !cli.quiet {
        println!();
        println!("Distances:");
    }
    for (node, distance) in &result.distances {
        let via = match result.predecessor(node) {
            Some(prev) => format!(" (from {})", prev),
            None if node == &result.start => " (start)".to_string(),
            None => String::new(),
        };
        println!("  {}: {}{}", node, format_distance(*distance, display), via);
    }
}

fn output_json(graph: &AdjacencyGraph, result: &ShortestPaths) -> Result<()> {
    let output = serde_json::json!({
        "start": result.start,
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
        "trace": result.trace,
        "distances": result.distances,
        "previous": result.previous,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(config: &PathtraceConfig, graph: &AdjacencyGraph, result: &ShortestPaths) {
    let display = &config.display;

    println!(
        "{}",
        header(
            "run",
            &[
                ("start", record_token(&result.start)),
                ("nodes", graph.node_count().to_string()),
                ("edges", graph.edge_count().to_string()),
                ("steps", result.trace.len().to_string()),
            ],
        )
    );

    for (i, step) in result.trace.iter().enumerate() {
        println!(
            "S {} {} {} from={}",
            i + 1,
            record_token(&step.node),
            format_distance(step.distance, display),
            record_token(&step.previous)
        );
    }

    for (node, distance) in &result.distances {
        let from = result
            .predecessor(node)
            .map(|prev| format!(" from={}", record_token(prev)))
            .unwrap_or_default();
        println!(
            "D {} {}{}",
            record_token(node),
            format_distance(*distance, display),
            from
        );
    }
}
