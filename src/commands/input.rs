//! Graph file loading shared by the graph commands

use std::path::Path;
use std::time::Instant;

use pathtrace_core::document::GraphDocument;
use pathtrace_core::error::{PathtraceError, Result};
use pathtrace_core::graph::AdjacencyGraph;
use pathtrace_core::trace_time;

/// A validated graph file and its adjacency form
pub struct LoadedGraph {
    pub document: GraphDocument,
    pub graph: AdjacencyGraph,
}

/// Load, validate and build the adjacency graph for a graph file
pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
    let start = Instant::now();

    let document = GraphDocument::load(path)?;
    document.validate()?;
    let graph = document.to_adjacency();

    trace_time!(start, "load_graph", nodes = graph.node_count());

    Ok(LoadedGraph { document, graph })
}

/// Reject node ids the graph does not declare
pub fn require_node(graph: &AdjacencyGraph, id: &str) -> Result<()> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(PathtraceError::node_not_found(id))
    }
}
