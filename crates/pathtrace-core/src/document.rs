//! Graph file model
//!
//! The graph file is JSON:
//!
//! ```json
//! { "nodes": [ {"id": "A"}, {"id": 2} ],
//!   "edges": [ {"source": "A", "target": 2, "weight": 1.5} ] }
//! ```
//!
//! Node ids may be strings or numbers. Numbers are normalised to their
//! shortest decimal form, so `2` and `2.0` both become `"2"`. Unknown fields (layout coordinates, labels) are ignored.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::bail_graph;
use crate::error::{PathtraceError, Result};
use crate::graph::{build_adjacency, AdjacencyGraph, EdgeSpec, NodeId};

/// Node id as it may appear in a graph file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<RawNodeId> for NodeId {
    fn from(raw: RawNodeId) -> Self {
        match raw {
            RawNodeId::Text(s) => s,
            RawNodeId::Signed(n) => n.to_string(),
            RawNodeId::Unsigned(n) => n.to_string(),
            RawNodeId::Float(n) => n.to_string(),
        }
    }
}

fn node_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<NodeId, D::Error> {
    RawNodeId::deserialize(deserializer)
        .map(NodeId::from)
        .map_err(|_| serde::de::Error::custom("node id must be a string or a number"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(deserialize_with = "node_id")]
    pub id: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    #[serde(deserialize_with = "node_id")]
    pub source: NodeId,
    #[serde(deserialize_with = "node_id")]
    pub target: NodeId,
    pub weight: f64,
}

/// Parsed graph file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeEntry>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

impl GraphDocument {
    /// Build a document from plain node ids and edges
    pub fn from_parts<I, S>(nodes: I, edges: Vec<EdgeSpec>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        Self {
            nodes: nodes
                .into_iter()
                .map(|id| NodeEntry { id: id.into() })
                .collect(),
            edges: edges
                .into_iter()
                .map(|e| EdgeEntry {
                    source: e.source,
                    target: e.target,
                    weight: e.weight,
                })
                .collect(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a graph file. Does not validate.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PathtraceError::GraphFileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let document = Self::from_json_str(&content).map_err(|e| match e {
            PathtraceError::Json(err) => {
                PathtraceError::invalid_graph(format!("{}: {}", path.display(), err))
            }
            other => other,
        })?;
        tracing::debug!(
            path = %path.display(),
            nodes = document.nodes.len(),
            edges = document.edges.len(),
            "load_graph"
        );
        Ok(document)
    }

    /// Check the caller-side input contract: unique node ids, edges that
    /// reference declared nodes, no self-loops, finite non-negative weights.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                bail_graph!("duplicate node id '{}'", node.id);
            }
        }

        for (i, edge) in self.edges.iter().enumerate() {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint.as_str()) {
                    bail_graph!("edge {} references unknown node '{}'", i, endpoint);
                }
            }
            if edge.source == edge.target {
                bail_graph!("edge {} is a self-loop on '{}'", i, edge.source);
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                bail_graph!(
                    "edge {} ({} - {}) has invalid weight {}",
                    i,
                    edge.source,
                    edge.target,
                    edge.weight
                );
            }
        }

        Ok(())
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn edge_specs(&self) -> Vec<EdgeSpec> {
        self.edges
            .iter()
            .map(|e| EdgeSpec::new(e.source.clone(), e.target.clone(), e.weight))
            .collect()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn to_adjacency(&self) -> AdjacencyGraph {
        let ids = self.node_ids();
        build_adjacency(&ids, &self.edge_specs())
    }
}
