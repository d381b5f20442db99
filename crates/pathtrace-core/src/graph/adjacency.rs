use std::collections::BTreeMap;

use crate::graph::types::{EdgeSpec, NodeId};

/// Undirected weighted graph in adjacency form.
///
/// Both maps are ordered so every iteration (node list, neighbor list) runs
/// in lexicographic node-id order. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

/// Build the adjacency form of a node/edge list.
///
/// Every declared node gets an entry, possibly empty. Each edge contributes
/// `graph[a][b] == graph[b][a] == w`; a later parallel edge between the same
/// pair replaces an earlier one. Edge endpoints that were not declared are
/// skipped (with a warning) rather than creating phantom nodes.
pub fn build_adjacency<'a, N>(nodes: N, edges: &[EdgeSpec]) -> AdjacencyGraph
where
    N: IntoIterator<Item = &'a NodeId>,
{
    let mut adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>> = nodes
        .into_iter()
        .map(|id| (id.clone(), BTreeMap::new()))
        .collect();

    for edge in edges {
        insert_half(&mut adjacency, &edge.source, &edge.target, edge.weight);
        insert_half(&mut adjacency, &edge.target, &edge.source, edge.weight);
    }

    tracing::debug!(
        nodes = adjacency.len(),
        edges = edges.len(),
        "build_adjacency"
    );

    AdjacencyGraph { adjacency }
}

fn insert_half(
    adjacency: &mut BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
    from: &NodeId,
    to: &NodeId,
    weight: f64,
) {
    match adjacency.get_mut(from) {
        Some(neighbors) => {
            neighbors.insert(to.clone(), weight);
        }
        None => {
            tracing::warn!(node = %from, neighbor = %to, "edge references undeclared node, skipping");
        }
    }
}

impl AdjacencyGraph {
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (self-loops count once)
    pub fn edge_count(&self) -> usize {
        let mut halves = 0;
        let mut loops = 0;
        for (id, neighbors) in &self.adjacency {
            halves += neighbors.len();
            if neighbors.contains_key(id) {
                loops += 1;
            }
        }
        (halves - loops) / 2 + loops
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// All node ids, in lexicographic order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Neighbors of `id` with their edge weights, in lexicographic order.
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&NodeId, f64)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n, *w)))
    }

    /// Neighbors of `id` other than `exclude`.
    ///
    /// Used by replay to highlight the edges fanning out of a step's
    /// predecessor without re-highlighting the start node.
    pub fn neighbors_excluding<'a>(
        &'a self,
        id: &str,
        exclude: &'a str,
    ) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|neighbors| neighbors.keys())
            .filter(move |n| n.as_str() != exclude)
    }

    /// Weight of the edge between `a` and `b`, if one exists
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map_or(0, |n| n.len())
    }
}
