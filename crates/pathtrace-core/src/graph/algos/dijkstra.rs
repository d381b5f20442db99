use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::types::{Distance, NodeId, StepRecord};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then node id)
///
/// Equal distances fall back to lexicographic node id, which makes the
/// selection order, and with it the trace, fully deterministic.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub distance: Distance,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Outcome of one engine run: final distances, predecessors and the ordered
/// relaxation trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub start: NodeId,
    pub distances: BTreeMap<NodeId, Distance>,
    pub previous: BTreeMap<NodeId, Option<NodeId>>,
    pub trace: Vec<StepRecord>,
}

impl ShortestPaths {
    pub fn distance(&self, node: &str) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    pub fn predecessor(&self, node: &str) -> Option<&NodeId> {
        self.previous.get(node).and_then(|p| p.as_ref())
    }

    /// Number of nodes with a finite distance, the start included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_reachable()).count()
    }

    /// Walk predecessors from `target` back to the start.
    ///
    /// Returns the path start-first, `[start]` for the start itself, and
    /// `None` when `target` is unknown or unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<NodeId>> {
        if !self.distance(target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target.to_string()];
        let mut current = target;
        while current != self.start {
            let parent = self.predecessor(current)?;
            // A chain longer than the table means the predecessors form a cycle
            if path.len() > self.previous.len() {
                return None;
            }
            path.push(parent.clone());
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

/// Working state for a single run; dropped when the run completes
struct DijkstraState {
    distances: BTreeMap<NodeId, Distance>,
    previous: BTreeMap<NodeId, Option<NodeId>>,
    unvisited: BTreeSet<NodeId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    trace: Vec<StepRecord>,
}

impl DijkstraState {
    fn new(graph: &AdjacencyGraph, start: &str) -> Self {
        let mut distances: BTreeMap<NodeId, Distance> = graph
            .nodes()
            .map(|id| (id.clone(), Distance::UNREACHABLE))
            .collect();
        let mut previous: BTreeMap<NodeId, Option<NodeId>> =
            graph.nodes().map(|id| (id.clone(), None)).collect();
        let unvisited: BTreeSet<NodeId> = graph.nodes().cloned().collect();

        distances.insert(start.to_string(), Distance::ZERO);
        previous.insert(start.to_string(), None);

        let mut heap = BinaryHeap::new();
        if unvisited.contains(start) {
            heap.push(Reverse(HeapEntry {
                node_id: start.to_string(),
                distance: Distance::ZERO,
            }));
        }

        Self {
            distances,
            previous,
            unvisited,
            heap,
            trace: Vec::new(),
        }
    }

    /// Pop the unvisited node with the smallest distance, skipping stale
    /// heap entries. `None` once no unvisited node has a finite distance.
    fn select(&mut self) -> Option<(NodeId, Distance)> {
        while let Some(Reverse(HeapEntry { node_id, distance })) = self.heap.pop() {
            if !self.unvisited.contains(&node_id) {
                continue;
            }
            if self.distances.get(&node_id) != Some(&distance) {
                continue;
            }
            return Some((node_id, distance));
        }
        None
    }

    fn relax(&mut self, graph: &AdjacencyGraph, current: &NodeId, base: Distance) {
        for (neighbor, weight) in graph.neighbors(current) {
            if !self.unvisited.contains(neighbor) {
                continue;
            }

            let candidate = base.extend(weight);
            let known = self
                .distances
                .get(neighbor)
                .copied()
                .unwrap_or(Distance::UNREACHABLE);

            if candidate < known {
                self.distances.insert(neighbor.clone(), candidate);
                self.previous.insert(neighbor.clone(), Some(current.clone()));
                self.trace.push(StepRecord {
                    node: neighbor.clone(),
                    distance: candidate,
                    previous: current.clone(),
                });
                self.heap.push(Reverse(HeapEntry {
                    node_id: neighbor.clone(),
                    distance: candidate,
                }));
            }
        }
    }
}

/// Single-source shortest paths over `graph` from `start`, recording every
/// strict distance improvement in order.
///
/// Weights must be finite and non-negative for the distances to be correct.
/// A `start` that is not in the graph yields a vacuous result: `start` at 0,
/// every graph node unreachable, empty trace.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn compute_shortest_paths(graph: &AdjacencyGraph, start: &str) -> ShortestPaths {
    let timer = Instant::now();

    if !graph.contains(start) {
        tracing::warn!(start, "start node is not in the graph");
    }

    let mut state = DijkstraState::new(graph, start);

    while let Some((current, base)) = state.select() {
        tracing::trace!(node = %current, distance = base.value(), "select");
        state.relax(graph, &current, base);
        state.unvisited.remove(&current);
    }

    crate::trace_time!(timer, "compute_shortest_paths", steps = state.trace.len());
    tracing::debug!(
        steps = state.trace.len(),
        unreached = state.unvisited.len(),
        "dijkstra_complete"
    );

    ShortestPaths {
        start: start.to_string(),
        distances: state.distances,
        previous: state.previous,
        trace: state.trace,
    }
}
