//! Graph model and shortest-path computation
//!
//! - `adjacency`: undirected weighted adjacency built from a node/edge list
//! - `algos`: Dijkstra with a replayable step trace
//! - `types`: node ids, distances, edges and step records

pub mod adjacency;
pub mod algos;
pub mod types;

pub use adjacency::{build_adjacency, AdjacencyGraph};
pub use algos::{compute_shortest_paths, ShortestPaths};
pub use types::{Distance, EdgeSpec, NodeId, StepRecord};
