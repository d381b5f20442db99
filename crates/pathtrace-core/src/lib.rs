//! Pathtrace Core Library
//!
//! Builds an undirected weighted graph, runs Dijkstra from a start node and
//! records every distance improvement as an ordered, replayable trace.

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod replay;

pub use graph::{
    build_adjacency, compute_shortest_paths, AdjacencyGraph, Distance, EdgeSpec, NodeId,
    ShortestPaths, StepRecord,
};
pub use replay::{ReplayCursor, ReplayFrame};
