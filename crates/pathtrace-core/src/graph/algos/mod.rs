//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with a relaxation trace

pub mod dijkstra;

pub use dijkstra::{compute_shortest_paths, HeapEntry, ShortestPaths};
