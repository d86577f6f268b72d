//! Undirected SSSP - single-source shortest paths over weighted undirected graphs
//!
//! Graphs are built incrementally from edge insertions, with endpoints created
//! on first mention, and then queried with Dijkstra's algorithm using a
//! binary-heap frontier with lazy deletion.
//!
//! Edge weights must be non-negative integers. Negative weights are rejected
//! when the edge is inserted rather than silently producing wrong distances.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bfs::BreadthFirst, connectivity::Components, dijkstra::Dijkstra, Distance,
    ShortestPathAlgorithm, ShortestPathResult, UnknownSource,
};
/// Re-export main types for convenient use
pub use graph::{GraphConfig, ParallelEdges, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Negative edge weight {weight} on edge {from} - {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(String),

    #[error("Distance overflow while relaxing edges out of {0}")]
    DistanceOverflow(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
