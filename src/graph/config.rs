use serde::{Deserialize, Serialize};

/// How repeated insertions of an edge between the same pair are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelEdges {
    /// Every insertion adds a new edge, duplicates included
    #[default]
    Keep,
    /// A repeated pair keeps a single edge carrying the minimum weight seen
    KeepMinimum,
}

/// Configuration for building an undirected graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Policy for parallel edges
    #[serde(default)]
    pub parallel_edges: ParallelEdges,
}

impl GraphConfig {
    /// Creates the default configuration (parallel edges are kept)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for parallel edges
    pub fn with_parallel_edges(mut self, parallel_edges: ParallelEdges) -> Self {
        self.parallel_edges = parallel_edges;
        self
    }
}
