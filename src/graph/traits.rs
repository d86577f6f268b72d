use std::fmt::Debug;
use std::hash::Hash;

use num_traits::PrimInt;

use crate::Result;

/// Opaque vertex label
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Integer edge weight
pub trait Weight: PrimInt + Debug {}

impl<T> Weight for T where T: PrimInt + Debug {}

/// Trait representing a weighted undirected graph
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges, each counted once
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every known vertex
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the (neighbor, weight) pairs of a vertex.
    /// Unknown vertices have no neighbors.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the edges joining two vertices
    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }

    /// Number of arcs leaving a vertex, parallel edges included
    fn degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).count()
    }
}

/// Trait for growing a graph
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Adds an isolated vertex. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds an undirected edge, creating missing endpoints.
    /// Fails on a negative weight and leaves the graph untouched.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;
}
