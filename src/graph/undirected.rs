use std::collections::HashMap;

use log::{trace, warn};

use crate::graph::config::{GraphConfig, ParallelEdges};
use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};

/// An undirected graph implementation using adjacency lists.
///
/// Every edge {u, v} is stored as the two arcs u -> v and v -> u, written
/// together by the same insertion so they always carry the same weight.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Build configuration
    config: GraphConfig,

    /// Arcs for each vertex: vertex -> [(neighbor, weight)]
    adjacency: HashMap<V, Vec<(V, W)>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty graph keeping parallel edges
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates a new empty graph with the given configuration
    pub fn with_config(config: GraphConfig) -> Self {
        UndirectedGraph {
            config,
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from (u, v, weight) triples, stopping at the first invalid edge
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        graph.extend_edges(edges)?;
        Ok(graph)
    }

    /// Inserts every (u, v, weight) triple in order
    pub fn extend_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (from, to, weight) in edges {
            self.add_edge(from, to, weight)?;
        }
        Ok(())
    }

    /// Returns the configuration this graph was built with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Lowers every arc from -> to to at most `weight`
    fn lower_arcs(&mut self, from: &V, to: &V, weight: W) {
        if let Some(arcs) = self.adjacency.get_mut(from) {
            for arc in arcs.iter_mut().filter(|(target, _)| target == to) {
                arc.1 = arc.1.min(weight);
            }
        }
    }
}

impl<V, W> Graph<V, W> for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(arcs) => Box::new(arcs.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for UndirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if weight < W::zero() {
            warn!("rejecting edge {:?} - {:?} with negative weight {:?}", from, to, weight);
            return Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            });
        }

        if self.config.parallel_edges == ParallelEdges::KeepMinimum && self.has_edge(&from, &to) {
            trace!("merging parallel edge {:?} - {:?} ({:?})", from, to, weight);
            self.lower_arcs(&from, &to, weight);
            self.lower_arcs(&to, &from, weight);
            return Ok(());
        }

        trace!("adding edge {:?} - {:?} ({:?})", from, to, weight);
        self.adjacency
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight));
        self.adjacency.entry(to).or_default().push((from, weight));
        self.edge_count += 1;
        Ok(())
    }
}
