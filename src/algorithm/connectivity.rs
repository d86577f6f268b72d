use std::collections::HashMap;

use log::debug;

use crate::data_structures::DisjointSet;
use crate::graph::{Graph, Vertex, Weight};

/// Connected components of an undirected graph, computed once with union-find
#[derive(Debug, Clone)]
pub struct Components<V>
where
    V: Vertex,
{
    /// Component id of every vertex; ids are dense, starting at 0
    component_of: HashMap<V, usize>,
    count: usize,
}

impl<V> Components<V>
where
    V: Vertex,
{
    /// Groups every vertex of the graph by connectivity
    pub fn build<W, G>(graph: &G) -> Self
    where
        W: Weight,
        G: Graph<V, W>,
    {
        let index: HashMap<&V, usize> = graph
            .vertices()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let mut sets = DisjointSet::new(index.len());
        for (vertex, &i) in &index {
            for (neighbor, _) in graph.neighbors(vertex) {
                if let Some(&j) = index.get(neighbor) {
                    sets.union(i, j);
                }
            }
        }

        let mut ids: HashMap<usize, usize> = HashMap::new();
        let mut component_of = HashMap::with_capacity(index.len());
        for (vertex, &i) in &index {
            let root = sets.find(i);
            let next = ids.len();
            let id = *ids.entry(root).or_insert(next);
            component_of.insert((*vertex).clone(), id);
        }

        debug!(
            "{} vertices form {} connected components",
            component_of.len(),
            sets.set_count()
        );

        Components {
            component_of,
            count: sets.set_count(),
        }
    }

    /// Number of connected components
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Component id of a vertex, or None for a vertex not in the graph
    pub fn component_of(&self, vertex: &V) -> Option<usize> {
        self.component_of.get(vertex).copied()
    }

    /// True if a path joins `a` and `b`. Unknown vertices are connected to nothing.
    pub fn connected(&self, a: &V, b: &V) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}
