use std::collections::VecDeque;

use log::debug;

use crate::algorithm::traits::admit_source;
use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult, UnknownSource};
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Breadth-first search counting hops; edge weights are ignored
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst {
    unknown_source: UnknownSource,
}

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst::default()
    }

    /// Sets the policy for a source that is not in the graph
    pub fn with_unknown_source(mut self, policy: UnknownSource) -> Self {
        self.unknown_source = policy;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BreadthFirst
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "BreadthFirst"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        admit_source(graph, source, self.unknown_source)?;

        let mut result = ShortestPathResult::seed(graph, source);
        let mut queue = VecDeque::new();
        queue.push_back((source.clone(), W::zero()));

        while let Some((current, hops)) = queue.pop_front() {
            for (neighbor, _) in graph.neighbors(&current) {
                if result.distance(neighbor).is_finite() {
                    continue;
                }
                let next = hops
                    .checked_add(&W::one())
                    .ok_or_else(|| Error::DistanceOverflow(format!("{:?}", current)))?;
                result.distances.insert(neighbor.clone(), Distance::Finite(next));
                result.predecessors.insert(neighbor.clone(), current.clone());
                queue.push_back((neighbor.clone(), next));
            }
        }

        debug!(
            "bfs from {:?} reached {} of {} vertices",
            source,
            result.reachable_count(),
            graph.vertex_count()
        );
        Ok(result)
    }
}
