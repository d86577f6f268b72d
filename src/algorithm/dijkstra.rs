use std::collections::HashMap;

use log::debug;

use crate::algorithm::traits::admit_source;
use crate::algorithm::{Distance, ShortestPathAlgorithm, ShortestPathResult, UnknownSource};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    unknown_source: UnknownSource,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance that rejects unknown sources
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Sets the policy for a source that is not in the graph
    pub fn with_unknown_source(mut self, policy: UnknownSource) -> Self {
        self.unknown_source = policy;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        admit_source(graph, source, self.unknown_source)?;
        debug!(
            "dijkstra from {:?} over {} vertices and {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        let mut result = ShortestPathResult::seed(graph, source);
        let mut frontier = Frontier::with_capacity(graph.vertex_count());
        frontier.push(source.clone(), W::zero());

        let mut settled = 0usize;
        let mut stale = 0usize;
        // Unreached neighbors whose candidate overflowed, with the vertex relaxed from
        let mut overflowed: HashMap<V, V> = HashMap::new();

        while let Some((current, dist)) = frontier.pop() {
            // A shorter path to current was found after this entry was queued
            let best = result.distances.get(&current).and_then(|d| d.finite());
            if best.is_some_and(|best| best < dist) {
                stale += 1;
                continue;
            }
            settled += 1;

            for (neighbor, weight) in graph.neighbors(&current) {
                let known = result.distances.get(neighbor).and_then(|d| d.finite());
                let candidate = match (dist.checked_add(&weight), known) {
                    (Some(candidate), _) => candidate,
                    // too long to improve a representable distance
                    (None, Some(_)) => continue,
                    // another route may still fit, decided once the frontier is empty
                    (None, None) => {
                        overflowed
                            .entry(neighbor.clone())
                            .or_insert_with(|| current.clone());
                        continue;
                    }
                };

                if known.map_or(true, |known| candidate < known) {
                    result
                        .distances
                        .insert(neighbor.clone(), Distance::Finite(candidate));
                    result
                        .predecessors
                        .insert(neighbor.clone(), current.clone());
                    frontier.push(neighbor.clone(), candidate);
                }
            }
        }

        if let Some((_, from)) = overflowed
            .iter()
            .find(|(vertex, _)| !result.is_reachable(vertex))
        {
            return Err(Error::DistanceOverflow(format!("{:?}", from)));
        }

        debug!(
            "dijkstra from {:?} settled {} vertices, skipped {} stale entries, {} reachable",
            source,
            settled,
            stale,
            result.reachable_count()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MutableGraph, UndirectedGraph};

    fn sample() -> UndirectedGraph<&'static str, u32> {
        UndirectedGraph::from_edges(vec![
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 1),
        ])
        .unwrap()
    }

    #[test]
    fn finds_indirect_shorter_paths() {
        let graph = sample();
        let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

        assert_eq!(result.distance(&"A"), Distance::Finite(0));
        assert_eq!(result.distance(&"B"), Distance::Finite(1));
        assert_eq!(result.distance(&"C"), Distance::Finite(3));
        assert_eq!(result.distance(&"D"), Distance::Finite(4));
        assert_eq!(result.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
        assert!(result.predecessor(&"A").is_none());
    }

    #[test]
    fn unknown_source_is_rejected_by_default() {
        let graph = sample();
        let err = Dijkstra::new()
            .compute_shortest_paths(&graph, &"Q")
            .unwrap_err();
        assert_eq!(err, Error::SourceNotFound("\"Q\"".to_string()));
    }

    #[test]
    fn unknown_source_can_be_treated_as_isolated() {
        let graph = sample();
        let dijkstra = Dijkstra::new().with_unknown_source(UnknownSource::Isolated);
        let result = dijkstra.compute_shortest_paths(&graph, &"Q").unwrap();

        assert_eq!(result.distances.len(), 5);
        assert_eq!(result.distance(&"Q"), Distance::Finite(0));
        for v in ["A", "B", "C", "D"] {
            assert_eq!(result.distance(&v), Distance::Unreachable);
        }
    }

    #[test]
    fn zero_weight_edges_and_self_loops() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("A", "A", 3u32).unwrap();
        graph.add_edge("A", "B", 0).unwrap();
        graph.add_edge("B", "C", 0).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
        assert_eq!(result.distance(&"A"), Distance::Finite(0));
        assert_eq!(result.distance(&"C"), Distance::Finite(0));
        assert!(result.predecessor(&"A").is_none());
    }

    #[test]
    fn overflowing_distance_is_an_error() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(0u8, 1, 200u8).unwrap();
        graph.add_edge(1, 2, 100).unwrap();

        let err = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap_err();
        assert_eq!(err, Error::DistanceOverflow("1".to_string()));
    }

    #[test]
    fn overflowing_arc_does_not_hide_a_representable_route() {
        // 0 -> 1 -> 2 overflows at 300, but 0 -> 3 -> 2 costs 220
        let graph = UndirectedGraph::from_edges(vec![
            (0u8, 1u8, 200u8),
            (1, 2, 100),
            (0, 3, 210),
            (3, 2, 10),
        ])
        .unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
        assert_eq!(result.distance(&1), Distance::Finite(200));
        assert_eq!(result.distance(&2), Distance::Finite(220));
        assert_eq!(result.path_to(&2), Some(vec![0, 3, 2]));
    }

    #[test]
    fn overflow_back_to_a_settled_vertex_is_ignored() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(0u8, 1, 250u8).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &0).unwrap();
        assert_eq!(result.distance(&1), Distance::Finite(250));
    }

    #[test]
    fn stale_entries_do_not_change_the_result() {
        // C is first queued at 10 and then improved to 2 through B
        let graph = UndirectedGraph::from_edges(vec![
            ("A", "C", 10u64),
            ("A", "B", 1),
            ("B", "C", 1),
            ("C", "D", 1),
        ])
        .unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();
        assert_eq!(result.distance(&"C"), Distance::Finite(2));
        assert_eq!(result.distance(&"D"), Distance::Finite(3));
        assert_eq!(result.predecessor(&"C"), Some(&"B"));
    }
}
