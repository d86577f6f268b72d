use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Shortest distance from the source, or no path at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance<W> {
    /// Total weight of a shortest path
    Finite(W),
    /// No sequence of edges connects the vertex to the source
    Unreachable,
}

impl<W: Copy> Distance<W> {
    /// The distance value, if reachable
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// What a query does when the source is not a vertex of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSource {
    /// Fail with `Error::SourceNotFound`
    #[default]
    Reject,
    /// Treat the source as an isolated vertex at distance 0
    Isolated,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Source vertex
    pub source: V,

    /// Distance from the source for every vertex known to the graph
    pub distances: HashMap<V, Distance<W>>,

    /// Previous vertex on a shortest path, for every reached vertex except the source
    pub predecessors: HashMap<V, V>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Starting state of a query: the source at 0, everything else unreachable
    pub(crate) fn seed<G>(graph: &G, source: &V) -> Self
    where
        G: Graph<V, W>,
    {
        let mut distances: HashMap<V, Distance<W>> = graph
            .vertices()
            .map(|v| (v.clone(), Distance::Unreachable))
            .collect();
        distances.insert(source.clone(), Distance::Finite(W::zero()));

        ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Distance to a vertex; labels unknown to the query are unreachable
    pub fn distance(&self, vertex: &V) -> Distance<W> {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Vertices of a shortest path from the source to `target`, both ends included
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut visited = HashSet::new();
        let mut current = target;
        while *current != self.source {
            if !visited.insert(current) {
                // predecessor chain loops; only possible on a hand-built result
                return None;
            }
            current = self.predecessors.get(current)?;
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }

    /// (vertex, distance) pairs ordered by vertex label
    pub fn sorted_distances(&self) -> Vec<(&V, Distance<W>)>
    where
        V: Ord,
    {
        let mut entries: Vec<_> = self.distances.iter().map(|(v, d)| (v, *d)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<V, W> Display for ShortestPathResult<V, W>
where
    V: Vertex + Ord + Display,
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (vertex, distance)) in self.sorted_distances().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", vertex, distance)?;
        }
        f.write_str("}")
    }
}

/// Applies the unknown-source policy before a query runs
pub(crate) fn admit_source<V, W, G>(graph: &G, source: &V, policy: UnknownSource) -> Result<()>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    if graph.has_vertex(source) || policy == UnknownSource::Isolated {
        Ok(())
    } else {
        Err(Error::SourceNotFound(format!("{:?}", source)))
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        pairs: &[(&'static str, Option<u32>)],
        preds: &[(&'static str, &'static str)],
    ) -> ShortestPathResult<&'static str, u32> {
        ShortestPathResult {
            source: "A",
            distances: pairs.iter().map(|(v, d)| (*v, Distance::from(*d))).collect(),
            predecessors: preds.iter().copied().collect(),
        }
    }

    #[test]
    fn unreachable_orders_after_every_finite_distance() {
        assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(2) < Distance::Finite(3));
        assert_eq!(Distance::<u8>::from(None), Distance::Unreachable);
    }

    #[test]
    fn distance_displays_number_or_unreachable() {
        assert_eq!(Distance::Finite(4).to_string(), "4");
        assert_eq!(Distance::<i32>::Unreachable.to_string(), "unreachable");
    }

    #[test]
    fn distance_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Distance::Finite(7u32)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Distance::<u32>::Unreachable).unwrap(), "null");
        let back: Distance<u32> = serde_json::from_str("null").unwrap();
        assert_eq!(back, Distance::Unreachable);
    }

    #[test]
    fn path_to_follows_predecessors() {
        let r = result(
            &[("A", Some(0)), ("B", Some(1)), ("C", Some(3)), ("Z", None)],
            &[("B", "A"), ("C", "B")],
        );
        assert_eq!(r.path_to(&"C"), Some(vec!["A", "B", "C"]));
        assert_eq!(r.path_to(&"A"), Some(vec!["A"]));
        assert_eq!(r.path_to(&"Z"), None);
        assert_eq!(r.path_to(&"missing"), None);
        assert_eq!(r.reachable_count(), 3);
    }

    #[test]
    fn path_to_rejects_cyclic_predecessors() {
        let r = result(
            &[("A", Some(0)), ("B", Some(1)), ("C", Some(2))],
            &[("B", "C"), ("C", "B")],
        );
        assert_eq!(r.path_to(&"B"), None);
    }

    #[test]
    fn display_sorts_by_label() {
        let r = result(&[("C", Some(3)), ("A", Some(0)), ("B", None)], &[]);
        assert_eq!(r.to_string(), "{A=0, B=unreachable, C=3}");
    }
}
