use std::collections::HashSet;

use crate::graph::{Graph, Vertex, Weight};

/// Vertices reachable from `source` in depth-first pre-order.
///
/// Neighbors are explored in adjacency order. An unknown source yields an
/// empty list.
pub fn depth_first_order<V, W, G>(graph: &G, source: &V) -> Vec<V>
where
    V: Vertex,
    W: Weight,
    G: Graph<V, W>,
{
    if !graph.has_vertex(source) {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut stack = vec![source];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        let mut next: Vec<&V> = graph
            .neighbors(current)
            .map(|(neighbor, _)| neighbor)
            .filter(|neighbor| !visited.contains(neighbor))
            .collect();
        next.reverse();
        stack.extend(next);
    }

    order
}
