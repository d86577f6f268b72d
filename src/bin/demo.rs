use std::io::{self, Write};

use undirected_sssp::graph::MutableGraph;
use undirected_sssp::{Dijkstra, ShortestPathAlgorithm, UndirectedGraph};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut graph: UndirectedGraph<String, u32> = UndirectedGraph::new();
    for (u, v, weight) in [
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "C", 2),
        ("B", "D", 5),
        ("C", "D", 1),
    ] {
        graph.add_edge(u.to_string(), v.to_string(), weight)?;
    }

    let source = "A".to_string();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &source)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Distances: {}", result)?;
    for (vertex, distance) in result.sorted_distances() {
        match result.path_to(vertex) {
            Some(path) => writeln!(out, "  {} ({}): {}", vertex, distance, path.join(" -> "))?,
            None => writeln!(out, "  {}: {}", vertex, distance)?,
        }
    }

    Ok(())
}
