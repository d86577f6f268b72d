pub mod config;
pub mod traits;
pub mod undirected;

pub use config::{GraphConfig, ParallelEdges};
pub use traits::{Graph, MutableGraph, Vertex, Weight};
pub use undirected::UndirectedGraph;
