pub mod bfs;
pub mod connectivity;
pub mod dijkstra;
pub mod traits;
pub mod traversal;

pub use traits::{Distance, ShortestPathAlgorithm, ShortestPathResult, UnknownSource};
