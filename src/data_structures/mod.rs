pub mod disjoint_set;
pub mod frontier;

pub use disjoint_set::DisjointSet;
pub use frontier::Frontier;
