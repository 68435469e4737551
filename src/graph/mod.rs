//! Adjacency list graph types.

pub use digraph::DiGraph;
pub use weighted::WeightedDiGraph;

mod digraph;
mod weighted;
