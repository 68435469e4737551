use crate::{graph::WeightedDiGraph, types::VId};
use derive_more::From;
use itertools::Itertools;

/// An unweighted directed graph under the adjacency list model.
///
/// Row `i` holds the out-neighbors of vertex `i` and must be sorted in
/// strictly ascending order. Sortedness is a caller precondition: the
/// adjacency queries stop scanning a row as soon as a neighbor index exceeds
/// the one asked about, so an unsorted row corrupts them silently.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct DiGraph {
    rows: Vec<Vec<VId>>,
}

impl DiGraph {
    pub fn new(rows: Vec<Vec<VId>>) -> Self {
        Self { rows }
    }

    /// Returns the number of vertices.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Returns the out-neighbors of `vertex`.
    pub fn neighbors(&self, vertex: VId) -> &[VId] {
        &self.rows[vertex]
    }

    /// Attaches weight `1` to every arc, preserving vertex count and
    /// adjacency order, so the weighted engine can serve unweighted callers.
    pub fn to_weighted(&self) -> WeightedDiGraph {
        WeightedDiGraph::new(
            self.rows
                .iter()
                .map(|row| row.iter().map(|&neighbor| (neighbor, 1)).collect())
                .collect(),
        )
    }
}

impl std::fmt::Display for DiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vertex, row) in self.rows.iter().enumerate() {
            writeln!(f, "{} -> [{}]", vertex, row.iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_weighted_preserves_shape() {
        let graph = DiGraph::from(vec![vec![1, 2], vec![2], vec![]]);
        let weighted = graph.to_weighted();
        assert_eq!(weighted.order(), graph.order());
        assert_eq!(weighted.neighbors(0), &[(1, 1), (2, 1)]);
        assert_eq!(weighted.neighbors(1), &[(2, 1)]);
        assert!(weighted.neighbors(2).is_empty());
    }

    #[test]
    fn test_display() {
        let graph = DiGraph::from(vec![vec![1, 2], vec![]]);
        assert_eq!(graph.to_string(), "0 -> [1, 2]\n1 -> []\n");
    }
}
