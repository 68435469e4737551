use crate::{
    tools::scan_ascending,
    types::{VId, Weight, WeightedEdge},
};
use derive_more::From;
use itertools::Itertools;

/// A weighted directed graph under the adjacency list model.
///
/// Row `i` holds `(neighbor, weight)` pairs sorted in strictly ascending
/// order by neighbor index; `weight` is the capacity the arc offers. The
/// sortedness precondition of `DiGraph` applies here unchanged.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct WeightedDiGraph {
    rows: Vec<Vec<WeightedEdge>>,
}

impl WeightedDiGraph {
    pub fn new(rows: Vec<Vec<WeightedEdge>>) -> Self {
        Self { rows }
    }

    /// Returns the number of vertices.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of arcs leaving `vertex`.
    pub fn out_deg(&self, vertex: VId) -> usize {
        self.rows[vertex].len()
    }

    /// Returns the out-neighbors of `vertex` with the weights they offer.
    pub fn neighbors(&self, vertex: VId) -> &[WeightedEdge] {
        &self.rows[vertex]
    }

    /// Does `vertex` have an arc to `neighbor` of weight at least `required`?
    pub fn is_adjacent(&self, vertex: VId, neighbor: VId, required: Weight) -> bool {
        scan_ascending(&self.rows[vertex], |&(n, _)| n, neighbor)
            .map_or(false, |&(_, weight)| weight >= required)
    }
}

impl std::fmt::Display for WeightedDiGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vertex, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{} -> [{}]",
                vertex,
                row.iter()
                    .map(|&(neighbor, weight)| format!("{}({})", neighbor, weight))
                    .join(", ")
            )?;
        }
        Ok(())
    }
}
