use crate::{tools::scan_ascending, types::VId};
use derive_more::From;

/// The working hypothesis of the search.
///
/// Row `u` holds the target vertices still considered possible images of
/// pattern vertex `u`. Rows stay sorted ascending, which lets the map answer
/// the same adjacency query a graph does; caller-seeded maps must uphold
/// that order and carry one row per pattern vertex.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub struct CandidateMap {
    rows: Vec<Vec<VId>>,
}

impl CandidateMap {
    pub fn new(rows: Vec<Vec<VId>>) -> Self {
        Self { rows }
    }

    /// Builds the maximal map: every pattern vertex may map to every target
    /// vertex.
    pub fn complete(pattern_order: usize, target_order: usize) -> Self {
        Self {
            rows: (0..pattern_order)
                .map(|_| (0..target_order).collect())
                .collect(),
        }
    }

    /// Returns the number of pattern vertices covered by the map.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Returns the live candidates for `pattern_vertex`.
    pub fn candidates(&self, pattern_vertex: VId) -> &[VId] {
        &self.rows[pattern_vertex]
    }

    /// Is `target_vertex` still a live candidate for `pattern_vertex`?
    pub fn permits(&self, pattern_vertex: VId, target_vertex: VId) -> bool {
        scan_ascending(&self.rows[pattern_vertex], |&n| n, target_vertex).is_some()
    }

    /// Returns a copy of the map with `pattern_vertex` pinned to
    /// `target_vertex` alone.
    pub fn pin(&self, pattern_vertex: VId, target_vertex: VId) -> Self {
        let mut rows = self.rows.clone();
        rows[pattern_vertex] = vec![target_vertex];
        Self { rows }
    }

    /// The committed image of `pattern_vertex`, if its candidate set is down
    /// to a singleton.
    pub(crate) fn image(&self, pattern_vertex: VId) -> Option<VId> {
        match *self.rows[pattern_vertex].as_slice() {
            [target_vertex] => Some(target_vertex),
            _ => None,
        }
    }
}
