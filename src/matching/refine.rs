use crate::{graph::WeightedDiGraph, matching::CandidateMap, types::VId};

/// Keeps, for every pattern vertex, only the candidates satisfying `keep`.
///
/// All-or-nothing: a pass that drives any candidate set to empty returns
/// `None`, since no isomorphism is reachable from such a map.
fn refine<F>(mapping: &CandidateMap, keep: F) -> Option<CandidateMap>
where
    F: Fn(VId, VId) -> bool,
{
    let mut rows = Vec::with_capacity(mapping.order());
    for pattern_vertex in 0..mapping.order() {
        let row: Vec<VId> = mapping
            .candidates(pattern_vertex)
            .iter()
            .copied()
            .filter(|&target_vertex| keep(pattern_vertex, target_vertex))
            .collect();
        if row.is_empty() {
            return None;
        }
        rows.push(row);
    }
    Some(CandidateMap::new(rows))
}

/// Prunes candidates that cannot offer enough outgoing arcs.
///
/// An isomorphic image must leave at least as many arcs (by count, not by
/// summed weight) as the pattern vertex it stands in for.
pub fn degree_refine(
    pattern: &WeightedDiGraph,
    target: &WeightedDiGraph,
    mapping: &CandidateMap,
) -> Option<CandidateMap> {
    refine(mapping, |pattern_vertex, target_vertex| {
        pattern.out_deg(pattern_vertex) <= target.out_deg(target_vertex)
    })
}

/// The neighborhood consistency pass.
///
/// Keeps `v` for `u` only if every pattern out-neighbor of `u` can still be
/// matched by some out-neighbor of `v` offering enough weight, where "still"
/// is judged against the map itself treated as an adjacency structure.
pub fn ullman_refine(
    pattern: &WeightedDiGraph,
    target: &WeightedDiGraph,
    mapping: &CandidateMap,
) -> Option<CandidateMap> {
    refine(mapping, |pattern_vertex, target_vertex| {
        pattern
            .neighbors(pattern_vertex)
            .iter()
            .all(|&(pattern_neighbor, required)| {
                target
                    .neighbors(target_vertex)
                    .iter()
                    .any(|&(target_neighbor, weight)| {
                        weight >= required && mapping.permits(pattern_neighbor, target_neighbor)
                    })
            })
    })
}
