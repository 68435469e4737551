use crate::{
    graph::WeightedDiGraph,
    matching::{extract_isomorphism, ullman_refine, CandidateMap},
    types::{Isomorphism, VId},
};
use rayon::prelude::*;

/// Depth-first branch and prune over candidate maps.
///
/// `scan_vertex` is the next pattern vertex to pin, scanned in ascending
/// order. Each call performs exactly one neighborhood consistency pass over
/// the map it receives, then branches over the surviving candidates of
/// `scan_vertex`; once every pattern vertex has been scanned, the leaf map
/// goes to extraction. Branches are tried in candidate order and child
/// results concatenated in branch order, so enumeration is deterministic and
/// lexicographic in the pinned images.
pub fn search(
    pattern: &WeightedDiGraph,
    target: &WeightedDiGraph,
    mapping: &CandidateMap,
    scan_vertex: VId,
) -> Vec<Isomorphism> {
    let refined = match ullman_refine(pattern, target, mapping) {
        Some(refined) => refined,
        None => return vec![],
    };
    if scan_vertex >= pattern.order() {
        return extract_isomorphism(pattern, target, &refined)
            .into_iter()
            .collect();
    }
    let branches = refined.candidates(scan_vertex).to_vec();
    if scan_vertex == 0 {
        // Sibling branches share no state, so the root fan-out is handed to
        // rayon; collect preserves branch order. Deeper levels stay
        // sequential.
        branches
            .par_iter()
            .flat_map_iter(|&target_vertex| {
                search(
                    pattern,
                    target,
                    &refined.pin(scan_vertex, target_vertex),
                    scan_vertex + 1,
                )
            })
            .collect()
    } else {
        branches
            .iter()
            .flat_map(|&target_vertex| {
                search(
                    pattern,
                    target,
                    &refined.pin(scan_vertex, target_vertex),
                    scan_vertex + 1,
                )
            })
            .collect()
    }
}
