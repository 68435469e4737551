use crate::{graph::WeightedDiGraph, matching::CandidateMap, types::Isomorphism};
use std::collections::HashSet;

/// Extracts the at most one isomorphism a fully pinned map commits to.
///
/// Every candidate set must be a singleton and the committed images pairwise
/// distinct; two pattern vertices pinned to one target vertex cannot stand
/// for a walk through distinct vertices. Every pattern arc is then
/// re-checked against the target, weights included, independently of the
/// filtering the search already performed. Any failure yields `None`, not an
/// error: partial maps legitimately reach this point on degenerate inputs.
pub fn extract_isomorphism(
    pattern: &WeightedDiGraph,
    target: &WeightedDiGraph,
    mapping: &CandidateMap,
) -> Option<Isomorphism> {
    let mut iso = Vec::with_capacity(pattern.order());
    let mut images = HashSet::with_capacity(pattern.order());
    for pattern_vertex in 0..pattern.order() {
        let target_vertex = mapping.image(pattern_vertex)?;
        if !images.insert(target_vertex) {
            return None;
        }
        for &(pattern_neighbor, required) in pattern.neighbors(pattern_vertex) {
            let target_neighbor = mapping.image(pattern_neighbor)?;
            if !target.is_adjacent(target_vertex, target_neighbor, required) {
                return None;
            }
        }
        iso.push(target_vertex);
    }
    Some(iso)
}
