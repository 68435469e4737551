use crate::{
    graph::{DiGraph, WeightedDiGraph},
    matching::{degree_refine, search, CandidateMap},
    types::Isomorphism,
};
use log::debug;

/// Enumerates every embedding of `pattern` into `target` in which each
/// pattern arc lands on a target arc of at least the required weight.
///
/// `initial` seeds the search in place of the maximal candidate map, which
/// lets callers constrain images up front; a seed is degree-filtered and
/// searched exactly like the default. Returns the empty vector when no
/// embedding exists.
pub fn all_isomorphisms_for_weighted_digraphs(
    pattern: &WeightedDiGraph,
    target: &WeightedDiGraph,
    initial: Option<CandidateMap>,
) -> Vec<Isomorphism> {
    debug!(
        "matching pattern of order {} against target of order {} ({} seed)",
        pattern.order(),
        target.order(),
        if initial.is_some() { "caller" } else { "maximal" },
    );
    let mapping =
        initial.unwrap_or_else(|| CandidateMap::complete(pattern.order(), target.order()));
    let refined = match degree_refine(pattern, target, &mapping) {
        Some(refined) => refined,
        None => return vec![],
    };
    if pattern.order() > target.order() {
        // Pigeonhole: more pattern vertices than available images.
        return vec![];
    }
    search(pattern, target, &refined, 0)
}

/// Enumerates every embedding of an unweighted `pattern` into an unweighted
/// `target`.
///
/// Defined entirely in terms of the weighted engine: both graphs are lifted
/// to unit weight and delegated.
pub fn all_isomorphisms_for_digraphs(
    pattern: &DiGraph,
    target: &DiGraph,
    initial: Option<CandidateMap>,
) -> Vec<Isomorphism> {
    all_isomorphisms_for_weighted_digraphs(&pattern.to_weighted(), &target.to_weighted(), initial)
}
