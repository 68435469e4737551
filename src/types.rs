//! Various types related to isomorphism matching.

/// The vertex id type.
///
/// Vertices are row indices into their graph, so ids always run `0..order`.
pub type VId = usize;

/// The edge weight type.
pub type Weight = u64;

/// An arc endpoint paired with the weight the arc offers.
pub type WeightedEdge = (VId, Weight);

/// A total assignment of pattern vertices to target vertices.
///
/// Entry `i` is the target vertex standing in for pattern vertex `i`.
pub type Isomorphism = Vec<VId>;
