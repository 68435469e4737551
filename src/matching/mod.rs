//! The matching engine.

pub use extract::extract_isomorphism;
pub use isomorphisms::{all_isomorphisms_for_digraphs, all_isomorphisms_for_weighted_digraphs};
pub use mapping::CandidateMap;
pub use refine::{degree_refine, ullman_refine};
pub use search::search;

mod extract;
mod isomorphisms;
mod mapping;
mod refine;
mod search;
