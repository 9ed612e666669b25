//! Yield metrics for intersections and intersection pairs.
//!
//! Single-node metrics live on `NodeView`; pairwise metrics are `Board`
//! methods that combine them over every legal two-settlement pair.

pub(crate) mod node;
pub(crate) mod pairwise;

pub use node::{fill_turns, hit_frequency_of, NodeView, ZERO_FLOW_SUBSTITUTE};
pub use pairwise::{candidate_pairs, NodePair, PairScore, PAIR_COUNT};
