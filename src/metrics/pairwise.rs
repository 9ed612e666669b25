//! Two-settlement metrics.
//!
//! A pair is two distinct intersections not joined by a road, since
//! settlements must be at least two roads apart. Each node's own metric is
//! computed once, then combined across the 1359 candidate pairs.

use serde::Serialize;
use tracing::trace;

use super::node::{fill_turns, hit_frequency_of};
use crate::board::resource::{NeedVector, ResourceMap};
use crate::board::topology::{is_adjacent, EDGE_COUNT, NODE_COUNT};
use crate::board::Board;

/// Number of unordered, non-adjacent node pairs on the board.
pub const PAIR_COUNT: usize = NODE_COUNT * (NODE_COUNT - 1) / 2 - EDGE_COUNT;

/// Two node indices, lower first.
pub type NodePair = (usize, usize);

/// A score attached to a candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore<S> {
    pub nodes: NodePair,
    pub score: S,
}

/// All unordered, non-adjacent node pairs `(a, b)` with `a < b`, in
/// lexicographic order.
pub fn candidate_pairs() -> impl Iterator<Item = NodePair> {
    (0..NODE_COUNT)
        .flat_map(|a| (a + 1..NODE_COUNT).map(move |b| (a, b)))
        .filter(|&(a, b)| !is_adjacent(a, b))
}

/// Scores every candidate pair by combining per-node values.
fn combine<T, S, F>(per_node: &[T], mut f: F) -> Vec<PairScore<S>>
where
    F: FnMut(&T, &T) -> S,
{
    let scores: Vec<PairScore<S>> = candidate_pairs()
        .map(|(a, b)| PairScore {
            nodes: (a, b),
            score: f(&per_node[a], &per_node[b]),
        })
        .collect();
    trace!(pairs = scores.len(), "pairwise scores computed");
    scores
}

impl Board {
    /// Sum of both nodes' dot counts.
    pub fn pairwise_dot_sum(&self) -> Vec<PairScore<u32>> {
        let dots: Vec<u32> = self.node_views().map(|v| v.dot_sum()).collect();
        combine(&dots, |a, b| a + b)
    }

    /// Probability that a roll produces at either node; numbers seen by
    /// both nodes count once.
    pub fn pairwise_hit_frequency(&self) -> Vec<PairScore<f64>> {
        let numbers: Vec<Vec<u8>> = self.node_views().map(|v| v.numbers()).collect();
        combine(&numbers, |a, b| hit_frequency_of(a.iter().chain(b).copied()))
    }

    /// Sum of both nodes' untraded flow rates.
    pub fn pairwise_flow_rate_no_trades(&self) -> Vec<PairScore<f64>> {
        let flows: Vec<f64> = self.node_views().map(|v| v.flow_rate_no_trades()).collect();
        combine(&flows, |a, b| a + b)
    }

    /// Per-resource sum of both nodes' traded flow rates.
    pub fn pairwise_flow_rate(&self) -> Vec<PairScore<ResourceMap>> {
        let flows: Vec<ResourceMap> = self.node_views().map(|v| v.flow_rate()).collect();
        combine(&flows, |a, b| *a + *b)
    }

    /// Turns for both nodes together to collect `needs`.
    pub fn pairwise_fill_rate(&self, needs: &NeedVector) -> Vec<PairScore<f64>> {
        self.pairwise_flow_rate()
            .into_iter()
            .map(|p| PairScore {
                nodes: p.nodes,
                score: fill_turns(&p.score, needs),
            })
            .collect()
    }
}
