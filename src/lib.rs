//! Catan intersection optimizer library.
//!
//! Exposes the board model, per-node and pairwise yield metrics, ranking,
//! and the board notation for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod metrics;
pub mod protocol;
pub mod rank;

pub use board::{Board, BoardError, NeedVector, ResourceKind, ResourceMap};
pub use rank::{rank, Metric, Placement, RankConfig, Ranked};
