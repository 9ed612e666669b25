//! Per-intersection yield metrics.
//!
//! All metrics are pure functions of the board's current tiles and ports;
//! nothing is cached.

use crate::board::port::BANK_TRADE_RATIO;
use crate::board::resource::{NeedVector, ResourceKind, ResourceMap, ALL_RESOURCES};
use crate::board::tile::{number_odds, Tile};
use crate::board::topology::NODE_COUNT;
use crate::board::{Board, Node, PortKind};

/// Flow used in place of zero when dividing a need by a flow rate. Keeps
/// "never fills" large but finite so it still sorts.
pub const ZERO_FLOW_SUBSTITUTE: f64 = 1e-9;

/// Read-only view of one intersection on a board.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    board: &'a Board,
    index: usize,
}

impl<'a> NodeView<'a> {
    pub(crate) fn new(board: &'a Board, index: usize) -> Self {
        assert!(index < NODE_COUNT, "node index {} out of range", index);
        NodeView { board, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn node(&self) -> &'a Node {
        &self.board.nodes()[self.index]
    }

    /// Tiles touched by this node, in topology order.
    pub fn tiles(&self) -> impl Iterator<Item = &'a Tile> + 'a {
        let board = self.board;
        self.node().tiles().iter().map(move |&t| &board.tiles()[t])
    }

    /// Distinct dice numbers on the touched tiles, ascending.
    pub fn numbers(&self) -> Vec<u8> {
        let mut numbers: Vec<u8> = self.tiles().filter_map(|t| t.number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        numbers
    }

    /// Total dots on the touched tiles.
    pub fn dot_sum(&self) -> u32 {
        self.tiles().map(|t| u32::from(t.dots())).sum()
    }

    /// Probability that a roll produces anything here. Two tiles sharing a
    /// number count once.
    pub fn hit_frequency(&self) -> f64 {
        hit_frequency_of(self.numbers())
    }

    /// Expected resource cards per turn, regardless of kind.
    pub fn flow_rate_no_trades(&self) -> f64 {
        self.tiles().map(Tile::odds).sum()
    }

    /// Best bank ratio for trading away `resource` from this node: 2 with a
    /// matching specific port, 3 with a generic port, 4 otherwise.
    pub fn trade_ratio(&self, resource: Option<ResourceKind>) -> u8 {
        self.board
            .port_kinds_at(self.index)
            .filter_map(|kind| match (kind, resource) {
                (PortKind::Generic, _) => Some(3),
                (PortKind::Specific(_), Some(r)) => kind.ratio_for(r),
                (PortKind::Specific(_), None) => None,
            })
            .min()
            .unwrap_or(BANK_TRADE_RATIO)
    }

    /// Expected cards per turn of each resource, counting trades.
    ///
    /// Each tile credits its own resource with its full odds and every other
    /// resource with its odds divided by the ratio at which the tile's
    /// resource can be traded away here.
    pub fn flow_rate(&self) -> ResourceMap {
        let mut flow = ResourceMap::ZERO;
        for tile in self.tiles() {
            let odds = tile.odds();
            let traded = odds / f64::from(self.trade_ratio(tile.resource));
            for r in ALL_RESOURCES {
                flow[r] += if tile.resource == Some(r) { odds } else { traded };
            }
        }
        flow
    }

    /// Turns needed to collect `needs`, limited by the scarcest resource.
    pub fn fill_rate(&self, needs: &NeedVector) -> f64 {
        fill_turns(&self.flow_rate(), needs)
    }
}

/// Sums roll probabilities over `numbers`, counting each distinct number once.
pub fn hit_frequency_of<I>(numbers: I) -> f64
where
    I: IntoIterator<Item = u8>,
{
    let mut seen = [false; 13];
    let mut total = 0.0;
    for n in numbers {
        let odds = number_odds(Some(n));
        if !seen[usize::from(n)] {
            seen[usize::from(n)] = true;
            total += odds;
        }
    }
    total
}

/// Turns for `flow` to accumulate `needs`: the largest per-resource
/// `need / flow`, with zero flow replaced by `ZERO_FLOW_SUBSTITUTE`.
pub fn fill_turns(flow: &ResourceMap, needs: &NeedVector) -> f64 {
    flow.iter()
        .map(|(r, rate)| {
            let rate = if rate == 0.0 { ZERO_FLOW_SUBSTITUTE } else { rate };
            needs[r] / rate
        })
        .fold(0.0, f64::max)
}
