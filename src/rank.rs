//! Ranking intersections by a chosen metric.
//!
//! Scores every available node (or every available non-adjacent pair),
//! sorts best first and keeps the top entries. Yield metrics sort
//! descending; fill time sorts ascending since fewer turns is better.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::board::resource::NeedVector;
use crate::board::Board;
use crate::metrics::PairScore;

/// Number of entries kept when the caller does not choose.
pub const DEFAULT_LIMIT: usize = 20;

/// Need for each resource when the caller does not choose.
pub const DEFAULT_NEED: f64 = 10.0;

/// What to score intersections by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Total dots on touched tiles.
    #[default]
    DotCount,
    /// Chance that a roll produces anything.
    HitFrequency,
    /// Expected cards per turn, any kind.
    ResourceRate,
    /// Expected cards per turn summed over resources, counting trades.
    ResourceRateWithTrades,
    /// Turns to collect the need vector.
    ResourceNeeds,
}

/// All metrics in menu order.
pub const ALL_METRICS: [Metric; 5] = [
    Metric::DotCount,
    Metric::HitFrequency,
    Metric::ResourceRate,
    Metric::ResourceRateWithTrades,
    Metric::ResourceNeeds,
];

impl Metric {
    /// Returns the kebab-case name accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Metric::DotCount => "dot-count",
            Metric::HitFrequency => "hit-frequency",
            Metric::ResourceRate => "resource-rate",
            Metric::ResourceRateWithTrades => "resource-rate-with-trades",
            Metric::ResourceNeeds => "resource-needs",
        }
    }

    /// True if smaller scores are better.
    pub const fn lower_is_better(self) -> bool {
        matches!(self, Metric::ResourceNeeds)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a metric name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric '{0}' (expected one of: dot-count, hit-frequency, resource-rate, resource-rate-with-trades, resource-needs)")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        ALL_METRICS
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Ranking options.
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    pub metric: Metric,
    /// Score two-settlement pairs instead of single nodes.
    pub pairwise: bool,
    /// Maximum number of entries returned.
    pub limit: usize,
    /// Targets for `Metric::ResourceNeeds`.
    pub needs: NeedVector,
}

impl Default for RankConfig {
    fn default() -> Self {
        RankConfig {
            metric: Metric::default(),
            pairwise: false,
            limit: DEFAULT_LIMIT,
            needs: NeedVector::splat(DEFAULT_NEED),
        }
    }
}

/// The node or pair a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Placement {
    Single(usize),
    Pair(usize, usize),
}

impl Placement {
    /// Node indices covered by this placement.
    pub fn nodes(&self) -> Vec<usize> {
        match *self {
            Placement::Single(n) => vec![n],
            Placement::Pair(a, b) => vec![a, b],
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Single(n) => write!(f, "{}", n),
            Placement::Pair(a, b) => write!(f, "({}, {})", a, b),
        }
    }
}

/// One row of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked {
    pub placement: Placement,
    pub score: f64,
}

/// Ranks the board's available nodes or pairs under `config`.
///
/// Nodes that are claimed or dead are left out; a pair needs both nodes
/// active. Ties keep index order.
pub fn rank(board: &Board, config: &RankConfig) -> Vec<Ranked> {
    let mut ranked = if config.pairwise {
        score_pairs(board, config)
    } else {
        score_nodes(board, config)
    };

    if config.metric.lower_is_better() {
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    } else {
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
    let candidates = ranked.len();
    ranked.truncate(config.limit);

    debug!(
        metric = %config.metric,
        pairwise = config.pairwise,
        candidates,
        kept = ranked.len(),
        "ranking complete"
    );
    ranked
}

fn score_nodes(board: &Board, config: &RankConfig) -> Vec<Ranked> {
    board
        .node_views()
        .filter(|v| v.node().is_active())
        .map(|v| {
            let score = match config.metric {
                Metric::DotCount => f64::from(v.dot_sum()),
                Metric::HitFrequency => v.hit_frequency(),
                Metric::ResourceRate => v.flow_rate_no_trades(),
                Metric::ResourceRateWithTrades => v.flow_rate().total(),
                Metric::ResourceNeeds => v.fill_rate(&config.needs),
            };
            Ranked {
                placement: Placement::Single(v.index()),
                score,
            }
        })
        .collect()
}

fn score_pairs(board: &Board, config: &RankConfig) -> Vec<Ranked> {
    let scores: Vec<PairScore<f64>> = match config.metric {
        Metric::DotCount => board
            .pairwise_dot_sum()
            .into_iter()
            .map(|p| PairScore {
                nodes: p.nodes,
                score: f64::from(p.score),
            })
            .collect(),
        Metric::HitFrequency => board.pairwise_hit_frequency(),
        Metric::ResourceRate => board.pairwise_flow_rate_no_trades(),
        Metric::ResourceRateWithTrades => board
            .pairwise_flow_rate()
            .into_iter()
            .map(|p| PairScore {
                nodes: p.nodes,
                score: p.score.total(),
            })
            .collect(),
        Metric::ResourceNeeds => board.pairwise_fill_rate(&config.needs),
    };

    let nodes = board.nodes();
    scores
        .into_iter()
        .filter(|p| nodes[p.nodes.0].is_active() && nodes[p.nodes.1].is_active())
        .map(|p| Ranked {
            placement: Placement::Pair(p.nodes.0, p.nodes.1),
            score: p.score,
        })
        .collect()
}
