//! Harbours and their trade ratios.
//!
//! A port sits on a rim road and improves the bank trade ratio for both
//! intersections at the ends of that road. Generic ports trade any resource
//! 3:1; specific ports trade one resource 2:1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::resource::{ResourceKind, UnknownResource};

/// The number of ports on the board.
pub const PORT_COUNT: usize = 9;

/// Units given up per unit received when trading with the bank, no port.
pub const BANK_TRADE_RATIO: u8 = 4;

/// What a port accepts in trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortKind {
    /// Any resource at 3:1.
    #[serde(rename = "all")]
    Generic,
    /// A single resource at 2:1.
    Specific(ResourceKind),
}

impl PortKind {
    /// Units of `resource` given up per unit received at this port, or
    /// `None` if the port does not take `resource`.
    pub fn ratio_for(self, resource: ResourceKind) -> Option<u8> {
        match self {
            PortKind::Generic => Some(3),
            PortKind::Specific(r) if r == resource => Some(2),
            PortKind::Specific(_) => None,
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortKind::Generic => f.pad("all"),
            PortKind::Specific(r) => f.pad(r.name()),
        }
    }
}

impl FromStr for PortKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "any" | "generic" => Ok(PortKind::Generic),
            other => other.parse().map(PortKind::Specific),
        }
    }
}

/// A port on the board and the two intersections it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    pub index: usize,
    pub kind: PortKind,
    pub nodes: (usize, usize),
}

impl Port {
    /// Returns true if `node` can use this port.
    pub fn serves(&self, node: usize) -> bool {
        self.nodes.0 == node || self.nodes.1 == node
    }
}

/// A port layout entry: what the port takes and the road it sits on.
pub type PortSpec = (PortKind, (usize, usize));

/// Standard harbour placement, clockwise from the top-left.
pub const DEFAULT_PORT_LAYOUT: [PortSpec; PORT_COUNT] = [
    (PortKind::Generic, (0, 3)),
    (PortKind::Specific(ResourceKind::Grain), (1, 5)),
    (PortKind::Specific(ResourceKind::Ore), (10, 15)),
    (PortKind::Generic, (26, 32)),
    (PortKind::Specific(ResourceKind::Wool), (42, 46)),
    (PortKind::Generic, (49, 52)),
    (PortKind::Generic, (47, 51)),
    (PortKind::Specific(ResourceKind::Brick), (33, 38)),
    (PortKind::Specific(ResourceKind::Lumber), (11, 16)),
];
