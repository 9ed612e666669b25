//! Intersections and the settlement-distance claim states.

use serde::{Deserialize, Serialize};

use super::topology::{neighbors_of, tiles_of};

/// Availability of an intersection for a new settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Free to build on.
    #[default]
    Active,
    /// Holds a settlement.
    Claimed,
    /// Next to a settlement; can never be built on.
    Dead,
}

/// An intersection. Tiles and neighbours come from the shared topology
/// table; ports are indices into the owning board's port array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub index: usize,
    pub status: NodeStatus,
    pub ports: Vec<usize>,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Node {
            index,
            status: NodeStatus::Active,
            ports: Vec::new(),
        }
    }

    /// Indices of the tiles this node touches.
    pub fn tiles(&self) -> &'static [usize] {
        tiles_of(self.index)
    }

    /// Indices of the nodes one road away.
    pub fn neighbors(&self) -> &'static [usize] {
        neighbors_of(self.index)
    }

    pub fn is_active(&self) -> bool {
        self.status == NodeStatus::Active
    }
}
