//! Board representation.
//!
//! Contains the core data structures for tiles, ports, intersections, the
//! fixed intersection graph, and the overall board.

pub mod node;
pub mod port;
pub mod resource;
pub mod shuffle;
pub mod state;
pub mod tile;
pub mod topology;

pub use node::{Node, NodeStatus};
pub use port::{Port, PortKind, PortSpec, BANK_TRADE_RATIO, DEFAULT_PORT_LAYOUT, PORT_COUNT};
pub use resource::{NeedVector, ResourceKind, ResourceMap, ALL_RESOURCES, RESOURCE_COUNT};
pub use shuffle::{seeded_rng, shuffle};
pub use state::{Board, BoardError, DEFAULT_SEED};
pub use tile::{number_odds, number_to_dots, Tile, TILE_COUNT};
pub use topology::{
    is_adjacent, is_coastal, neighbors_of, nodes_of_tile, tiles_of, NodeConnection, EDGE_COUNT,
    NODE_COUNT, NODE_TOPOLOGY,
};
