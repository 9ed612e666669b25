//! Board state: tile contents, port layout, and intersection claims.
//!
//! The board owns fixed-size arrays of tiles, nodes and ports. The graph
//! connecting them is the shared `NODE_TOPOLOGY` table; nodes refer to
//! tiles, ports and each other by index only.

use rand::RngCore;
use tracing::debug;

use super::node::{Node, NodeStatus};
use super::port::{Port, PortKind, PortSpec, DEFAULT_PORT_LAYOUT, PORT_COUNT};
use super::resource::ResourceKind;
use super::shuffle::{seeded_rng, shuffle};
use super::tile::{is_valid_number, Tile, STANDARD_NUMBERS, STANDARD_RESOURCES, TILE_COUNT};
use super::topology::{is_adjacent, is_coastal, NODE_COUNT};
use crate::metrics::NodeView;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: &str = "PyTN2018";

/// Errors raised by board edits. The board is left unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("tile index {0} out of range (board has 19 tiles)")]
    TileIndexOutOfRange(usize),

    #[error("expected 19 tiles, got {0}")]
    WrongTileCount(usize),

    #[error("tile {tile}: {number} is not a dice number (2-6, 8-12)")]
    InvalidNumber { tile: usize, number: u8 },

    #[error("tile {tile}: desert cannot carry number {number}")]
    DesertWithNumber { tile: usize, number: u8 },

    #[error("tile {tile}: {resource} tile needs a number")]
    MissingNumber { tile: usize, resource: ResourceKind },

    #[error("expected 9 ports, got {0}")]
    WrongPortCount(usize),

    #[error("port {port}: node {node} out of range (board has 54 nodes)")]
    NodeOutOfRange { port: usize, node: usize },

    #[error("port {port}: nodes {a} and {b} are not joined by a road")]
    PortNotOnRoad { port: usize, a: usize, b: usize },

    #[error("port {port}: node {node} is not on the coast")]
    InlandPort { port: usize, node: usize },

    #[error("ports {first} and {second} both sit on road {a}-{b}")]
    OverlappingPorts {
        first: usize,
        second: usize,
        a: usize,
        b: usize,
    },
}

/// A complete board.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
    nodes: Vec<Node>,
    ports: Vec<Port>,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board where every tile is barren, with the default port layout.
    pub fn empty() -> Self {
        Board::with_tiles([Tile::DESERT; TILE_COUNT])
    }

    /// Builds a board from 19 tiles in row-major order, top row first:
    ///
    /// ```text
    ///      00 01 02
    ///    03 04 05 06
    ///  07 08 09 10 11
    ///    12 13 14 15
    ///      16 17 18
    /// ```
    pub fn from_tiles(tiles: &[Tile]) -> Result<Self, BoardError> {
        if tiles.len() != TILE_COUNT {
            return Err(BoardError::WrongTileCount(tiles.len()));
        }
        let mut checked = [Tile::DESERT; TILE_COUNT];
        for (i, tile) in tiles.iter().enumerate() {
            validate_tile(i, tile)?;
            checked[i] = *tile;
        }
        Ok(Board::with_tiles(checked))
    }

    fn with_tiles(tiles: [Tile; TILE_COUNT]) -> Self {
        let mut board = Board {
            tiles,
            nodes: (0..NODE_COUNT).map(Node::new).collect(),
            ports: Vec::with_capacity(PORT_COUNT),
        };
        board.install_ports(&DEFAULT_PORT_LAYOUT);
        board
    }

    /// Generates a standard board. The same seed always yields the same board.
    pub fn random_board(seed: &str) -> Self {
        let board = Board::random_with(&mut seeded_rng(seed));
        debug!(seed, "generated random board");
        board
    }

    /// Generates a standard board from the given RNG.
    ///
    /// Resources and numbers are shuffled separately, paired up, joined by
    /// the desert, then shuffled again onto tile positions.
    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut resources = STANDARD_RESOURCES;
        shuffle(rng, &mut resources);
        let mut numbers = STANDARD_NUMBERS;
        shuffle(rng, &mut numbers);

        let mut layout: Vec<Tile> = resources
            .iter()
            .zip(numbers.iter())
            .map(|(&r, &n)| Tile::new(r, n))
            .collect();
        layout.push(Tile::DESERT);
        shuffle(rng, &mut layout);

        let mut tiles = [Tile::DESERT; TILE_COUNT];
        tiles.copy_from_slice(&layout);
        Board::with_tiles(tiles)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Metric view of node `index`.
    ///
    /// # Panics
    /// If `index >= NODE_COUNT`.
    pub fn node(&self, index: usize) -> NodeView<'_> {
        NodeView::new(self, index)
    }

    /// Metric views of every node, in index order.
    pub fn node_views(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        (0..NODE_COUNT).map(move |i| NodeView::new(self, i))
    }

    /// Replaces the contents of tile `index`.
    pub fn set_tile(
        &mut self,
        index: usize,
        resource: Option<ResourceKind>,
        number: Option<u8>,
    ) -> Result<(), BoardError> {
        if index >= TILE_COUNT {
            return Err(BoardError::TileIndexOutOfRange(index));
        }
        let tile = Tile { resource, number };
        validate_tile(index, &tile)?;
        self.tiles[index] = tile;
        debug!(index, ?resource, ?number, "tile updated");
        Ok(())
    }

    /// Replaces all ports. `layout` must hold exactly nine entries, each on a
    /// distinct rim road.
    pub fn set_port_layout(&mut self, layout: &[PortSpec]) -> Result<(), BoardError> {
        validate_port_layout(layout)?;
        self.install_ports(layout);
        debug!(ports = layout.len(), "port layout updated");
        Ok(())
    }

    fn install_ports(&mut self, layout: &[PortSpec]) {
        for node in &mut self.nodes {
            node.ports.clear();
        }
        self.ports.clear();
        for (i, &(kind, (a, b))) in layout.iter().enumerate() {
            self.ports.push(Port {
                index: i,
                kind,
                nodes: (a, b),
            });
            self.nodes[a].ports.push(i);
            self.nodes[b].ports.push(i);
        }
    }

    /// Kinds of every port serving `node`.
    pub fn port_kinds_at(&self, node: usize) -> impl Iterator<Item = PortKind> + '_ {
        self.nodes[node].ports.iter().map(move |&p| self.ports[p].kind)
    }

    /// Places a settlement on `node` if it is still active, killing its
    /// neighbours. Returns false (and changes nothing) otherwise.
    ///
    /// # Panics
    /// If `node >= NODE_COUNT`.
    pub fn claim(&mut self, node: usize) -> bool {
        if self.nodes[node].status != NodeStatus::Active {
            debug!(node, status = ?self.nodes[node].status, "claim rejected");
            return false;
        }
        self.nodes[node].status = NodeStatus::Claimed;
        for &n in self.nodes[node].neighbors() {
            self.nodes[n].status = NodeStatus::Dead;
        }
        debug!(node, "node claimed");
        true
    }

    /// Returns every node to `Active`.
    pub fn reset_claims(&mut self) {
        for node in &mut self.nodes {
            node.status = NodeStatus::Active;
        }
    }

    /// Returns true if the tiles match a standard board: one desert, the
    /// standard resource counts, and the standard number multiset.
    pub fn has_standard_composition(&self) -> bool {
        let mut resources: Vec<ResourceKind> =
            self.tiles.iter().filter_map(|t| t.resource).collect();
        let mut numbers: Vec<u8> = self.tiles.iter().filter_map(|t| t.number).collect();
        resources.sort();
        numbers.sort();

        let mut expected_resources = STANDARD_RESOURCES.to_vec();
        expected_resources.sort();

        let deserts = self.tiles.iter().filter(|t| t.is_desert()).count();
        deserts == 1 && resources == expected_resources && numbers == STANDARD_NUMBERS
    }
}

fn validate_tile(index: usize, tile: &Tile) -> Result<(), BoardError> {
    match (tile.resource, tile.number) {
        (None, None) => Ok(()),
        (None, Some(number)) => Err(BoardError::DesertWithNumber { tile: index, number }),
        (Some(resource), None) => Err(BoardError::MissingNumber { tile: index, resource }),
        (Some(_), Some(number)) if !is_valid_number(number) => {
            Err(BoardError::InvalidNumber { tile: index, number })
        }
        (Some(_), Some(_)) => Ok(()),
    }
}

fn validate_port_layout(layout: &[PortSpec]) -> Result<(), BoardError> {
    if layout.len() != PORT_COUNT {
        return Err(BoardError::WrongPortCount(layout.len()));
    }
    for (port, &(_, (a, b))) in layout.iter().enumerate() {
        for node in [a, b] {
            if node >= NODE_COUNT {
                return Err(BoardError::NodeOutOfRange { port, node });
            }
        }
        if a == b || !is_adjacent(a, b) {
            return Err(BoardError::PortNotOnRoad { port, a, b });
        }
        for node in [a, b] {
            if !is_coastal(node) {
                return Err(BoardError::InlandPort { port, node });
            }
        }
        let edge = (a.min(b), a.max(b));
        for (first, &(_, (x, y))) in layout[..port].iter().enumerate() {
            if (x.min(y), x.max(y)) == edge {
                return Err(BoardError::OverlappingPorts {
                    first,
                    second: port,
                    a,
                    b,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::encode_tiles;

    #[test]
    fn empty_board_shape() {
        let board = Board::empty();
        assert_eq!(board.tiles().len(), TILE_COUNT);
        assert_eq!(board.nodes().len(), NODE_COUNT);
        assert_eq!(board.ports().len(), PORT_COUNT);
        assert!(board.tiles().iter().all(|t| t.is_desert()));
        assert!(board.nodes().iter().all(|n| n.is_active()));
        for (i, node) in board.nodes().iter().enumerate() {
            assert_eq!(node.index, i);
        }
    }

    #[test]
    fn default_ports_are_wired_to_nodes() {
        let board = Board::empty();
        assert_eq!(board.nodes()[0].ports, vec![0]);
        assert_eq!(board.nodes()[3].ports, vec![0]);
        assert_eq!(board.nodes()[16].ports, vec![8]);
        assert!(board.nodes()[12].ports.is_empty());
        let with_port = board.nodes().iter().filter(|n| !n.ports.is_empty()).count();
        assert_eq!(with_port, 18);
        assert_eq!(
            board.port_kinds_at(5).collect::<Vec<_>>(),
            vec![PortKind::Specific(ResourceKind::Grain)]
        );

        for node in board.nodes() {
            for port in board.ports() {
                assert_eq!(
                    port.serves(node.index),
                    node.ports.contains(&port.index),
                    "port {} / node {}",
                    port.index,
                    node.index
                );
            }
        }
    }

    #[test]
    fn random_board_is_deterministic() {
        let a = Board::random_board("seed1");
        let b = Board::random_board("seed1");
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn random_board_depends_on_seed() {
        let a = Board::random_board("seed1");
        let b = Board::random_board("seed2");
        assert_ne!(a.tiles(), b.tiles());
    }

    #[test]
    fn random_board_composition() {
        for seed in ["seed1", "seed2", DEFAULT_SEED, "", "catan"] {
            let board = Board::random_board(seed);
            assert!(board.has_standard_composition(), "seed {:?}", seed);
            let desert = board.tiles().iter().find(|t| t.is_desert()).copied();
            assert_eq!(desert, Some(Tile::DESERT));
        }
    }

    #[test]
    fn random_with_accepts_any_rng() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::random_with(&mut rng);
        assert!(board.has_standard_composition());
    }

    #[test]
    fn default_seed_deals_known_board() {
        let board = Board::random_board(DEFAULT_SEED);
        assert_eq!(
            encode_tiles(&board),
            "desert,ore:10,lumber:3,brick:9,grain:8,wool:4,ore:4,brick:12,grain:11,\
             lumber:6,lumber:8,wool:5,wool:5,grain:3,grain:9,brick:6,ore:11,wool:2,lumber:10"
        );
    }

    #[test]
    fn other_seed_deals_known_board() {
        let board = Board::random_board("seed1");
        assert_eq!(
            encode_tiles(&board),
            "lumber:10,grain:11,grain:8,wool:9,brick:9,grain:11,ore:3,wool:10,lumber:3,\
             ore:6,brick:2,ore:4,grain:12,wool:8,brick:6,wool:5,lumber:4,desert,lumber:5"
        );
    }

    #[test]
    fn set_tile_accepts_valid_edits() {
        let mut board = Board::empty();
        board.set_tile(4, Some(ResourceKind::Ore), Some(8)).unwrap();
        assert_eq!(board.tiles()[4], Tile::new(ResourceKind::Ore, 8));
        board.set_tile(4, None, None).unwrap();
        assert_eq!(board.tiles()[4], Tile::DESERT);
    }

    #[test]
    fn set_tile_rejects_bad_edits() {
        let mut board = Board::empty();
        assert_eq!(
            board.set_tile(19, Some(ResourceKind::Ore), Some(8)),
            Err(BoardError::TileIndexOutOfRange(19))
        );
        assert_eq!(
            board.set_tile(0, Some(ResourceKind::Ore), Some(7)),
            Err(BoardError::InvalidNumber { tile: 0, number: 7 })
        );
        assert_eq!(
            board.set_tile(0, Some(ResourceKind::Ore), Some(13)),
            Err(BoardError::InvalidNumber { tile: 0, number: 13 })
        );
        assert_eq!(
            board.set_tile(2, None, Some(6)),
            Err(BoardError::DesertWithNumber { tile: 2, number: 6 })
        );
        assert_eq!(
            board.set_tile(3, Some(ResourceKind::Wool), None),
            Err(BoardError::MissingNumber {
                tile: 3,
                resource: ResourceKind::Wool
            })
        );
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn from_tiles_validates() {
        let board = Board::random_board("seed1");
        let rebuilt = Board::from_tiles(board.tiles()).unwrap();
        assert_eq!(rebuilt.tiles(), board.tiles());

        assert_eq!(
            Board::from_tiles(&board.tiles()[..18]).unwrap_err(),
            BoardError::WrongTileCount(18)
        );

        let mut tiles = board.tiles().to_vec();
        tiles[5] = Tile {
            resource: Some(ResourceKind::Grain),
            number: Some(7),
        };
        assert_eq!(
            Board::from_tiles(&tiles).unwrap_err(),
            BoardError::InvalidNumber { tile: 5, number: 7 }
        );
    }

    #[test]
    fn set_port_layout_rewires_nodes() {
        let mut board = Board::empty();
        let mut layout = DEFAULT_PORT_LAYOUT;
        layout[0] = (PortKind::Specific(ResourceKind::Ore), (1, 4));
        board.set_port_layout(&layout).unwrap();

        assert!(board.nodes()[0].ports.is_empty());
        assert!(board.nodes()[3].ports.is_empty());
        assert_eq!(board.nodes()[4].ports, vec![0]);
        // Node 1 now sits between two ports.
        assert_eq!(board.nodes()[1].ports, vec![0, 1]);
        assert_eq!(board.ports()[0].nodes, (1, 4));
    }

    #[test]
    fn set_port_layout_rejects_malformed_layouts() {
        let mut board = Board::empty();

        assert_eq!(
            board.set_port_layout(&DEFAULT_PORT_LAYOUT[..8]),
            Err(BoardError::WrongPortCount(8))
        );

        let mut layout = DEFAULT_PORT_LAYOUT;
        layout[2] = (PortKind::Generic, (10, 54));
        assert_eq!(
            board.set_port_layout(&layout),
            Err(BoardError::NodeOutOfRange { port: 2, node: 54 })
        );

        let mut layout = DEFAULT_PORT_LAYOUT;
        layout[2] = (PortKind::Generic, (0, 1));
        assert_eq!(
            board.set_port_layout(&layout),
            Err(BoardError::PortNotOnRoad { port: 2, a: 0, b: 1 })
        );

        let mut layout = DEFAULT_PORT_LAYOUT;
        layout[2] = (PortKind::Generic, (6, 6));
        assert_eq!(
            board.set_port_layout(&layout),
            Err(BoardError::PortNotOnRoad { port: 2, a: 6, b: 6 })
        );

        let mut layout = DEFAULT_PORT_LAYOUT;
        layout[2] = (PortKind::Generic, (8, 12));
        assert_eq!(
            board.set_port_layout(&layout),
            Err(BoardError::InlandPort { port: 2, node: 8 })
        );

        let mut layout = DEFAULT_PORT_LAYOUT;
        layout[5] = (PortKind::Generic, (3, 0));
        assert_eq!(
            board.set_port_layout(&layout),
            Err(BoardError::OverlappingPorts {
                first: 0,
                second: 5,
                a: 3,
                b: 0
            })
        );

        // Nothing was applied.
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn claim_kills_neighbours() {
        let mut board = Board::empty();
        assert!(board.claim(12));
        assert_eq!(board.nodes()[12].status, NodeStatus::Claimed);
        for &n in &[7, 8, 17] {
            assert_eq!(board.nodes()[n].status, NodeStatus::Dead);
        }
        assert_eq!(board.nodes()[0].status, NodeStatus::Active);
    }

    #[test]
    fn claim_fails_on_unavailable_nodes() {
        let mut board = Board::empty();
        assert!(board.claim(12));
        let snapshot = board.clone();
        assert!(!board.claim(12), "second claim must fail");
        assert!(!board.claim(7), "dead node cannot be claimed");
        assert_eq!(board, snapshot);
    }

    #[test]
    fn reset_claims_reactivates() {
        let mut board = Board::empty();
        assert!(board.claim(30));
        board.reset_claims();
        assert!(board.nodes().iter().all(|n| n.is_active()));
        assert!(board.claim(30));
    }
}
