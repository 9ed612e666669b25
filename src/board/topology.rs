//! Fixed intersection graph of the standard Catan board.
//!
//! Nodes are numbered from the top-left intersection, left to right, row by
//! row. Each entry lists the tiles a node touches and the nodes one road away.
//! Neighbour lists are symmetric: if A lists B then B lists A. All data is
//! compile-time `static` and shared by every board; only tile and port
//! contents vary.
//!
//! ```text
//!        00  01  02
//!       / \ / \ / \
//!      03  04  05  06
//!      |   |   |   |
//!      07  08  09  10
//!     / \ / \ / \ / \
//!    11  12  13  14  15
//!    |   |   |   |   |
//!    16  17  18  19  20
//!   / \ / \ / \ / \ / \
//!  21  22  23  24  25  26
//!  |   |   |   |   |   |
//!  27  28  29  30  31  32
//!   \ / \ / \ / \ / \ /
//!    33  34  35  36  37
//!    |   |   |   |   |
//!    38  39  40  41  42
//!     \ / \ / \ / \ /
//!      43  44  45  46
//!      |   |   |   |
//!      47  48  49  50
//!       \ / \ / \ /
//!        51  52  53
//! ```

use super::tile::TILE_COUNT;

/// The number of intersections on the board.
pub const NODE_COUNT: usize = 54;

/// Number of roads (undirected neighbour pairs) on the board.
pub const EDGE_COUNT: usize = 72;

/// Tiles and neighbours of a single intersection.
#[derive(Debug, Clone, Copy)]
pub struct NodeConnection {
    pub tiles: &'static [usize],
    pub neighbors: &'static [usize],
}

/// Shorthand constructor (used only in table construction).
const fn conn(tiles: &'static [usize], neighbors: &'static [usize]) -> NodeConnection {
    NodeConnection { tiles, neighbors }
}

/// Connections indexed by node number.
pub static NODE_TOPOLOGY: [NodeConnection; NODE_COUNT] = [
    // 00-02: top edge
    conn(&[0], &[3, 4]),
    conn(&[1], &[4, 5]),
    conn(&[2], &[5, 6]),
    // 03-06
    conn(&[0], &[0, 7]),
    conn(&[0, 1], &[0, 1, 8]),
    conn(&[1, 2], &[1, 2, 9]),
    conn(&[2], &[2, 10]),
    // 07-10
    conn(&[0, 3], &[3, 11, 12]),
    conn(&[0, 1, 4], &[4, 12, 13]),
    conn(&[1, 2, 5], &[5, 13, 14]),
    conn(&[2, 6], &[6, 14, 15]),
    // 11-15
    conn(&[3], &[7, 16]),
    conn(&[0, 3, 4], &[7, 8, 17]),
    conn(&[1, 4, 5], &[8, 9, 18]),
    conn(&[2, 5, 6], &[9, 10, 19]),
    conn(&[6], &[10, 20]),
    // 16-20
    conn(&[3, 7], &[11, 21, 22]),
    conn(&[3, 4, 8], &[12, 22, 23]),
    conn(&[4, 5, 9], &[13, 23, 24]),
    conn(&[5, 6, 10], &[14, 24, 25]),
    conn(&[6, 11], &[15, 25, 26]),
    // 21-26
    conn(&[7], &[16, 27]),
    conn(&[3, 7, 8], &[16, 17, 28]),
    conn(&[4, 8, 9], &[17, 18, 29]),
    conn(&[5, 9, 10], &[18, 19, 30]),
    conn(&[6, 10, 11], &[19, 20, 31]),
    conn(&[11], &[20, 32]),
    // 27-32
    conn(&[7], &[21, 33]),
    conn(&[7, 8, 12], &[22, 33, 34]),
    conn(&[8, 9, 13], &[23, 34, 35]),
    conn(&[9, 10, 14], &[24, 35, 36]),
    conn(&[10, 11, 15], &[25, 36, 37]),
    conn(&[11], &[26, 37]),
    // 33-37
    conn(&[7, 12], &[27, 28, 38]),
    conn(&[8, 12, 13], &[28, 29, 39]),
    conn(&[9, 13, 14], &[29, 30, 40]),
    conn(&[10, 14, 15], &[30, 31, 41]),
    conn(&[11, 15], &[31, 32, 42]),
    // 38-42
    conn(&[12], &[33, 43]),
    conn(&[12, 13, 16], &[34, 43, 44]),
    conn(&[13, 14, 17], &[35, 44, 45]),
    conn(&[14, 15, 18], &[36, 45, 46]),
    conn(&[15], &[37, 46]),
    // 43-46
    conn(&[12, 16], &[38, 39, 47]),
    conn(&[13, 16, 17], &[39, 40, 48]),
    conn(&[14, 17, 18], &[40, 41, 49]),
    conn(&[15, 18], &[41, 42, 50]),
    // 47-50
    conn(&[16], &[43, 51]),
    conn(&[16, 17], &[44, 51, 52]),
    conn(&[17, 18], &[45, 52, 53]),
    conn(&[18], &[46, 53]),
    // 51-53: bottom edge
    conn(&[16], &[47, 48]),
    conn(&[17], &[48, 49]),
    conn(&[18], &[49, 50]),
];

/// Tiles touched by `node`.
#[inline]
pub fn tiles_of(node: usize) -> &'static [usize] {
    NODE_TOPOLOGY[node].tiles
}

/// Nodes one road away from `node`.
#[inline]
pub fn neighbors_of(node: usize) -> &'static [usize] {
    NODE_TOPOLOGY[node].neighbors
}

/// Returns true if `a` and `b` are joined by a road. Checks both directions.
pub fn is_adjacent(a: usize, b: usize) -> bool {
    NODE_TOPOLOGY[a].neighbors.contains(&b) || NODE_TOPOLOGY[b].neighbors.contains(&a)
}

/// Returns true if `node` lies on the rim (touches fewer than three tiles).
pub fn is_coastal(node: usize) -> bool {
    NODE_TOPOLOGY[node].tiles.len() < 3
}

/// Nodes at the corners of `tile`, in ascending order.
pub fn nodes_of_tile(tile: usize) -> Vec<usize> {
    debug_assert!(tile < TILE_COUNT);
    (0..NODE_COUNT)
        .filter(|&n| NODE_TOPOLOGY[n].tiles.contains(&tile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_is_symmetric() {
        for a in 0..NODE_COUNT {
            for &b in neighbors_of(a) {
                assert!(
                    neighbors_of(b).contains(&a),
                    "node {} lists {} as neighbour, but not vice versa",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn degree_bounds() {
        for n in 0..NODE_COUNT {
            let deg = neighbors_of(n).len();
            let tiles = tiles_of(n).len();
            assert!((2..=3).contains(&deg), "node {} has {} neighbours", n, deg);
            assert!((1..=3).contains(&tiles), "node {} touches {} tiles", n, tiles);
        }
    }

    #[test]
    fn no_self_loops_or_duplicates() {
        for n in 0..NODE_COUNT {
            let nbrs = neighbors_of(n);
            assert!(!nbrs.contains(&n), "node {} neighbours itself", n);
            for (i, a) in nbrs.iter().enumerate() {
                assert!(!nbrs[i + 1..].contains(a), "node {} lists {} twice", n, a);
            }
        }
    }

    #[test]
    fn edge_count() {
        let directed: usize = (0..NODE_COUNT).map(|n| neighbors_of(n).len()).sum();
        assert_eq!(directed, EDGE_COUNT * 2);
    }

    #[test]
    fn every_tile_has_six_corners() {
        let incidences: usize = (0..NODE_COUNT).map(|n| tiles_of(n).len()).sum();
        assert_eq!(incidences, TILE_COUNT * 6);
        for t in 0..TILE_COUNT {
            assert_eq!(nodes_of_tile(t).len(), 6, "tile {} corner count", t);
        }
    }

    #[test]
    fn corners_of_known_tiles() {
        assert_eq!(nodes_of_tile(0), vec![0, 3, 4, 7, 8, 12]);
        assert_eq!(nodes_of_tile(9), vec![18, 23, 24, 29, 30, 35]);
        assert_eq!(nodes_of_tile(18), vec![41, 45, 46, 49, 50, 53]);
    }

    #[test]
    fn neighbours_share_a_tile() {
        for a in 0..NODE_COUNT {
            for &b in neighbors_of(a) {
                assert!(
                    tiles_of(a).iter().any(|t| tiles_of(b).contains(t)),
                    "road {}-{} borders no tile",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn non_adjacent_nodes_share_no_road() {
        assert!(is_adjacent(0, 3));
        assert!(is_adjacent(3, 0));
        assert!(!is_adjacent(0, 1));
        assert!(!is_adjacent(12, 18));
    }

    #[test]
    fn coastal_count() {
        let rim = (0..NODE_COUNT).filter(|&n| is_coastal(n)).count();
        assert_eq!(rim, 30);
    }
}
