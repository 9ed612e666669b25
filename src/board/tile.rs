//! Hex tiles and dice-number probabilities.

use serde::{Deserialize, Serialize};

use super::resource::ResourceKind;

/// The number of tiles on the board.
pub const TILE_COUNT: usize = 19;

/// Dice numbers printed on the 18 producing tiles of a standard board.
pub const STANDARD_NUMBERS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

/// Resources of the 18 producing tiles of a standard board.
pub const STANDARD_RESOURCES: [ResourceKind; 18] = [
    ResourceKind::Lumber,
    ResourceKind::Lumber,
    ResourceKind::Lumber,
    ResourceKind::Lumber,
    ResourceKind::Grain,
    ResourceKind::Grain,
    ResourceKind::Grain,
    ResourceKind::Grain,
    ResourceKind::Brick,
    ResourceKind::Brick,
    ResourceKind::Brick,
    ResourceKind::Ore,
    ResourceKind::Ore,
    ResourceKind::Ore,
    ResourceKind::Wool,
    ResourceKind::Wool,
    ResourceKind::Wool,
    ResourceKind::Wool,
];

/// Number of distinct outcomes of rolling two six-sided dice.
const DICE_OUTCOMES: f64 = 36.0;

/// Returns the dots printed under a tile number (ways to roll it on 2d6).
///
/// `None` (desert) has no dots. Panics on 7 or any value outside 1..=12:
/// such a number can only reach here through an unchecked edit.
pub fn number_to_dots(number: Option<u8>) -> u8 {
    match number {
        None => 0,
        Some(n @ 1..=6) => n - 1,
        Some(n @ 8..=12) => 13 - n,
        Some(n) => panic!("tile number {} has no dot count", n),
    }
}

/// Returns true if `n` can be printed on a producing tile.
pub const fn is_valid_number(n: u8) -> bool {
    matches!(n, 2..=6 | 8..=12)
}

/// Probability of `number` being rolled on a single turn.
pub fn number_odds(number: Option<u8>) -> f64 {
    f64::from(number_to_dots(number)) / DICE_OUTCOMES
}

/// A hex tile. `resource == None` is the desert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub resource: Option<ResourceKind>,
    pub number: Option<u8>,
}

impl Tile {
    /// Creates a producing tile.
    pub const fn new(resource: ResourceKind, number: u8) -> Self {
        Tile {
            resource: Some(resource),
            number: Some(number),
        }
    }

    /// The desert: no resource, no number.
    pub const DESERT: Tile = Tile {
        resource: None,
        number: None,
    };

    /// Returns true if this tile produces nothing.
    pub const fn is_desert(&self) -> bool {
        self.resource.is_none()
    }

    pub fn dots(&self) -> u8 {
        number_to_dots(self.number)
    }

    /// Odds of this tile's number being rolled, out of 1.
    pub fn odds(&self) -> f64 {
        number_odds(self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_symmetric_around_seven() {
        assert_eq!(number_to_dots(Some(2)), 1);
        assert_eq!(number_to_dots(Some(12)), 1);
        assert_eq!(number_to_dots(Some(6)), 5);
        assert_eq!(number_to_dots(Some(8)), 5);
        assert_eq!(number_to_dots(None), 0);
        for n in 2..=6u8 {
            assert_eq!(number_to_dots(Some(n)), number_to_dots(Some(14 - n)));
        }
    }

    #[test]
    #[should_panic(expected = "tile number 7")]
    fn seven_has_no_dots() {
        number_to_dots(Some(7));
    }

    #[test]
    #[should_panic]
    fn out_of_range_number_panics() {
        number_to_dots(Some(13));
    }

    #[test]
    fn valid_numbers_exclude_seven() {
        let valid: Vec<u8> = (0..=15).filter(|&n| is_valid_number(n)).collect();
        assert_eq!(valid, vec![2, 3, 4, 5, 6, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn odds_of_six() {
        let tile = Tile::new(ResourceKind::Lumber, 6);
        assert_eq!(tile.dots(), 5);
        assert!((tile.odds() - 5.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn desert_never_produces() {
        assert!(Tile::DESERT.is_desert());
        assert_eq!(Tile::DESERT.dots(), 0);
        assert_eq!(Tile::DESERT.odds(), 0.0);
        assert_eq!(Tile::default(), Tile::DESERT);
    }

    #[test]
    fn standard_number_dots_total() {
        let total: u32 = STANDARD_NUMBERS
            .iter()
            .map(|&n| u32::from(number_to_dots(Some(n))))
            .sum();
        assert_eq!(total, 58);
    }
}
