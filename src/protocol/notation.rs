//! Board notation: compact text for tile lists, port layouts and needs.
//!
//! Tiles: 19 comma-separated entries in tile order, each `resource:number`
//! or `desert`, e.g. `ore:10,wool:2,lumber:9,...`.
//!
//! Ports: 9 comma-separated entries `kind:a-b`, where kind is `all` or a
//! resource and `a-b` the road it sits on, e.g. `all:0-3,grain:1-5,...`.
//!
//! Needs: comma-separated `resource=amount`; unlisted resources need 0.

use crate::board::port::{PortKind, PortSpec};
use crate::board::resource::{NeedVector, ResourceKind};
use crate::board::tile::{Tile, TILE_COUNT};
use crate::board::{Board, BoardError};

/// Errors that can occur while parsing board notation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("expected {expected} entries, got {found}")]
    WrongEntryCount { expected: usize, found: usize },

    #[error("invalid tile entry '{0}', expected 'resource:number' or 'desert'")]
    InvalidTileEntry(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("invalid tile number '{0}'")]
    InvalidNumber(String),

    #[error("invalid port entry '{0}', expected 'kind:a-b'")]
    InvalidPortEntry(String),

    #[error("invalid node index '{0}'")]
    InvalidNodeIndex(String),

    #[error("invalid need entry '{0}', expected 'resource=amount'")]
    InvalidNeedEntry(String),

    #[error("need for {resource} must be a non-negative number, got {value}")]
    InvalidNeedAmount { resource: ResourceKind, value: f64 },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Splits on commas, trimming entries. Errors on blank input.
fn entries(s: &str) -> Result<Vec<&str>, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    Ok(s.split(',').map(str::trim).collect())
}

fn parse_resource(s: &str) -> Result<ResourceKind, NotationError> {
    s.parse()
        .map_err(|_| NotationError::UnknownResource(s.to_string()))
}

/// Parses one tile entry. Number validity is left to the board.
fn parse_tile(entry: &str) -> Result<Tile, NotationError> {
    if entry.eq_ignore_ascii_case("desert") {
        return Ok(Tile::DESERT);
    }
    let (resource, number) = entry
        .split_once(':')
        .ok_or_else(|| NotationError::InvalidTileEntry(entry.to_string()))?;
    let resource = parse_resource(resource.trim())?;
    let number: u8 = number
        .trim()
        .parse()
        .map_err(|_| NotationError::InvalidNumber(number.trim().to_string()))?;
    Ok(Tile {
        resource: Some(resource),
        number: Some(number),
    })
}

/// Parses a tile list.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>, NotationError> {
    let entries = entries(s)?;
    if entries.len() != TILE_COUNT {
        return Err(NotationError::WrongEntryCount {
            expected: TILE_COUNT,
            found: entries.len(),
        });
    }
    entries.into_iter().map(parse_tile).collect()
}

/// Parses a tile list into a board with the default port layout.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let tiles = parse_tiles(s)?;
    Ok(Board::from_tiles(&tiles)?)
}

/// Encodes the board's tiles in tile notation.
pub fn encode_tiles(board: &Board) -> String {
    board
        .tiles()
        .iter()
        .map(|t| match (t.resource, t.number) {
            (Some(r), Some(n)) => format!("{}:{}", r, n),
            _ => "desert".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_node(s: &str) -> Result<usize, NotationError> {
    s.trim()
        .parse()
        .map_err(|_| NotationError::InvalidNodeIndex(s.trim().to_string()))
}

/// Parses a port layout. Geometry is checked by `Board::set_port_layout`.
pub fn parse_ports(s: &str) -> Result<Vec<PortSpec>, NotationError> {
    entries(s)?
        .into_iter()
        .map(|entry| {
            let (kind, road) = entry
                .split_once(':')
                .ok_or_else(|| NotationError::InvalidPortEntry(entry.to_string()))?;
            let kind: PortKind = kind
                .trim()
                .parse()
                .map_err(|_| NotationError::UnknownResource(kind.trim().to_string()))?;
            let (a, b) = road
                .split_once('-')
                .ok_or_else(|| NotationError::InvalidPortEntry(entry.to_string()))?;
            Ok((kind, (parse_node(a)?, parse_node(b)?)))
        })
        .collect()
}

/// Encodes the board's ports in port notation.
pub fn encode_ports(board: &Board) -> String {
    board
        .ports()
        .iter()
        .map(|p| format!("{}:{}-{}", p.kind, p.nodes.0, p.nodes.1))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a need vector.
pub fn parse_needs(s: &str) -> Result<NeedVector, NotationError> {
    let mut needs = NeedVector::ZERO;
    for entry in entries(s)? {
        let (resource, amount) = entry
            .split_once('=')
            .ok_or_else(|| NotationError::InvalidNeedEntry(entry.to_string()))?;
        let resource = parse_resource(resource.trim())?;
        let value: f64 = amount
            .trim()
            .parse()
            .map_err(|_| NotationError::InvalidNeedEntry(entry.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(NotationError::InvalidNeedAmount { resource, value });
        }
        needs[resource] = value;
    }
    Ok(needs)
}
