//! Text input and output for boards.
//!
//! Implements the compact notation used to describe tile lists, port
//! layouts and need vectors on the command line.

pub mod notation;

pub use notation::{
    encode_ports, encode_tiles, parse_board, parse_needs, parse_ports, parse_tiles, NotationError,
};
