//! Core state types: cells, colors, coordinates, directions, the board.
//!
//! Everything here is plain data with no game rules attached. The rules
//! live in `crate::rules`; turn order lives in `crate::game`.

pub mod board;
pub mod color;
pub mod coord;

pub use board::{Board, Score};
pub use color::{Cell, Color};
pub use coord::{Coord, Direction, BOARD_SIZE};
