//! # rust-reversi
//!
//! An Othello (Reversi) rules engine.
//!
//! ## Design Principles
//!
//! 1. **Board as pure state**: the grid holds cells and tallies; whose
//!    turn it is lives in the layer above, so positions can be analyzed
//!    in isolation.
//!
//! 2. **One scan primitive**: legality and flipping share
//!    `rules::captures_in`, so a move can never flip a run it was not
//!    legal for, or the other way around.
//!
//! 3. **Both-sides-blocked termination**: the game ends when neither
//!    color can place, not when the board is full.
//!
//! ## Modules
//!
//! - `core`: cells, colors, coordinates, directions, the board grid
//! - `rules`: capture scanning, legality, move application, scoring
//! - `game`: the turn state machine (`Session`) with pass/game-over events
//!
//! Front ends (console, graphical) are collaborators, not residents: they
//! read the board (`Board::cells`, the `Display` rendering) and drive the
//! engine through `Session` or the `rules` functions, re-prompting on the
//! recoverable error values.

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Color, Coord, Direction, Score, BOARD_SIZE};

pub use crate::rules::{
    apply_move, captures_in, has_legal_move, is_legal_move, is_terminal, legal_moves, winner,
    CaptureRun, GameResult, InvalidMoveError,
};

pub use crate::game::{PlayError, Session, SessionBuilder, Turn, TurnEvent};
