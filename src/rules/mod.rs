//! The rules engine: what is legal, what flips, when the game ends.

pub mod engine;

pub use engine::{
    apply_move, captures_in, has_legal_move, is_legal_move, is_terminal, legal_moves, winner,
    CaptureRun, GameResult, InvalidMoveError,
};
