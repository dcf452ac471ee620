//! Capture scanning, legality, move application, and winner determination.
//!
//! ## The single scan primitive
//!
//! [`captures_in`] is the one place the bracketing rule is written down.
//! Legality asks "does any direction capture?"; application flips exactly
//! what the same scan returns. The two can never disagree.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Board, Cell, Color, Coord, Direction};

/// A capture run along one direction.
///
/// At most 6 cells fit between two bracketing discs on an 8-wide board,
/// so the buffer stays on the stack.
pub type CaptureRun = SmallVec<[Coord; 6]>;

/// Why a placement was rejected. The board is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("coordinate {0} is off the board")]
    OffBoard(Coord),

    #[error("square {0} is already occupied")]
    Occupied(Coord),

    #[error("placing {1} at {0} captures nothing")]
    NoCapture(Coord, Color),
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The color with the higher disc count.
    Winner(Color),
    /// Equal disc counts.
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if c == color)
    }
}

/// Opponent cells captured by placing `color` at `origin` and scanning
/// along `dir`.
///
/// Starting one step from `origin`, collects consecutive opponent cells;
/// the run counts only when it is non-empty and terminated by an on-board
/// cell of `color` (the bracketing disc). A scan that dies on an empty
/// square, runs off the board, or collects zero opponent cells returns an
/// empty run.
#[must_use]
pub fn captures_in(board: &Board, origin: Coord, color: Color, dir: Direction) -> CaptureRun {
    let opponent = color.opponent().cell();
    let mut run = CaptureRun::new();

    let mut at = origin.step(dir);
    while board.cell(at) == Some(opponent) {
        run.push(at);
        at = at.step(dir);
    }

    if !run.is_empty() && board.cell(at) == Some(color.cell()) {
        run
    } else {
        CaptureRun::new()
    }
}

/// True iff `color` may place at `at`: an empty board square with at
/// least one capturing direction. Total over all coordinates.
#[must_use]
pub fn is_legal_move(board: &Board, at: Coord, color: Color) -> bool {
    if board.cell(at) != Some(Cell::Empty) {
        return false;
    }
    Direction::ALL
        .iter()
        .any(|&dir| !captures_in(board, at, color, dir).is_empty())
}

/// Every legal placement for `color`, in row-major order (row 0→7, then
/// col 0→7 within each row).
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Coord> {
    Coord::all()
        .filter(|&at| is_legal_move(board, at, color))
        .collect()
}

/// True iff `color` has at least one legal placement.
#[must_use]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Coord::all().any(|at| is_legal_move(board, at, color))
}

/// Place `color` at `at` and flip every bracketed run.
///
/// All capture runs are collected before the first write, so a rejected
/// move leaves the board untouched and a successful one is atomic from
/// the caller's perspective. Returns the flipped coordinates in
/// direction-major scan order, for front ends that animate captures.
pub fn apply_move(
    board: &mut Board,
    at: Coord,
    color: Color,
) -> Result<Vec<Coord>, InvalidMoveError> {
    match board.cell(at) {
        None => return Err(InvalidMoveError::OffBoard(at)),
        Some(cell) if !cell.is_empty() => return Err(InvalidMoveError::Occupied(at)),
        Some(_) => {}
    }

    let mut flipped = Vec::new();
    for dir in Direction::ALL {
        flipped.extend(captures_in(board, at, color, dir));
    }
    if flipped.is_empty() {
        return Err(InvalidMoveError::NoCapture(at, color));
    }

    board.set(at, color.cell());
    for &capture in &flipped {
        board.set(capture, color.cell());
    }
    Ok(flipped)
}

/// True iff neither color has any legal move.
///
/// A full board is always terminal, but so is a position where both
/// sides are blocked with empty squares remaining; board fullness is not
/// the test.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Color::White) && !has_legal_move(board, Color::Black)
}

/// Outcome of a position by disc count.
///
/// Meaningful once [`is_terminal`] holds; defined for any position.
#[must_use]
pub fn winner(board: &Board) -> GameResult {
    match board.score().leader() {
        Some(color) => GameResult::Winner(color),
        None => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BOARD_SIZE;

    /// Build a board from 8 rows of 8 symbols (' ', 'W', 'B').
    fn board_from(rows: [&str; 8]) -> Board {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), 8, "row {} must have 8 symbols", r);
            for (c, symbol) in row.chars().enumerate() {
                cells[r][c] = match symbol {
                    'W' => Cell::White,
                    'B' => Cell::Black,
                    ' ' => Cell::Empty,
                    other => panic!("unknown symbol {:?}", other),
                };
            }
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_scan_collects_a_bracketed_run() {
        let board = Board::new();

        // Black at (2,3) scanning south: (3,3) is White, (4,3) is Black.
        let run = captures_in(&board, Coord::new(2, 3), Color::Black, Direction::South);
        assert_eq!(run.as_slice(), &[Coord::new(3, 3)]);
    }

    #[test]
    fn test_scan_requires_at_least_one_opponent_cell() {
        let board = Board::new();

        // (2,4) south: first cell (3,4) is already Black - zero scanned.
        let run = captures_in(&board, Coord::new(2, 4), Color::Black, Direction::South);
        assert!(run.is_empty());
    }

    #[test]
    fn test_scan_blocked_by_empty_square() {
        // One opponent disc collected, then the run dies on an empty
        // square before any bracketing disc.
        let board = board_from([
            "  B     ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
        ]);
        let run = captures_in(&board, Coord::new(0, 3), Color::White, Direction::West);
        assert!(run.is_empty());
    }

    #[test]
    fn test_scan_blocked_by_board_edge() {
        // Two opponent discs collected, then the scan runs off the west
        // edge without finding a bracketing disc.
        let board = board_from([
            "WW      ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
        ]);
        let run = captures_in(&board, Coord::new(0, 2), Color::Black, Direction::West);
        assert!(run.is_empty());
    }

    #[test]
    fn test_scan_collects_multi_cell_runs() {
        let board = board_from([
            "WBBB    ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
        ]);
        let run = captures_in(&board, Coord::new(0, 4), Color::White, Direction::West);
        assert_eq!(
            run.as_slice(),
            &[Coord::new(0, 3), Coord::new(0, 2), Coord::new(0, 1)]
        );
    }

    #[test]
    fn test_opening_moves_for_both_colors() {
        let board = Board::new();

        assert_eq!(
            legal_moves(&board, Color::Black),
            vec![
                Coord::new(2, 3),
                Coord::new(3, 2),
                Coord::new(4, 5),
                Coord::new(5, 4),
            ]
        );
        assert_eq!(
            legal_moves(&board, Color::White),
            vec![
                Coord::new(2, 4),
                Coord::new(3, 5),
                Coord::new(4, 2),
                Coord::new(5, 3),
            ]
        );
    }

    #[test]
    fn test_occupied_squares_are_never_legal() {
        let board = Board::new();
        for at in Coord::all() {
            if !board[at].is_empty() {
                assert!(!is_legal_move(&board, at, Color::White));
                assert!(!is_legal_move(&board, at, Color::Black));
            }
        }
    }

    #[test]
    fn test_off_board_is_never_legal() {
        let board = Board::new();
        assert!(!is_legal_move(&board, Coord::new(-1, 3), Color::Black));
        assert!(!is_legal_move(&board, Coord::new(3, 8), Color::White));
    }

    #[test]
    fn test_apply_opening_move_flips_one_disc() {
        let mut board = Board::new();

        let flipped = apply_move(&mut board, Coord::new(2, 3), Color::Black).unwrap();

        assert_eq!(flipped, vec![Coord::new(3, 3)]);
        assert_eq!(board[Coord::new(2, 3)], Cell::Black);
        assert_eq!(board[Coord::new(3, 3)], Cell::Black);
        // The rest of the center is untouched.
        assert_eq!(board[Coord::new(4, 4)], Cell::White);
        assert_eq!(board[Coord::new(3, 4)], Cell::Black);
        assert_eq!(board[Coord::new(4, 3)], Cell::Black);
        assert_eq!(board.score(), crate::core::Score::new(1, 4));
    }

    #[test]
    fn test_rejected_moves_leave_the_board_unchanged() {
        let board = Board::new();

        for (at, expected) in [
            (Coord::new(-1, 0), InvalidMoveError::OffBoard(Coord::new(-1, 0))),
            (Coord::new(3, 3), InvalidMoveError::Occupied(Coord::new(3, 3))),
            (
                Coord::new(0, 0),
                InvalidMoveError::NoCapture(Coord::new(0, 0), Color::Black),
            ),
        ] {
            let mut after = board;
            assert_eq!(apply_move(&mut after, at, Color::Black), Err(expected));
            assert_eq!(after, board);
        }
    }

    #[test]
    fn test_apply_flips_in_every_capturing_direction() {
        // Black at (2,3) brackets the west run (to the B at (2,0)) and the
        // south-west run (to the B at (5,0)). The south run dies on the
        // empty (5,3) and must not flip.
        let board = board_from([
            "        ",
            "        ",
            "BWW     ",
            " WWW    ",
            " W W    ",
            "B       ",
            "        ",
            "        ",
        ]);
        let mut after = board;
        let flipped = apply_move(&mut after, Coord::new(2, 3), Color::Black).unwrap();

        let mut sorted = flipped.clone();
        sorted.sort();
        assert_eq!(
            sorted,
            vec![
                Coord::new(2, 1),
                Coord::new(2, 2),
                Coord::new(3, 2),
                Coord::new(4, 1),
            ]
        );
        for at in sorted {
            assert_eq!(after[at], Cell::Black);
        }
        // The unbracketed south run is untouched.
        assert_eq!(after[Coord::new(3, 3)], Cell::White);
        assert_eq!(after[Coord::new(4, 3)], Cell::White);
    }

    #[test]
    fn test_terminal_when_board_is_full_of_one_color() {
        let board = Board::from_cells([[Cell::White; BOARD_SIZE]; BOARD_SIZE]);

        assert!(is_terminal(&board));
        assert_eq!(winner(&board), GameResult::Winner(Color::White));
    }

    #[test]
    fn test_terminal_when_both_sides_blocked_on_a_sparse_board() {
        // Only White discs: neither side has an opponent run to bracket.
        let board = board_from([
            "WW      ",
            "WW      ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
        ]);

        assert!(!board.is_full());
        assert!(legal_moves(&board, Color::White).is_empty());
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_initial_position_is_not_terminal() {
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn test_winner_draw_and_is_winner() {
        let board = Board::new();
        assert_eq!(winner(&board), GameResult::Draw);

        assert!(GameResult::Winner(Color::Black).is_winner(Color::Black));
        assert!(!GameResult::Winner(Color::Black).is_winner(Color::White));
        assert!(!GameResult::Draw.is_winner(Color::White));
        assert!(!GameResult::Draw.is_winner(Color::Black));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidMoveError::OffBoard(Coord::new(8, 0)).to_string(),
            "coordinate (8, 0) is off the board"
        );
        assert_eq!(
            InvalidMoveError::Occupied(Coord::new(3, 3)).to_string(),
            "square (3, 3) is already occupied"
        );
        assert_eq!(
            InvalidMoveError::NoCapture(Coord::new(0, 0), Color::Black).to_string(),
            "placing Black at (0, 0) captures nothing"
        );
    }
}
