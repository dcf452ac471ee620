//! The 8×8 grid and its tallies.
//!
//! `Board` is a pure state container: it knows which square holds what,
//! how to count discs, and how to render itself as text. Whose turn it is,
//! and whether a placement is legal, belong to the layers above
//! (`crate::rules`, `crate::game`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::color::{Cell, Color};
use super::coord::{Coord, BOARD_SIZE};

/// Fixed 8×8 Othello board.
///
/// Mutation goes through `crate::rules::apply_move`, which either applies
/// a full legal move (placement plus all flips) or leaves the board
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting position: the four center squares occupied,
    /// White at (3,3)/(4,4) and Black at (3,4)/(4,3), diagonally opposed.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        board.set(Coord::new(3, 3), Cell::White);
        board.set(Coord::new(4, 4), Cell::White);
        board.set(Coord::new(3, 4), Cell::Black);
        board.set(Coord::new(4, 3), Cell::Black);
        board
    }

    /// Build a board from an explicit grid, for analyzing positions that
    /// did not arise from a played game.
    #[must_use]
    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The cell at `at`, or `None` off the board. Total: never fails.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        if at.on_board() {
            Some(self.cells[at.row as usize][at.col as usize])
        } else {
            None
        }
    }

    /// Read access to the full grid, for renderers.
    #[must_use]
    pub const fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Overwrite the cell at an on-board coordinate.
    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        debug_assert!(at.on_board(), "set off the board: {at}");
        self.cells[at.row as usize][at.col as usize] = cell;
    }

    /// True iff no square is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        Coord::all().all(|at| !self[at].is_empty())
    }

    /// Disc counts per color. O(64).
    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for at in Coord::all() {
            match self[at] {
                Cell::White => score.white += 1,
                Cell::Black => score.black += 1,
                Cell::Empty => {}
            }
        }
        score
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    /// Panics off the board; use [`Board::cell`] for a total query.
    fn index(&self, at: Coord) -> &Cell {
        &self.cells[at.row as usize][at.col as usize]
    }
}

/// Text rendering consumed by console front ends.
///
/// Header row lists the column indices 0–7 joined by two spaces; each
/// board row is prefixed with its row index, cells one symbol each,
/// joined by single spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
        writeln!(f, "  {}", header.join("  "))?;
        for (row, cells) in self.cells.iter().enumerate() {
            let line: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{} {}", row, line.join(" "))?;
        }
        Ok(())
    }
}

/// Disc tally per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub white: u8,
    pub black: u8,
}

impl Score {
    /// Create a score.
    #[must_use]
    pub const fn new(white: u8, black: u8) -> Self {
        Self { white, black }
    }

    /// Total discs on the board.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.white + self.black
    }

    /// The color ahead on discs, or `None` when tied.
    #[must_use]
    pub fn leader(self) -> Option<Color> {
        match self.white.cmp(&self.black) {
            Ordering::Greater => Some(Color::White),
            Ordering::Less => Some(Color::Black),
            Ordering::Equal => None,
        }
    }
}

impl Index<Color> for Score {
    type Output = u8;

    fn index(&self, color: Color) -> &u8 {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}
