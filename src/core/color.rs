//! Cell and color domains.
//!
//! ## Cell
//!
//! One square of the grid: `Empty`, or occupied by a White or Black disc.
//!
//! ## Color
//!
//! The two movers. `Empty` is deliberately not a color, so "the opponent
//! of Empty" is unrepresentable rather than a runtime error.

use serde::{Deserialize, Serialize};

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    /// Single-character rendering used by text front ends.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    /// The occupying color, or `None` for an empty square.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
        }
    }

    /// True iff no disc occupies the square.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A mover. Exactly two values; each is the other's opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposing color.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The cell a disc of this color occupies.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }

    /// Both colors, White first.
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
