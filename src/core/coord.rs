//! Board geometry: coordinates and scan directions.
//!
//! `Coord` is an immutable value type; arithmetic returns new values.
//! Components are signed so a scan can step one square past the edge and
//! notice, instead of wrapping.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A (row, col) board coordinate.
///
/// May lie off the board; [`Coord::on_board`] answers whether it indexes
/// a real square. Ordering is row-major, matching move enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff both indices are in [0, 7]. Total: never fails.
    #[must_use]
    pub const fn on_board(self) -> bool {
        0 <= self.row
            && self.row < BOARD_SIZE as i8
            && 0 <= self.col
            && self.col < BOARD_SIZE as i8
    }

    /// Componentwise sum, as a new value.
    #[must_use]
    pub const fn add(self, other: Coord) -> Coord {
        Coord::new(self.row + other.row, self.col + other.col)
    }

    /// Componentwise difference, as a new value.
    #[must_use]
    pub const fn sub(self, other: Coord) -> Coord {
        Coord::new(self.row - other.row, self.col - other.col)
    }

    /// One step in `dir`, as a new value. May leave the board.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Coord {
        self.add(dir.delta())
    }

    /// All 64 on-board coordinates in row-major order (row 0→7, then
    /// col 0→7 within each row).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i8)
            .flat_map(|row| (0..BOARD_SIZE as i8).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight compass directions a capture scan can run in.
///
/// There is no zero vector: staying in place is not a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every scan direction, clockwise from North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The unit step for this direction. North decreases the row,
    /// East increases the column.
    #[must_use]
    pub const fn delta(self) -> Coord {
        match self {
            Direction::North => Coord::new(-1, 0),
            Direction::NorthEast => Coord::new(-1, 1),
            Direction::East => Coord::new(0, 1),
            Direction::SouthEast => Coord::new(1, 1),
            Direction::South => Coord::new(1, 0),
            Direction::SouthWest => Coord::new(1, -1),
            Direction::West => Coord::new(0, -1),
            Direction::NorthWest => Coord::new(-1, -1),
        }
    }
}
