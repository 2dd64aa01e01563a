//! Cell kinds and tilt directions.
//!
//! Both are closed enums: every place that interprets a cell or a direction
//! matches exhaustively, so adding a variant is a compile error until each
//! site handles it.

use std::fmt;
use std::str::FromStr;

/// A (row, column) position on the board. Row 0 is the north edge.
pub type Coord = (usize, usize);

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Blocker,
    /// Absorbs any slider that slides into it.
    Hole,
    /// Must all be removed to solve the board.
    GreenSlider,
    /// Must never be lost down a hole.
    BlueSlider,
}

impl Piece {
    /// Returns true for the two movable piece kinds.
    #[inline]
    pub const fn is_slider(self) -> bool {
        match self {
            Piece::GreenSlider | Piece::BlueSlider => true,
            Piece::Empty | Piece::Blocker | Piece::Hole => false,
        }
    }

    /// Single-character code used in board files.
    pub const fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Blocker => '*',
            Piece::Hole => 'O',
            Piece::GreenSlider => 'G',
            Piece::BlueSlider => 'B',
        }
    }

    /// Parses a board-file cell code.
    pub const fn from_char(code: char) -> Option<Self> {
        match code {
            '.' => Some(Piece::Empty),
            '*' => Some(Piece::Blocker),
            'O' => Some(Piece::Hole),
            'G' => Some(Piece::GreenSlider),
            'B' => Some(Piece::BlueSlider),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One of the four ways the board can be tilted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in successor enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Moves one cell in this direction, or `None` past the board edge.
    #[inline]
    pub fn step(self, (row, col): Coord, dimensions: usize) -> Option<Coord> {
        match self {
            Direction::North => row.checked_sub(1).map(|r| (r, col)),
            Direction::East => (col + 1 < dimensions).then_some((row, col + 1)),
            Direction::South => (row + 1 < dimensions).then_some((row + 1, col)),
            Direction::West => col.checked_sub(1).map(|c| (row, c)),
        }
    }

    /// Distance from `coord` to the edge this direction slides toward.
    ///
    /// Sliders are resolved in ascending order of this value so a piece
    /// that stops early is already in place when the ones behind it move.
    #[inline]
    pub fn distance_to_edge(self, (row, col): Coord, dimensions: usize) -> usize {
        match self {
            Direction::North => row,
            Direction::East => dimensions - 1 - col,
            Direction::South => dimensions - 1 - row,
            Direction::West => col,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// Returned when a direction name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?}, expected one of n, e, s, w")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts `n`/`north`, `e`/`east`, `s`/`south`, `w`/`west` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
