//! Board representation and the tilt transition.
//!
//! The grid is stored as a flat row-major vector of [`Piece`]s. Each board
//! owns its side length and the number of blue sliders the puzzle started
//! with, so boards from different puzzles never share state.

use std::fmt;

use crate::error::BoardError;
use crate::pieces::{Coord, Direction, Piece};
use crate::Configuration;

/// Converts (row, col) coordinates to a linear cell index.
///
/// Index order is row-major: `idx = row * dimensions + col`.
#[inline(always)]
pub const fn coord_to_idx(dimensions: usize, (row, col): Coord) -> usize {
    row * dimensions + col
}

/// Converts a linear cell index to (row, col) coordinates.
#[inline(always)]
pub const fn idx_to_coord(dimensions: usize, cell_index: usize) -> Coord {
    (cell_index / dimensions, cell_index % dimensions)
}

/// One state of the tilt puzzle.
///
/// Equality and hashing are structural over the cells, so two boards
/// reached by different tilt sequences deduplicate in the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dimensions: usize,
    cells: Vec<Piece>,
    /// Blue sliders present when the puzzle was loaded.
    total_blue: usize,
}

impl Board {
    /// Builds the starting board of a puzzle from row-major cells.
    ///
    /// The blue slider count of `cells` becomes the conserved total for
    /// every board derived from this one.
    pub fn new(dimensions: usize, cells: Vec<Piece>) -> Result<Self, BoardError> {
        if dimensions == 0 || cells.len() != dimensions * dimensions {
            return Err(BoardError::Shape {
                dimensions,
                cells: cells.len(),
            });
        }
        let total_blue = cells.iter().filter(|&&p| p == Piece::BlueSlider).count();
        Ok(Self {
            dimensions,
            cells,
            total_blue,
        })
    }

    /// Side length of the square grid.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of blue sliders every valid board of this puzzle must hold.
    pub fn total_blue(&self) -> usize {
        self.total_blue
    }

    /// Returns the piece at (`row`, `col`), or `None` off the board.
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        if row < self.dimensions && col < self.dimensions {
            Some(self.cells[coord_to_idx(self.dimensions, (row, col))])
        } else {
            None
        }
    }

    /// Counts the cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }

    pub fn green_count(&self) -> usize {
        self.count(Piece::GreenSlider)
    }

    pub fn blue_count(&self) -> usize {
        self.count(Piece::BlueSlider)
    }

    /// Iterates over the rows from north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[Piece]> {
        self.cells.chunks(self.dimensions)
    }

    /// Tilts the board, sliding every slider as far as it goes.
    ///
    /// Sliders are resolved nearest-edge first so the ones behind stack up
    /// against them. A slider whose path ends at a hole is removed. The
    /// result may be invalid (a blue slider lost); callers decide whether
    /// to accept it.
    pub fn tilt(&self, direction: Direction) -> Board {
        let dimensions = self.dimensions;
        let mut cells = self.cells.clone();

        let mut sliders: Vec<usize> = Vec::new();
        for (cell_index, cell) in cells.iter_mut().enumerate() {
            if cell.is_slider() {
                sliders.push(cell_index);
                *cell = Piece::Empty;
            }
        }

        // stable sort keeps row-major order among pieces at equal distance
        sliders.sort_by_key(|&cell_index| {
            direction.distance_to_edge(idx_to_coord(dimensions, cell_index), dimensions)
        });

        for cell_index in sliders {
            let slider = self.cells[cell_index];
            let mut current = idx_to_coord(dimensions, cell_index);

            let resting = loop {
                let Some(next) = direction.step(current, dimensions) else {
                    break Some(current);
                };
                match cells[coord_to_idx(dimensions, next)] {
                    Piece::Empty => current = next,
                    Piece::Hole => break None,
                    Piece::Blocker | Piece::GreenSlider | Piece::BlueSlider => {
                        break Some(current)
                    }
                }
            };

            // a slider that reached a hole is absorbed
            if let Some(coord) = resting {
                cells[coord_to_idx(dimensions, coord)] = slider;
            }
        }

        Board {
            dimensions,
            cells,
            total_blue: self.total_blue,
        }
    }
}

impl Configuration for Board {
    fn is_goal(&self) -> bool {
        self.green_count() == 0 && self.is_valid()
    }

    fn is_valid(&self) -> bool {
        self.blue_count() == self.total_blue
    }

    /// One board per direction (north, east, south, west), minus any tilt
    /// that loses a blue slider. A tilt that moves nothing still yields a
    /// board equal to `self`.
    fn successors(&self) -> Vec<Board> {
        Direction::ALL
            .iter()
            .map(|&direction| self.tilt(direction))
            .filter(|board| board.blue_count() == self.total_blue && board.is_valid())
            .collect()
    }
}

impl fmt::Display for Board {
    /// Writes the rows as space-separated cell codes, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|piece| piece.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
