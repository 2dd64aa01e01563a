//! Errors raised while building or loading a board.

use thiserror::Error;

/// Everything that can go wrong turning text (or raw cells) into a [`Board`].
///
/// [`Board`]: crate::grid::Board
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to read board file: {0}")]
    Io(#[from] std::io::Error),

    #[error("board text is empty, expected a dimension line")]
    MissingDimension,

    #[error("invalid board dimension {0:?}")]
    InvalidDimension(String),

    #[error("expected {expected} rows, found {found}")]
    MissingRow { expected: usize, found: usize },

    #[error("expected {expected} rows, found {found} (extra rows after the board)")]
    ExtraRow { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell code {code:?} at row {row}, column {col}")]
    UnknownCell { code: String, row: usize, col: usize },

    #[error("{cells} cells cannot form a {dimensions}x{dimensions} board")]
    Shape { dimensions: usize, cells: usize },
}
