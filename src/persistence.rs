//! Loading boards from text and writing solution reports.
//!
//! Board text format:
//! - line 1: the side length `n`
//! - next `n` lines: `n` whitespace-separated cell codes each
//!   (`.` empty, `*` blocker, `O` hole, `G` green slider, `B` blue slider)
//!
//! Trailing blank lines are ignored; any other line after the last row is
//! an error.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::error::BoardError;
use crate::grid::Board;
use crate::pieces::Piece;
use crate::solver::SearchResult;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines();

        let dimension_line = lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .ok_or(BoardError::MissingDimension)?;
        let dimensions: usize = dimension_line
            .trim()
            .parse()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| BoardError::InvalidDimension(dimension_line.trim().to_string()))?;

        let rows: Vec<&str> = lines.by_ref().take(dimensions).collect();
        if rows.len() < dimensions || rows.iter().any(|row| row.trim().is_empty()) {
            let found = rows.iter().take_while(|row| !row.trim().is_empty()).count();
            return Err(BoardError::MissingRow {
                expected: dimensions,
                found,
            });
        }

        let extra_rows = lines.filter(|line| !line.trim().is_empty()).count();
        if extra_rows > 0 {
            return Err(BoardError::ExtraRow {
                expected: dimensions,
                found: dimensions + extra_rows,
            });
        }

        let mut cells = Vec::with_capacity(dimensions * dimensions);
        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != dimensions {
                return Err(BoardError::RowLength {
                    row,
                    expected: dimensions,
                    found: codes.len(),
                });
            }
            for (col, code) in codes.into_iter().enumerate() {
                let mut chars = code.chars();
                let piece = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_char(c),
                    _ => None,
                };
                let piece = piece.ok_or_else(|| BoardError::UnknownCell {
                    code: code.to_string(),
                    row,
                    col,
                })?;
                cells.push(piece);
            }
        }

        Board::new(dimensions, cells)
    }
}

/// Reads and parses a board file.
pub fn load(path: impl AsRef<Path>) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let board: Board = fs::read_to_string(path)?.parse()?;
    info!(
        "loaded {}x{} board from {} ({} green, {} blue)",
        board.dimensions(),
        board.dimensions(),
        path.display(),
        board.green_count(),
        board.blue_count()
    );
    Ok(board)
}

/// Formats a board in the file format, dimension line included.
pub fn to_text(board: &Board) -> String {
    format!("{}\n{}", board.dimensions(), board)
}

/// Formats a breadth-first search result as a human-readable report.
pub fn format_solution(result: &SearchResult<Board>) -> String {
    let mut output = format!(
        "Total configs: {}\nUnique configs: {}\n",
        result.total_expansions, result.unique_configurations
    );

    match &result.path {
        None => output.push_str("No solution!\n"),
        Some(path) if path.len() == 1 => output.push_str("Already solved!\n"),
        Some(path) => {
            for (step, board) in path.iter().enumerate() {
                output.push_str(&format!("Step {}:\n{}", step, board));
            }
        }
    }

    output
}

/// Writes the report for `result` to `path`.
pub fn save_solution(path: impl AsRef<Path>, result: &SearchResult<Board>) -> std::io::Result<()> {
    fs::write(path.as_ref(), format_solution(result))?;
    info!("wrote solution report to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::search_bfs;
    use crate::Configuration;

    #[test]
    fn test_parse_board() {
        let board: Board = "3\nG . O\n* B .\n. . .\n".parse().unwrap();
        assert_eq!(board.dimensions(), 3);
        assert_eq!(board.total_blue(), 1);
        assert_eq!(board.piece_at(0, 0), Some(Piece::GreenSlider));
        assert_eq!(board.piece_at(0, 2), Some(Piece::Hole));
        assert_eq!(board.piece_at(1, 0), Some(Piece::Blocker));
        assert_eq!(board.piece_at(1, 1), Some(Piece::BlueSlider));
        assert_eq!(board.piece_at(3, 0), None);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let board: Board = "2\n  G   .\n.\tO  \n\n\n".parse().unwrap();
        assert_eq!(board.piece_at(0, 0), Some(Piece::GreenSlider));
        assert_eq!(board.piece_at(1, 1), Some(Piece::Hole));
    }

    #[test]
    fn test_text_roundtrip() {
        let text = "4\nG . . B\n. * . .\n. . O .\nB . . G\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(to_text(&board), text);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<Board>(),
            Err(BoardError::MissingDimension)
        ));
        assert!(matches!(
            "three\n. . .".parse::<Board>(),
            Err(BoardError::InvalidDimension(ref s)) if s == "three"
        ));
        assert!(matches!(
            "0\n".parse::<Board>(),
            Err(BoardError::InvalidDimension(_))
        ));
        assert!(matches!(
            "3\n. . .\n. . .\n".parse::<Board>(),
            Err(BoardError::MissingRow {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            "2\n. .\n. . .\n".parse::<Board>(),
            Err(BoardError::RowLength {
                row: 1,
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            "2\n. .\n. .\nG G\n".parse::<Board>(),
            Err(BoardError::ExtraRow {
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            "2\n. .\n. .\n\nG G\n\n".parse::<Board>(),
            Err(BoardError::ExtraRow {
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            "2\n. X\n. .\n".parse::<Board>(),
            Err(BoardError::UnknownCell { ref code, row: 0, col: 1 }) if code == "X"
        ));
        assert!(matches!(
            "2\n. GG\n. .\n".parse::<Board>(),
            Err(BoardError::UnknownCell { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("definitely/not/a/board.txt").unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn test_load_and_save_files() {
        let dir = std::env::temp_dir().join(format!("tilt-persistence-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let board_path = dir.join("board.txt");
        let report_path = dir.join("solution.txt");

        fs::write(&board_path, "3\n. O .\n. G .\n. . .\n").unwrap();
        let board = load(&board_path).unwrap();
        assert!(!board.is_goal());

        let result = search_bfs(board);
        save_solution(&report_path, &result).unwrap();
        let report = fs::read_to_string(&report_path).unwrap();
        assert_eq!(report, format_solution(&result));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_format_solution_with_path() {
        let board: Board = "3\n. O .\n. G .\n. . .\n".parse().unwrap();
        let result = search_bfs(board);
        insta::assert_snapshot!(format_solution(&result), @r"
        Total configs: 5
        Unique configs: 5
        Step 0:
        . O .
        . G .
        . . .
        Step 1:
        . O .
        . . .
        . . .
        ");
    }

    #[test]
    fn test_format_solution_already_solved_and_unsolvable() {
        let solved: Board = "2\nB .\n. O\n".parse().unwrap();
        insta::assert_snapshot!(format_solution(&search_bfs(solved)), @r"
        Total configs: 1
        Unique configs: 1
        Already solved!
        ");

        let stuck: Board = "3\nB G O\n* * *\n. . .\n".parse().unwrap();
        let report = format_solution(&search_bfs(stuck));
        assert!(report.ends_with("No solution!\n"));
    }
}
