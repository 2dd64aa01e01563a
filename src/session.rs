//! Interactive play on a single puzzle.
//!
//! A [`Session`] tracks the board a player is looking at. Every command
//! returns an outcome value describing what changed; the session never
//! calls back into whoever is driving it.

use log::{debug, info};

use crate::grid::Board;
use crate::pieces::Direction;
use crate::solver::search_bfs;
use crate::Configuration;

/// Result of tilting the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltOutcome {
    /// The tilt would drop a blue slider into a hole; nothing changed.
    Illegal,
    /// The board changed (or stayed put) and is not solved yet.
    Moved,
    /// The tilt solved the puzzle.
    Solved,
}

/// Result of asking for a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// No goal is reachable from the current board.
    NoSolution,
    /// The current board is already a goal.
    AlreadySolved,
    /// The board advanced one step along a shortest solution.
    Advanced,
}

/// A puzzle being played: its starting board and the current one.
#[derive(Debug, Clone)]
pub struct Session {
    initial: Board,
    current: Board,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            current: board.clone(),
            initial: board,
        }
    }

    /// The board as the player currently sees it.
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Replaces the puzzle with a freshly loaded board.
    pub fn load(&mut self, board: Board) {
        info!("session loaded a {}x{} board", board.dimensions(), board.dimensions());
        *self = Self::new(board);
    }

    /// Tilts the current board unless that would lose a blue slider.
    pub fn tilt(&mut self, direction: Direction) -> TiltOutcome {
        let next = self.current.tilt(direction);
        if !next.is_valid() {
            debug!("rejected tilt {}: blue slider would be lost", direction);
            return TiltOutcome::Illegal;
        }

        self.current = next;
        if self.current.is_goal() {
            TiltOutcome::Solved
        } else {
            TiltOutcome::Moved
        }
    }

    /// Advances to the next board on a shortest path to a goal.
    pub fn hint(&mut self) -> HintOutcome {
        let result = search_bfs(self.current.clone());
        match result.path {
            None => HintOutcome::NoSolution,
            Some(path) if path.len() == 1 => HintOutcome::AlreadySolved,
            Some(path) => {
                self.current = (*path[1]).clone();
                HintOutcome::Advanced
            }
        }
    }

    /// Goes back to the board the session started with.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }
}
