//! Tilt Puzzle Solver Library
//!
//! A puzzle-agnostic breadth-first and depth-first search engine, and the
//! tilt sliding puzzle as its main [`Configuration`].

pub mod error;
pub mod grid;
pub mod persistence;
pub mod pieces;
pub mod session;
pub mod solver;

use std::hash::Hash;

pub use error::BoardError;
pub use grid::Board;
pub use pieces::{Direction, Piece};
pub use solver::{search_bfs, search_dfs, search_dfs_visited, SearchResult};

/// One state of a search problem.
///
/// The solver only ever talks to states through this trait, so any puzzle
/// can be searched once it describes its goal, its legality rule and its
/// one-step transitions.
///
/// `Eq` and `Hash` must agree: the breadth-first search deduplicates on
/// them, and equal states are treated as interchangeable.
pub trait Configuration: Eq + Hash + Sized {
    /// True if this state solves the puzzle.
    fn is_goal(&self) -> bool;

    /// True if this state is legal. Depth-first search never descends into
    /// an invalid state.
    fn is_valid(&self) -> bool;

    /// States reachable in exactly one transition, in a deterministic order.
    fn successors(&self) -> Vec<Self>;
}
