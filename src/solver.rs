//! Generic state-space search.
//!
//! Everything here works through the [`Configuration`] trait and never
//! looks inside a state:
//! - `search_bfs` returns a shortest path plus expansion counts
//! - `search_dfs` is plain recursive backtracking with validity pruning
//! - `search_dfs_visited` is the same walk with a visited set, for cyclic spaces

use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Configuration;

/// Outcome of a breadth-first search.
#[derive(Debug)]
pub struct SearchResult<C> {
    /// States from the start to the goal, both included. `None` when no
    /// goal is reachable.
    pub path: Option<Vec<Rc<C>>>,
    /// Successors generated, counting repeats, plus one for the start.
    pub total_expansions: usize,
    /// Distinct states discovered, including the start.
    pub unique_configurations: usize,
}

impl<C> SearchResult<C> {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of transitions on the solution path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len() - 1)
    }
}

/// Breadth-first search from `start` to the nearest goal.
///
/// States are deduplicated on first discovery, so the returned path has the
/// fewest transitions of any path to a goal. Successors are taken as-is;
/// filtering out invalid states is up to [`Configuration::successors`].
pub fn search_bfs<C: Configuration>(start: C) -> SearchResult<C> {
    let start = Rc::new(start);

    let mut frontier: VecDeque<Rc<C>> = VecDeque::new();
    let mut predecessors: FxHashMap<Rc<C>, Option<Rc<C>>> = FxHashMap::default();
    let mut total_expansions = 1;
    let mut unique_configurations = 1;

    predecessors.insert(Rc::clone(&start), None);
    frontier.push_back(start);

    let goal = loop {
        let Some(current) = frontier.pop_front() else {
            break None;
        };
        if current.is_goal() {
            break Some(current);
        }

        trace!(
            "expanding state, frontier={}, discovered={}",
            frontier.len(),
            unique_configurations
        );

        for successor in current.successors() {
            total_expansions += 1;
            if predecessors.contains_key(&successor) {
                continue;
            }
            unique_configurations += 1;
            let successor = Rc::new(successor);
            predecessors.insert(Rc::clone(&successor), Some(Rc::clone(&current)));
            frontier.push_back(successor);
        }
    };

    let path = goal.map(|goal| reconstruct_path(&predecessors, goal));

    match &path {
        Some(path) => debug!(
            "bfs solved in {} steps (total={}, unique={})",
            path.len() - 1,
            total_expansions,
            unique_configurations
        ),
        None => debug!(
            "bfs exhausted without a goal (total={}, unique={})",
            total_expansions, unique_configurations
        ),
    }

    SearchResult {
        path,
        total_expansions,
        unique_configurations,
    }
}

/// Walks the predecessor links back from `goal` and returns start-first order.
fn reconstruct_path<C: Configuration>(
    predecessors: &FxHashMap<Rc<C>, Option<Rc<C>>>,
    goal: Rc<C>,
) -> Vec<Rc<C>> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);

    while let Some(config) = cursor {
        cursor = predecessors.get(&*config).cloned().flatten();
        path.push(config);
    }

    path.reverse();
    path
}

/// Recursive depth-first search returning the first goal found.
///
/// Successors are tried in enumeration order and invalid ones are skipped.
/// There is no visited set: on a state space with cycles this recurses
/// until the stack overflows. Use [`search_dfs_visited`] for those.
pub fn search_dfs<C: Configuration>(start: C) -> Option<C> {
    if start.is_goal() {
        return Some(start);
    }

    start
        .successors()
        .into_iter()
        .filter(Configuration::is_valid)
        .find_map(search_dfs)
}

/// Depth-first search that never expands a state twice.
///
/// Visits states in the same order as [`search_dfs`] but skips anything
/// already seen. Uses an explicit stack, so depth is bounded only by memory.
pub fn search_dfs_visited<C: Configuration>(start: C) -> Option<C> {
    let mut visited: FxHashSet<C> = FxHashSet::default();
    let mut search_stack = vec![start];

    while let Some(config) = search_stack.pop() {
        if visited.contains(&config) {
            continue;
        }
        if config.is_goal() {
            debug!("dfs found a goal after {} states", visited.len() + 1);
            return Some(config);
        }

        let children: Vec<C> = config
            .successors()
            .into_iter()
            .filter(|child| child.is_valid() && !visited.contains(child))
            .collect();
        visited.insert(config);

        // reversed so the first successor is popped first
        search_stack.extend(children.into_iter().rev());
    }

    debug!("dfs exhausted {} states without a goal", visited.len());
    None
}
