//! Search phases.
//!
//! A phase takes one start board and runs a single local search from it.
//! Random restart drives a phase repeatedly; see [`crate::restart`].

pub mod localsearch;

use std::fmt::Debug;

use queenclimb_core::Board;
use rand::Rng;

/// Result of one local search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Board the search stopped at.
    pub board: Board,
    /// Number of accepted moves.
    pub steps: u64,
    /// Every board visited, starting with the start board and ending with
    /// `board`. Always `steps + 1` long.
    pub path: Vec<Board>,
    /// Number of candidate boards scored.
    pub moves_evaluated: u64,
}

impl SearchOutcome {
    /// Returns true if the final board has no conflicts.
    pub fn is_goal(&self) -> bool {
        queenclimb_core::is_goal(&self.board)
    }
}

/// A single-start search strategy.
///
/// Implementations must consume randomness only from `rng`, so that a
/// seeded generator reproduces the run exactly.
pub trait SearchStrategy: Send + Debug {
    /// Searches from `start` until the strategy stops.
    fn search<R: Rng + ?Sized>(&mut self, start: Board, rng: &mut R) -> SearchOutcome;

    /// Returns the name of this strategy.
    fn strategy_name(&self) -> &'static str;
}
