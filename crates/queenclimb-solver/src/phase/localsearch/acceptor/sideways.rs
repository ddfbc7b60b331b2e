//! Hill climbing acceptor with bounded sideways moves.

use super::Acceptor;

/// Hill climbing acceptor that also takes plateau moves.
///
/// It accepts:
/// 1. Any improving move (resets the sideways counter)
/// 2. An equal-objective move while fewer than `sideways_move_limit`
///    consecutive sideways moves have been taken
///
/// Worsening moves are always rejected.
///
/// # Example
///
/// ```
/// use queenclimb_solver::phase::localsearch::{Acceptor, SidewaysAcceptor};
///
/// let mut acceptor = SidewaysAcceptor::new(1);
/// acceptor.phase_started(4);
///
/// assert!(acceptor.is_accepted(4, 4));
/// acceptor.step_ended(4, 4);
/// assert!(!acceptor.is_accepted(4, 4));
///
/// // Improving moves are always taken and refill the budget.
/// assert!(acceptor.is_accepted(4, 3));
/// acceptor.step_ended(4, 3);
/// assert!(acceptor.is_accepted(3, 3));
/// ```
#[derive(Debug, Clone)]
pub struct SidewaysAcceptor {
    sideways_move_limit: u64,
    sideways_moves: u64,
}

impl SidewaysAcceptor {
    /// Default cap on consecutive sideways moves.
    pub const DEFAULT_LIMIT: u64 = 50;

    /// Creates a sideways acceptor allowing `sideways_move_limit`
    /// consecutive plateau moves.
    pub fn new(sideways_move_limit: u64) -> Self {
        Self {
            sideways_move_limit,
            sideways_moves: 0,
        }
    }

    /// Returns the configured cap.
    pub fn sideways_move_limit(&self) -> u64 {
        self.sideways_move_limit
    }

    /// Returns the number of consecutive sideways moves taken so far.
    pub fn sideways_moves(&self) -> u64 {
        self.sideways_moves
    }
}

impl Default for SidewaysAcceptor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl Acceptor for SidewaysAcceptor {
    fn is_accepted(&self, last_step_score: u64, move_score: u64) -> bool {
        if move_score < last_step_score {
            return true;
        }
        move_score == last_step_score && self.sideways_moves < self.sideways_move_limit
    }

    fn acceptor_type_name(&self) -> &'static str {
        "HillClimbingWithSideways"
    }

    fn phase_started(&mut self, _initial_score: u64) {
        self.sideways_moves = 0;
    }

    fn step_ended(&mut self, last_step_score: u64, step_score: u64) {
        if step_score < last_step_score {
            self.sideways_moves = 0;
        } else {
            self.sideways_moves += 1;
        }
    }

    fn phase_ended(&mut self) {
        self.sideways_moves = 0;
    }
}
