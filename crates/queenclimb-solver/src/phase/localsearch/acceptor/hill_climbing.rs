//! Hill climbing acceptor.

use super::Acceptor;

/// Hill climbing acceptor - accepts only improving moves.
///
/// The search stops as soon as the best neighbor is no better than the
/// current board, which can leave it stuck in a local optimum.
///
/// # Example
///
/// ```
/// use queenclimb_solver::phase::localsearch::{Acceptor, HillClimbingAcceptor};
///
/// let acceptor = HillClimbingAcceptor::new();
/// assert!(acceptor.is_accepted(5, 3));
/// assert!(!acceptor.is_accepted(3, 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbingAcceptor;

impl HillClimbingAcceptor {
    /// Creates a new hill climbing acceptor.
    pub fn new() -> Self {
        Self
    }
}

impl Acceptor for HillClimbingAcceptor {
    fn is_accepted(&self, last_step_score: u64, move_score: u64) -> bool {
        move_score < last_step_score
    }

    fn acceptor_type_name(&self) -> &'static str {
        "HillClimbing"
    }
}
