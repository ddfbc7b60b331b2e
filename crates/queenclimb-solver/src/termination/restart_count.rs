//! Restart count termination.

use super::Termination;
use crate::restart::RestartScope;

/// Allows at most `limit` restarts after the initial attempt.
///
/// A limit of 0 allows only the initial attempt.
///
/// # Example
///
/// ```
/// use queenclimb_solver::termination::RestartCountTermination;
///
/// let term = RestartCountTermination::new(100);
/// assert_eq!(term.limit(), 100);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RestartCountTermination {
    limit: u64,
}

impl RestartCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for RestartCountTermination {
    fn is_terminated(&self, scope: &RestartScope) -> bool {
        scope.restarts() > self.limit
    }
}
