//! Acceptors for local search move acceptance.
//!
//! Each step the forager offers the best neighbor; the acceptor compares its
//! objective with the current one and decides whether the search moves on or
//! stops. Objectives are conflict counts, so lower is better.

mod hill_climbing;
mod sideways;

use std::fmt::Debug;

pub use hill_climbing::HillClimbingAcceptor;
pub use sideways::SidewaysAcceptor;

/// Trait for accepting or rejecting the best neighbor in local search.
///
/// A rejected neighbor ends the search: the current board is returned as
/// the final state.
pub trait Acceptor: Send + Debug {
    /// Returns true if moving from `last_step_score` to `move_score` should
    /// be accepted.
    fn is_accepted(&self, last_step_score: u64, move_score: u64) -> bool;

    /// Short name used in logs and reports.
    fn acceptor_type_name(&self) -> &'static str;

    /// Called when a search starts.
    fn phase_started(&mut self, _initial_score: u64) {}

    /// Called when a search ends.
    fn phase_ended(&mut self) {}

    /// Called after an accepted step.
    fn step_ended(&mut self, _last_step_score: u64, _step_score: u64) {}
}

impl<A: Acceptor + ?Sized> Acceptor for Box<A> {
    fn is_accepted(&self, last_step_score: u64, move_score: u64) -> bool {
        (**self).is_accepted(last_step_score, move_score)
    }

    fn acceptor_type_name(&self) -> &'static str {
        (**self).acceptor_type_name()
    }

    fn phase_started(&mut self, initial_score: u64) {
        (**self).phase_started(initial_score);
    }

    fn phase_ended(&mut self) {
        (**self).phase_ended();
    }

    fn step_ended(&mut self, last_step_score: u64, step_score: u64) {
        (**self).step_ended(last_step_score, step_score);
    }
}

#[cfg(test)]
mod tests;
