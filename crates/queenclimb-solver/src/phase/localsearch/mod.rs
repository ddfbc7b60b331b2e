//! Local search phase
//!
//! Climbs from a start board by repeatedly moving to a lowest-objective
//! neighbor, as long as the acceptor agrees.

mod acceptor;
mod forager;
mod phase;

pub use acceptor::{Acceptor, HillClimbingAcceptor, SidewaysAcceptor};
pub use forager::{get_min_neighbor, MinConflictForager};
pub use phase::{
    hill_climbing, hill_climbing_with_sideways, HillClimbing, HillClimbingWithSideways,
    LocalSearchPhase,
};
