//! queenclimb search engine
//!
//! This crate provides the local search implementation for N-queens:
//! - Sliding queen moves and their selector
//! - A local search phase parameterized by an acceptor
//!   (plain hill climbing or hill climbing with sideways moves)
//! - A random-restart driver with injectable termination
//! - Configuration wiring (builder module)

pub mod builder;
pub mod heuristic;
pub mod phase;
pub mod restart;
pub mod stats;
pub mod termination;

pub use builder::{
    build_phase, rng_from_config, AcceptorBuilder, ConfiguredPhase, ConfiguredTermination,
    TerminationBuilder,
};
pub use heuristic::{get_move_states, get_moves, Direction, SlideMove, SlidingMoveSelector};
pub use phase::localsearch::{
    get_min_neighbor, hill_climbing, hill_climbing_with_sideways, Acceptor, HillClimbing,
    HillClimbingAcceptor, HillClimbingWithSideways, LocalSearchPhase, MinConflictForager,
    SidewaysAcceptor,
};
pub use phase::{SearchOutcome, SearchStrategy};
pub use restart::{random_restart, RestartOutcome, RestartScope};
pub use stats::{PhaseStats, SolverStats};
pub use termination::{
    AndTermination, NoTermination, OrTermination, RestartCountTermination, Termination,
    TimeTermination,
};
