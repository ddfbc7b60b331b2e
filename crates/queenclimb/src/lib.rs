//! queenclimb - N-queens by hill climbing in Rust
//!
//! Zero-wiring API: put a `queenclimb.toml` next to your binary and call
//! [`solve()`].
//!
//! # Example
//!
//! ```rust
//! use queenclimb::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let start = generate_start_state(8, &mut rng).unwrap();
//! let outcome = hill_climbing_with_sideways(start, &mut rng);
//! assert_eq!(outcome.path.len() as u64, outcome.steps + 1);
//! ```

// Board state and objective
pub use queenclimb_core::{
    generate_start_state, is_goal, objective, to_array, Board, QueensError, Result,
};

// Search engine
pub use queenclimb_solver::{
    get_min_neighbor, get_move_states, get_moves, hill_climbing, hill_climbing_with_sideways,
    random_restart, HillClimbing, HillClimbingWithSideways, NoTermination, OrTermination,
    RestartCountTermination, RestartOutcome, SearchOutcome, SearchStrategy, SlideMove,
    Termination, TimeTermination,
};

// Configuration
pub use queenclimb_config::{SearchType, SolverConfig};

mod solver;
pub use solver::{solve, solve_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        generate_start_state, hill_climbing, hill_climbing_with_sideways, is_goal, objective,
        random_restart, to_array, Board, QueensError, SearchStrategy, SolverConfig,
    };
    pub use super::{HillClimbing, HillClimbingWithSideways, NoTermination};
}
