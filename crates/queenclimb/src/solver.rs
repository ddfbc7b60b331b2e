//! Solver entry point that hides all internal wiring.

use queenclimb_config::SolverConfig;
use queenclimb_core::Result;
use queenclimb_solver::{build_phase, random_restart, rng_from_config, RestartOutcome, TerminationBuilder};
use tracing::warn;

/// Configuration file read by [`solve`].
pub const CONFIG_FILE: &str = "queenclimb.toml";

/// Solves N-queens with random restart, configured from [`CONFIG_FILE`].
///
/// Falls back to the default configuration when the file is missing or
/// invalid.
pub fn solve() -> Result<RestartOutcome> {
    let config = match SolverConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(err) => {
            warn!(event = "config_fallback", file = CONFIG_FILE, error = %err);
            SolverConfig::default()
        }
    };
    solve_with_config(&config)
}

/// Solves N-queens with random restart as described by `config`.
///
/// # Example
///
/// ```
/// use queenclimb::{is_goal, solve_with_config, SearchType, SolverConfig};
///
/// let config = SolverConfig::new()
///     .with_board_size(6)
///     .with_search_type(SearchType::HillClimbingWithSideways)
///     .with_random_seed(5);
///
/// let outcome = solve_with_config(&config).unwrap();
/// assert!(is_goal(&outcome.board));
/// ```
pub fn solve_with_config(config: &SolverConfig) -> Result<RestartOutcome> {
    let mut phase = build_phase(config);
    let termination = TerminationBuilder::build(config);
    let mut rng = rng_from_config(config);

    random_restart(config.board_size, &mut phase, &mut rng, &termination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenclimb_config::SearchType;
    use queenclimb_core::{is_goal, QueensError};

    #[test]
    fn test_solve_with_default_config() {
        let config = SolverConfig::default().with_random_seed(1);
        let outcome = solve_with_config(&config).unwrap();

        assert_eq!(outcome.board.size(), 8);
        assert!(is_goal(&outcome.board));
    }

    #[test]
    fn test_solve_with_restart_limit_on_unsolvable_board() {
        let config = SolverConfig::new()
            .with_board_size(3)
            .with_search_type(SearchType::HillClimbingWithSideways)
            .with_restart_count_limit(3)
            .with_random_seed(2);

        let err = solve_with_config(&config).unwrap_err();
        assert!(matches!(
            err,
            QueensError::RestartLimitReached { restarts: 4, .. }
        ));
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = SolverConfig::new().with_board_size(8).with_random_seed(42);
        let a = solve_with_config(&config).unwrap();
        let b = solve_with_config(&config).unwrap();

        assert_eq!(a.board, b.board);
        assert_eq!(a.total_steps, b.total_steps);
    }
}
