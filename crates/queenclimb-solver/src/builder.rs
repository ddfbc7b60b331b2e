//! Builder module for constructing solver components from configuration
//!
//! This module provides the wiring between [`SolverConfig`] and the search
//! engine, restart terminations and random number generator.

use queenclimb_config::{SearchType, SolverConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::phase::localsearch::{
    Acceptor, HillClimbingAcceptor, LocalSearchPhase, SidewaysAcceptor,
};
use crate::termination::{OrTermination, RestartCountTermination, TimeTermination};

/// Termination built from configuration; absent limits never fire.
pub type ConfiguredTermination =
    OrTermination<(Option<RestartCountTermination>, Option<TimeTermination>)>;

/// Local search phase whose acceptor is chosen at runtime.
pub type ConfiguredPhase = LocalSearchPhase<Box<dyn Acceptor>>;

/// Builder for constructing acceptors from configuration.
pub struct AcceptorBuilder;

impl AcceptorBuilder {
    /// Builds the acceptor selected by `search_type`.
    pub fn build(config: &SolverConfig) -> Box<dyn Acceptor> {
        match config.search_type {
            SearchType::HillClimbing => Box::new(HillClimbingAcceptor::new()),
            SearchType::HillClimbingWithSideways => {
                Box::new(SidewaysAcceptor::new(config.sideways_move_limit))
            }
        }
    }
}

/// Builds the local search phase for a configuration.
pub fn build_phase(config: &SolverConfig) -> ConfiguredPhase {
    LocalSearchPhase::new(AcceptorBuilder::build(config))
}

/// Builder for constructing restart terminations from configuration.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Builds the restart termination; with no `termination` section it
    /// never fires.
    pub fn build(config: &SolverConfig) -> ConfiguredTermination {
        OrTermination::new((
            config.restart_count_limit().map(RestartCountTermination::new),
            config.time_limit().map(TimeTermination::new),
        ))
    }
}

/// Creates the random number generator for a run.
///
/// Seeded from `random_seed` when set, otherwise from the thread RNG.
pub fn rng_from_config(config: &SolverConfig) -> ChaCha8Rng {
    match config.random_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::SearchStrategy;
    use crate::restart::RestartScope;
    use crate::termination::Termination;
    use rand::Rng;

    #[test]
    fn test_acceptor_builder_hill_climbing() {
        let acceptor = AcceptorBuilder::build(&SolverConfig::new());
        assert_eq!(acceptor.acceptor_type_name(), "HillClimbing");
        assert!(!acceptor.is_accepted(3, 3));
    }

    #[test]
    fn test_acceptor_builder_sideways() {
        let config = SolverConfig::new()
            .with_search_type(SearchType::HillClimbingWithSideways)
            .with_sideways_move_limit(0);
        let acceptor = AcceptorBuilder::build(&config);

        assert_eq!(acceptor.acceptor_type_name(), "HillClimbingWithSideways");
        // A zero budget behaves like plain hill climbing.
        assert!(!acceptor.is_accepted(3, 3));
        assert!(acceptor.is_accepted(3, 2));
    }

    #[test]
    fn test_build_phase_uses_configured_acceptor() {
        let config = SolverConfig::new().with_search_type(SearchType::HillClimbingWithSideways);
        let phase = build_phase(&config);
        assert_eq!(phase.strategy_name(), "HillClimbingWithSideways");
    }

    #[test]
    fn test_termination_builder_unbounded() {
        let termination = TerminationBuilder::build(&SolverConfig::new());
        let mut scope = RestartScope::new();
        for _ in 0..1_000 {
            scope.record_restart();
        }
        assert!(!termination.is_terminated(&scope));
    }

    #[test]
    fn test_termination_builder_restart_limit() {
        let config = SolverConfig::new().with_restart_count_limit(2);
        let termination = TerminationBuilder::build(&config);

        let mut scope = RestartScope::new();
        scope.record_restart();
        scope.record_restart();
        assert!(!termination.is_terminated(&scope));
        scope.record_restart();
        assert!(termination.is_terminated(&scope));
    }

    #[test]
    fn test_zero_seconds_limit_stops_after_first_attempt() {
        let config =
            SolverConfig::from_toml_str("random_seed = 4\n[termination]\nseconds_spent_limit = 0")
                .unwrap();
        let termination = TerminationBuilder::build(&config);
        let mut phase = build_phase(&config);
        let mut rng = rng_from_config(&config);

        let err = crate::restart::random_restart(3, &mut phase, &mut rng, &termination).unwrap_err();
        assert!(matches!(
            err,
            queenclimb_core::QueensError::RestartLimitReached { restarts: 1, .. }
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = SolverConfig::new().with_random_seed(9);
        let mut a = rng_from_config(&config);
        let mut b = rng_from_config(&config);
        for _ in 0..8 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }
}
