//! Random-restart driver.
//!
//! Runs a [`SearchStrategy`] from fresh random boards until one attempt ends
//! at a goal or the [`Termination`] gives up.

use std::time::Duration;

use queenclimb_core::{objective, Board, QueensError, Result};
use rand::Rng;
use tracing::{debug, info};

use crate::phase::{SearchOutcome, SearchStrategy};
use crate::stats::SolverStats;
use crate::termination::Termination;

/// State of a restart run, visible to terminations.
#[derive(Debug, Clone)]
pub struct RestartScope {
    restarts: u64,
    best_objective: Option<u64>,
    stats: SolverStats,
}

impl RestartScope {
    /// Creates a scope and starts its clock.
    pub fn new() -> Self {
        let mut stats = SolverStats::default();
        stats.start();
        Self {
            restarts: 0,
            best_objective: None,
            stats,
        }
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Number of attempts that ended without reaching the goal.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Accepted steps summed over every attempt so far.
    pub fn total_steps(&self) -> u64 {
        self.stats.step_count
    }

    /// Number of attempts run so far.
    pub fn attempts(&self) -> u64 {
        self.stats.attempt_count
    }

    /// Lowest final objective of any attempt so far.
    pub fn best_objective(&self) -> Option<u64> {
        self.best_objective
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Records a finished attempt and returns its final objective.
    pub fn record_attempt(&mut self, outcome: &SearchOutcome) -> u64 {
        let score = objective(&outcome.board);
        self.stats
            .record_attempt(outcome.steps, outcome.moves_evaluated);
        self.best_objective = Some(self.best_objective.map_or(score, |best| best.min(score)));
        score
    }

    /// Counts one failed attempt.
    pub fn record_restart(&mut self) {
        self.restarts += 1;
    }
}

impl Default for RestartScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a successful restart run.
#[derive(Debug, Clone)]
pub struct RestartOutcome {
    /// The goal board.
    pub board: Board,
    /// Accepted steps summed over every attempt, including failed ones.
    pub total_steps: u64,
    /// Number of failed attempts before the successful one.
    pub restarts: u64,
    /// Path of the successful attempt.
    pub path: Vec<Board>,
    pub stats: SolverStats,
}

/// Searches boards of size `n` with `strategy` until a goal is found.
///
/// Each attempt starts from a fresh [`Board::random`]. After every failed
/// attempt the restart counter is incremented and `termination` is
/// consulted; once it fires, the run stops with
/// [`QueensError::RestartLimitReached`].
///
/// Pass [`NoTermination`](crate::termination::NoTermination) to search
/// without bound. For `n` of 2 or 3 no goal exists, so an unbounded search
/// never returns.
///
/// # Errors
///
/// [`QueensError::InvalidBoardSize`] when `n` is 0, and
/// [`QueensError::RestartLimitReached`] when `termination` stops the run.
///
/// # Example
///
/// ```
/// use queenclimb_core::is_goal;
/// use queenclimb_solver::phase::localsearch::HillClimbingWithSideways;
/// use queenclimb_solver::restart::random_restart;
/// use queenclimb_solver::termination::NoTermination;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut strategy = HillClimbingWithSideways::with_sideways(50);
///
/// let outcome = random_restart(6, &mut strategy, &mut rng, &NoTermination).unwrap();
/// assert!(is_goal(&outcome.board));
/// ```
pub fn random_restart<S, R, T>(
    n: usize,
    strategy: &mut S,
    rng: &mut R,
    termination: &T,
) -> Result<RestartOutcome>
where
    S: SearchStrategy + ?Sized,
    R: Rng + ?Sized,
    T: Termination + ?Sized,
{
    if n == 0 {
        return Err(QueensError::InvalidBoardSize(n));
    }

    let mut scope = RestartScope::new();

    info!(
        event = "solve_start",
        board_size = n,
        strategy = strategy.strategy_name(),
    );

    loop {
        let start = Board::random(n, rng)?;
        let outcome = strategy.search(start, rng);
        let score = scope.record_attempt(&outcome);

        debug!(
            event = "attempt_end",
            attempt = scope.attempts(),
            steps = outcome.steps,
            score = score,
        );

        if score == 0 {
            info!(
                event = "solve_end",
                attempts = scope.attempts(),
                restarts = scope.restarts(),
                total_steps = scope.total_steps(),
                moves_evaluated = scope.stats().moves_evaluated,
                duration_ms = scope.elapsed().as_millis() as u64,
            );
            return Ok(RestartOutcome {
                board: outcome.board,
                total_steps: scope.total_steps(),
                restarts: scope.restarts(),
                path: outcome.path,
                stats: scope.stats,
            });
        }

        scope.record_restart();

        if termination.is_terminated(&scope) {
            let best_objective = scope.best_objective().unwrap_or(score);
            info!(
                event = "solve_terminated",
                restarts = scope.restarts(),
                total_steps = scope.total_steps(),
                best_score = best_objective,
                duration_ms = scope.elapsed().as_millis() as u64,
            );
            return Err(QueensError::RestartLimitReached {
                restarts: scope.restarts(),
                total_steps: scope.total_steps(),
                best_objective,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::localsearch::{HillClimbing, HillClimbingWithSideways};
    use crate::termination::{NoTermination, OrTermination, RestartCountTermination, TimeTermination};
    use queenclimb_core::is_goal;
    use queenclimb_test::seeded_rng;

    #[test]
    fn test_four_queens_always_solved() {
        let mut rng = seeded_rng(5);
        let mut plain = HillClimbing::hill_climbing();
        let mut sideways = HillClimbingWithSideways::with_sideways(50);

        for _ in 0..10 {
            let outcome = random_restart(4, &mut plain, &mut rng, &NoTermination).unwrap();
            assert!(is_goal(&outcome.board));
            assert_eq!(outcome.path.last(), Some(&outcome.board));
            assert_eq!(outcome.stats.attempt_count, outcome.restarts + 1);
            assert_eq!(outcome.stats.step_count, outcome.total_steps);

            let outcome = random_restart(4, &mut sideways, &mut rng, &NoTermination).unwrap();
            assert!(is_goal(&outcome.board));
        }
    }

    #[test]
    fn test_eight_queens_solved() {
        let mut rng = seeded_rng(8);
        let mut strategy = HillClimbingWithSideways::with_sideways(50);

        let outcome = random_restart(8, &mut strategy, &mut rng, &NoTermination).unwrap();
        assert_eq!(objective(&outcome.board), 0);
        assert_eq!(outcome.board.queen_count(), 8);
    }

    #[test]
    fn test_single_queen_solved_without_steps() {
        let mut rng = seeded_rng(0);
        let mut strategy = HillClimbing::hill_climbing();

        let outcome = random_restart(1, &mut strategy, &mut rng, &NoTermination).unwrap();
        assert_eq!(outcome.total_steps, 0);
        assert_eq!(outcome.restarts, 0);
    }

    #[test]
    fn test_unsolvable_sizes_hit_restart_limit() {
        let mut rng = seeded_rng(13);
        let termination = RestartCountTermination::new(5);

        for n in [2, 3] {
            let mut strategy = HillClimbingWithSideways::with_sideways(10);
            let err = random_restart(n, &mut strategy, &mut rng, &termination).unwrap_err();
            match err {
                QueensError::RestartLimitReached {
                    restarts,
                    best_objective,
                    ..
                } => {
                    assert_eq!(restarts, 6);
                    assert!(best_objective > 0);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_zero_limit_allows_single_attempt() {
        let mut rng = seeded_rng(13);
        let mut strategy = HillClimbing::hill_climbing();

        let err = random_restart(
            3,
            &mut strategy,
            &mut rng,
            &RestartCountTermination::new(0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QueensError::RestartLimitReached { restarts: 1, .. }
        ));
    }

    #[test]
    fn test_time_termination_stops_unsolvable_run() {
        let mut rng = seeded_rng(1);
        let mut strategy = HillClimbing::hill_climbing();
        let termination = OrTermination::new((
            RestartCountTermination::new(u64::MAX),
            TimeTermination::millis(20),
        ));

        let err = random_restart(3, &mut strategy, &mut rng, &termination).unwrap_err();
        assert!(matches!(err, QueensError::RestartLimitReached { .. }));
    }

    #[test]
    fn test_scope_clock_is_solver_stats_clock() {
        let scope = RestartScope::new();
        std::thread::sleep(Duration::from_millis(5));

        let elapsed = scope.elapsed();
        assert!(elapsed >= Duration::from_millis(5));
        // Same start instant, read later.
        assert!(scope.stats().elapsed() >= elapsed);
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut rng = seeded_rng(0);
        let mut strategy = HillClimbing::hill_climbing();

        let err = random_restart(0, &mut strategy, &mut rng, &NoTermination).unwrap_err();
        assert_eq!(err, QueensError::InvalidBoardSize(0));
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let run = |seed| {
            let mut rng = seeded_rng(seed);
            let mut strategy = HillClimbing::hill_climbing();
            random_restart(8, &mut strategy, &mut rng, &NoTermination).unwrap()
        };
        let a = run(77);
        let b = run(77);

        assert_eq!(a.board, b.board);
        assert_eq!(a.total_steps, b.total_steps);
        assert_eq!(a.restarts, b.restarts);
    }
}
