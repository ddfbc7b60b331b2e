//! Experiment runner.

use std::fs;
use std::io;
use std::time::Instant;

use queenclimb_core::{objective, Board, QueensError, Result};
use queenclimb_solver::phase::SearchStrategy;
use queenclimb_solver::restart::random_restart;
use queenclimb_solver::termination::Termination;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::ExperimentConfig;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{RestartRun, RestartRunResult, SingleRun, SingleRunResult};

/// Repeats searches and aggregates their outcomes.
///
/// All runs of one call draw from a single generator, seeded from the
/// configuration when a seed is set, so a seeded experiment is reproducible.
///
/// # Example
///
/// ```
/// use queenclimb_benchmark::{Experiment, ExperimentConfig};
/// use queenclimb_solver::phase::localsearch::HillClimbing;
///
/// let experiment = Experiment::new(
///     ExperimentConfig::new("8-queens").with_run_count(20).with_random_seed(1),
/// );
/// let result = experiment.run_single(&mut HillClimbing::hill_climbing()).unwrap();
///
/// assert_eq!(result.run_count(), 20);
/// assert!((result.success_rate() + result.failure_rate() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.config.random_seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Runs `run_count` single searches from fresh random boards.
    ///
    /// # Errors
    ///
    /// [`QueensError::InvalidBoardSize`] when the board size is 0.
    pub fn run_single<S>(&self, strategy: &mut S) -> Result<SingleRunResult>
    where
        S: SearchStrategy + ?Sized,
    {
        let n = self.config.board_size();
        let mut rng = self.rng();

        for _ in 0..self.config.warmup_count() {
            strategy.search(Board::random(n, &mut rng)?, &mut rng);
        }

        let mut result = SingleRunResult::new(self.config.name(), strategy.strategy_name(), n);
        info!(
            event = "experiment_start",
            mode = "single",
            name = self.config.name(),
            strategy = strategy.strategy_name(),
            board_size = n,
            runs = self.config.run_count(),
        );

        for run_index in 0..self.config.run_count() {
            let start = Board::random(n, &mut rng)?;
            let started = Instant::now();
            let outcome = strategy.search(start, &mut rng);
            let final_objective = objective(&outcome.board);

            debug!(
                event = "run_end",
                run = run_index,
                steps = outcome.steps,
                score = final_objective,
            );

            result.add_run(SingleRun {
                run_index,
                solved: final_objective == 0,
                steps: outcome.steps,
                final_objective,
                moves_evaluated: outcome.moves_evaluated,
                solve_time: started.elapsed(),
            });
        }

        info!(
            event = "experiment_end",
            mode = "single",
            success_rate = result.success_rate(),
            failure_rate = result.failure_rate(),
        );
        Ok(result)
    }

    /// Runs `run_count` random-restart searches.
    ///
    /// A run stopped by `termination` is recorded as terminated rather than
    /// failing the experiment.
    ///
    /// # Errors
    ///
    /// [`QueensError::InvalidBoardSize`] when the board size is 0.
    pub fn run_restart<S, T>(&self, strategy: &mut S, termination: &T) -> Result<RestartRunResult>
    where
        S: SearchStrategy + ?Sized,
        T: Termination + ?Sized,
    {
        let n = self.config.board_size();
        let mut rng = self.rng();
        let mut result = RestartRunResult::new(self.config.name(), strategy.strategy_name(), n);

        info!(
            event = "experiment_start",
            mode = "restart",
            name = self.config.name(),
            strategy = strategy.strategy_name(),
            board_size = n,
            runs = self.config.run_count(),
        );

        for run_index in 0..self.config.run_count() {
            let started = Instant::now();
            let run = match random_restart(n, strategy, &mut rng, termination) {
                Ok(outcome) => RestartRun {
                    run_index,
                    terminated: false,
                    total_steps: outcome.total_steps,
                    restarts: outcome.restarts,
                    solve_time: started.elapsed(),
                },
                Err(QueensError::RestartLimitReached {
                    restarts,
                    total_steps,
                    ..
                }) => RestartRun {
                    run_index,
                    terminated: true,
                    total_steps,
                    restarts,
                    solve_time: started.elapsed(),
                },
                Err(err) => return Err(err),
            };

            debug!(
                event = "run_end",
                run = run_index,
                total_steps = run.total_steps,
                restarts = run.restarts,
                terminated = run.terminated,
            );
            result.add_run(run);
        }

        info!(
            event = "experiment_end",
            mode = "restart",
            terminated = result.terminated_count(),
            avg_total_steps = result.avg_total_steps().unwrap_or(0.0),
            avg_restarts = result.avg_restarts().unwrap_or(0.0),
        );
        Ok(result)
    }

    /// Writes `<name>-single.csv` and `<name>-single.md` into the configured
    /// output directory.
    ///
    /// Does nothing when no output directory is set.
    pub fn export_single(&self, result: &SingleRunResult) -> io::Result<()> {
        self.export(
            "single",
            &CsvExporter::single(result),
            &MarkdownReport::single(result),
        )
    }

    /// Writes `<name>-restart.csv` and `<name>-restart.md` into the
    /// configured output directory.
    ///
    /// Does nothing when no output directory is set.
    pub fn export_restart(&self, result: &RestartRunResult) -> io::Result<()> {
        self.export(
            "restart",
            &CsvExporter::restart(result),
            &MarkdownReport::restart(result),
        )
    }

    fn export(&self, mode: &str, csv: &str, markdown: &str) -> io::Result<()> {
        let Some(dir) = self.config.output_dir() else {
            return Ok(());
        };
        fs::create_dir_all(dir)?;

        let stem = format!("{}-{mode}", self.config.name());
        CsvExporter::to_file(csv, dir.join(format!("{stem}.csv")))?;
        MarkdownReport::to_file(markdown, dir.join(format!("{stem}.md")))?;

        info!(
            event = "experiment_exported",
            mode = mode,
            dir = %dir.display(),
        );
        Ok(())
    }
}
