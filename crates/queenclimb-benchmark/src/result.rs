//! Experiment result types.

use std::time::Duration;

/// Result of one single-start search.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// True if the search ended at a goal board.
    pub solved: bool,
    /// Accepted steps.
    pub steps: u64,
    /// Objective of the final board.
    pub final_objective: u64,
    /// Candidate boards scored.
    pub moves_evaluated: u64,
    pub solve_time: Duration,
}

/// Aggregated results of repeated single-start searches.
///
/// # Example
///
/// ```
/// use queenclimb_benchmark::{SingleRun, SingleRunResult};
/// use std::time::Duration;
///
/// let mut result = SingleRunResult::new("8-queens", "HillClimbing", 8);
/// for (run_index, (solved, steps)) in [(true, 4), (false, 3), (true, 6)].into_iter().enumerate() {
///     result.add_run(SingleRun {
///         run_index,
///         solved,
///         steps,
///         final_objective: if solved { 0 } else { 1 },
///         moves_evaluated: 100,
///         solve_time: Duration::from_millis(1),
///     });
/// }
///
/// assert_eq!(result.success_count(), 2);
/// assert_eq!(result.avg_success_steps(), Some(5.0));
/// assert_eq!(result.avg_failure_steps(), Some(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct SingleRunResult {
    /// Experiment name.
    pub name: String,
    /// Strategy that produced the runs.
    pub strategy_name: String,
    pub board_size: usize,
    /// Individual runs.
    pub runs: Vec<SingleRun>,
}

impl SingleRunResult {
    /// Creates an empty result.
    pub fn new(name: impl Into<String>, strategy_name: impl Into<String>, board_size: usize) -> Self {
        Self {
            name: name.into(),
            strategy_name: strategy_name.into(),
            board_size,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: SingleRun) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the number of runs that reached a goal.
    pub fn success_count(&self) -> usize {
        self.runs.iter().filter(|r| r.solved).count()
    }

    /// Returns the number of runs stuck at a non-goal board.
    pub fn failure_count(&self) -> usize {
        self.run_count() - self.success_count()
    }

    /// Returns the fraction of runs that reached a goal, 0 with no runs.
    pub fn success_rate(&self) -> f64 {
        ratio(self.success_count(), self.run_count())
    }

    /// Returns the fraction of runs that failed, 0 with no runs.
    pub fn failure_rate(&self) -> f64 {
        ratio(self.failure_count(), self.run_count())
    }

    /// Returns the average steps of successful runs, None if there were none.
    pub fn avg_success_steps(&self) -> Option<f64> {
        average(self.runs.iter().filter(|r| r.solved).map(|r| r.steps))
    }

    /// Returns the average steps of failed runs, None if there were none.
    pub fn avg_failure_steps(&self) -> Option<f64> {
        average(self.runs.iter().filter(|r| !r.solved).map(|r| r.steps))
    }

    /// Returns the average solve time.
    pub fn avg_solve_time(&self) -> Duration {
        average_duration(self.runs.iter().map(|r| r.solve_time))
    }

    /// Returns the total moves evaluated across runs.
    pub fn total_moves_evaluated(&self) -> u64 {
        self.runs.iter().map(|r| r.moves_evaluated).sum()
    }
}

/// Result of one random-restart search.
#[derive(Debug, Clone, PartialEq)]
pub struct RestartRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// True if the restart termination stopped the run before a goal.
    pub terminated: bool,
    /// Accepted steps summed over all attempts.
    pub total_steps: u64,
    /// Failed attempts.
    pub restarts: u64,
    pub solve_time: Duration,
}

/// Aggregated results of repeated random-restart searches.
///
/// Averages cover solved runs only; runs stopped by the termination are
/// counted by [`terminated_count`](Self::terminated_count).
#[derive(Debug, Clone)]
pub struct RestartRunResult {
    /// Experiment name.
    pub name: String,
    /// Strategy run inside each attempt.
    pub strategy_name: String,
    pub board_size: usize,
    /// Individual runs.
    pub runs: Vec<RestartRun>,
}

impl RestartRunResult {
    /// Creates an empty result.
    pub fn new(name: impl Into<String>, strategy_name: impl Into<String>, board_size: usize) -> Self {
        Self {
            name: name.into(),
            strategy_name: strategy_name.into(),
            board_size,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: RestartRun) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the number of runs stopped by the termination.
    pub fn terminated_count(&self) -> usize {
        self.runs.iter().filter(|r| r.terminated).count()
    }

    fn solved(&self) -> impl Iterator<Item = &RestartRun> {
        self.runs.iter().filter(|r| !r.terminated)
    }

    /// Returns the average total steps of solved runs.
    pub fn avg_total_steps(&self) -> Option<f64> {
        average(self.solved().map(|r| r.total_steps))
    }

    /// Returns the average number of restarts of solved runs.
    pub fn avg_restarts(&self) -> Option<f64> {
        average(self.solved().map(|r| r.restarts))
    }

    /// Returns the average solve time over all runs.
    pub fn avg_solve_time(&self) -> Duration {
        average_duration(self.runs.iter().map(|r| r.solve_time))
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

fn average(values: impl Iterator<Item = u64>) -> Option<f64> {
    let (sum, count) = values.fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

fn average_duration(times: impl Iterator<Item = Duration>) -> Duration {
    let (total, count) = times.fold((Duration::ZERO, 0u32), |(total, count), t| {
        (total + t, count + 1)
    });
    if count == 0 {
        Duration::ZERO
    } else {
        total / count
    }
}
