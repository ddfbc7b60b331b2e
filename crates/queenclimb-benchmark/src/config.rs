//! Experiment configuration.

use std::path::{Path, PathBuf};

use queenclimb_config::{SolverConfig, DEFAULT_BOARD_SIZE, DEFAULT_RUN_COUNT};

/// Configuration for an experiment.
///
/// Controls the board size, the number of measured runs and the seed of the
/// generator shared by all runs.
///
/// # Example
///
/// ```
/// use queenclimb_benchmark::ExperimentConfig;
///
/// let config = ExperimentConfig::new("8-queens")
///     .with_board_size(8)
///     .with_run_count(10)
///     .with_random_seed(42);
///
/// assert_eq!(config.name(), "8-queens");
/// assert_eq!(config.run_count(), 10);
/// assert_eq!(config.random_seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    name: String,
    board_size: usize,
    warmup_count: usize,
    run_count: usize,
    random_seed: Option<u64>,
    output_dir: Option<PathBuf>,
}

impl ExperimentConfig {
    /// Creates a new experiment configuration with the given name.
    ///
    /// Defaults:
    /// - board_size: 8
    /// - warmup_count: 0
    /// - run_count: 100
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board_size: DEFAULT_BOARD_SIZE,
            warmup_count: 0,
            run_count: DEFAULT_RUN_COUNT,
            random_seed: None,
            output_dir: None,
        }
    }

    /// Creates an experiment configuration from solver configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use queenclimb_benchmark::ExperimentConfig;
    /// use queenclimb_config::SolverConfig;
    ///
    /// let solver_config = SolverConfig::new()
    ///     .with_board_size(6)
    ///     .with_run_count(25);
    /// let config = ExperimentConfig::from_solver_config("six", &solver_config);
    ///
    /// assert_eq!(config.board_size(), 6);
    /// assert_eq!(config.run_count(), 25);
    /// ```
    pub fn from_solver_config(name: impl Into<String>, config: &SolverConfig) -> Self {
        Self {
            board_size: config.board_size,
            run_count: config.run_count(),
            random_seed: config.random_seed,
            ..Self::new(name)
        }
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the number of warmup runs (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measured runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Seeds the generator shared by all runs.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the directory that receives CSV and Markdown exports.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Returns the export directory, if set.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self::new("Experiment")
    }
}
