//! Configuration system for queenclimb.
//!
//! Load search configuration from TOML or YAML files to control board size,
//! search strategy, seeding and restart termination without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use queenclimb_config::{SearchType, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     board_size = 12
//!     search_type = "hill_climbing_with_sideways"
//!     sideways_move_limit = 100
//!
//!     [termination]
//!     restart_count_limit = 500
//!     seconds_spent_limit = 10
//! "#).unwrap();
//!
//! assert_eq!(config.board_size, 12);
//! assert_eq!(config.search_type, SearchType::HillClimbingWithSideways);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use queenclimb_config::SolverConfig;
//!
//! let config = SolverConfig::load("queenclimb.toml").unwrap_or_default();
//! assert_eq!(config.sideways_move_limit, 50);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default board size when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default cap on consecutive sideways moves.
pub const DEFAULT_SIDEWAYS_MOVE_LIMIT: u64 = 50;

/// Default number of runs per experiment.
pub const DEFAULT_RUN_COUNT: usize = 100;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Search strategy run from every start state.
    #[serde(default)]
    pub search_type: SearchType,

    /// Maximum consecutive sideways moves for the sideways strategy.
    #[serde(default = "default_sideways_move_limit")]
    pub sideways_move_limit: u64,

    /// Restart termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Batch experiment configuration.
    #[serde(default)]
    pub experiment: Option<ExperimentConfig>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_sideways_move_limit() -> u64 {
    DEFAULT_SIDEWAYS_MOVE_LIMIT
}

fn default_run_count() -> usize {
    DEFAULT_RUN_COUNT
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            random_seed: None,
            search_type: SearchType::default(),
            sideways_move_limit: DEFAULT_SIDEWAYS_MOVE_LIMIT,
            termination: None,
            experiment: None,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Invalid(
                "board_size must be a positive integer".to_string(),
            ));
        }
        if let Some(termination) = &self.termination {
            if termination.total_seconds().is_none() {
                return Err(ConfigError::Invalid(
                    "termination time limit overflows u64 seconds".to_string(),
                ));
            }
        }
        if let Some(experiment) = &self.experiment {
            if experiment.run_count == 0 {
                return Err(ConfigError::Invalid(
                    "experiment.run_count must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the search strategy.
    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    /// Sets the sideways move cap.
    pub fn with_sideways_move_limit(mut self, limit: u64) -> Self {
        self.sideways_move_limit = limit;
        self
    }

    /// Sets the restart count limit.
    pub fn with_restart_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            restart_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the number of experiment runs.
    pub fn with_run_count(mut self, run_count: usize) -> Self {
        self.experiment = Some(ExperimentConfig { run_count });
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the restart count limit, if configured.
    pub fn restart_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.restart_count_limit)
    }

    /// Returns the number of experiment runs, falling back to the default.
    pub fn run_count(&self) -> usize {
        self.experiment
            .as_ref()
            .map_or(DEFAULT_RUN_COUNT, |e| e.run_count)
    }
}

/// Search strategy run from each start state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Steepest-ascent hill climbing, stops on the first non-improving best neighbor.
    #[default]
    HillClimbing,

    /// Hill climbing that also takes a bounded number of plateau moves.
    HillClimbingWithSideways,
}

/// Restart termination configuration.
///
/// With no limits set the restart driver runs until it reaches a goal state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of restarts.
    pub restart_count_limit: Option<u64>,

    /// Maximum seconds to spend restarting.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend restarting.
    pub minutes_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the combined time limit in seconds, or None when the limits
    /// overflow a `u64`.
    ///
    /// Unset limits count as zero.
    pub fn total_seconds(&self) -> Option<u64> {
        self.minutes_spent_limit
            .unwrap_or(0)
            .checked_mul(60)?
            .checked_add(self.seconds_spent_limit.unwrap_or(0))
    }

    /// Returns the time limit as a Duration, if any.
    ///
    /// An explicit zero is an immediate limit. Totals that overflow saturate
    /// at `u64::MAX` seconds; [`SolverConfig::validate`] rejects them.
    pub fn time_limit(&self) -> Option<Duration> {
        if self.seconds_spent_limit.is_none() && self.minutes_spent_limit.is_none() {
            return None;
        }
        Some(Duration::from_secs(self.total_seconds().unwrap_or(u64::MAX)))
    }

    /// Returns true when no limit is configured.
    pub fn is_unbounded(&self) -> bool {
        self.restart_count_limit.is_none() && self.time_limit().is_none()
    }
}

/// Batch experiment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExperimentConfig {
    /// Number of independent runs.
    #[serde(default = "default_run_count")]
    pub run_count: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            run_count: DEFAULT_RUN_COUNT,
        }
    }
}

#[cfg(test)]
mod tests;
