//! Batch experiments for queenclimb.
//!
//! Repeats single-start searches or random-restart searches many times and
//! reports how often and how quickly each strategy reaches a goal:
//! - success and failure counts and rates
//! - average steps of successful and of failed runs
//! - average total steps and restarts of restart runs
//!
//! Results export to CSV and Markdown.
//!
//! # Example
//!
//! ```
//! use queenclimb_benchmark::{Experiment, ExperimentConfig, MarkdownReport};
//! use queenclimb_solver::phase::localsearch::HillClimbingWithSideways;
//!
//! let config = ExperimentConfig::new("8-queens")
//!     .with_board_size(8)
//!     .with_run_count(10)
//!     .with_random_seed(7);
//! let experiment = Experiment::new(config);
//!
//! let mut strategy = HillClimbingWithSideways::with_sideways(50);
//! let result = experiment.run_single(&mut strategy).unwrap();
//! println!("{}", MarkdownReport::single(&result));
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::ExperimentConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{RestartRun, RestartRunResult, SingleRun, SingleRunResult};
pub use runner::Experiment;
