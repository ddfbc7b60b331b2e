//! Search statistics.
//!
//! Stack-allocated counters for single searches and restart runs.

use std::time::{Duration, Instant};

/// Restart-level statistics.
///
/// Tracks aggregate metrics across every attempt of a restart run.
///
/// # Example
///
/// ```
/// use queenclimb_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_attempt(4, 120);
/// stats.record_attempt(2, 60);
///
/// assert_eq!(stats.attempt_count, 2);
/// assert_eq!(stats.step_count, 6);
/// assert_eq!(stats.moves_evaluated, 180);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Searches started, including the one that reached the goal.
    pub attempt_count: u64,
    /// Accepted steps summed over all attempts.
    pub step_count: u64,
    /// Candidate boards scored over all attempts.
    pub moves_evaluated: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records one finished search attempt.
    pub fn record_attempt(&mut self, steps: u64, moves_evaluated: u64) {
        self.attempt_count += 1;
        self.step_count += steps;
        self.moves_evaluated += moves_evaluated;
    }
}

/// Statistics of a single local search run.
///
/// # Example
///
/// ```
/// use queenclimb_solver::stats::PhaseStats;
///
/// let mut stats = PhaseStats::new("HillClimbing");
/// stats.record_move();
/// stats.record_move();
/// stats.record_step(false);
///
/// assert_eq!(stats.phase_type, "HillClimbing");
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.sideways_step_count, 0);
/// assert_eq!(stats.moves_evaluated, 2);
/// ```
#[derive(Debug, Clone)]
pub struct PhaseStats {
    /// Strategy name of this search.
    pub phase_type: &'static str,
    start_time: Instant,
    /// Number of accepted steps.
    pub step_count: u64,
    /// Accepted steps that left the objective unchanged.
    pub sideways_step_count: u64,
    /// Number of candidate boards scored.
    pub moves_evaluated: u64,
}

impl PhaseStats {
    /// Creates new phase statistics.
    pub fn new(phase_type: &'static str) -> Self {
        Self {
            phase_type,
            start_time: Instant::now(),
            step_count: 0,
            sideways_step_count: 0,
            moves_evaluated: 0,
        }
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Records an accepted step.
    pub fn record_step(&mut self, sideways: bool) {
        self.step_count += 1;
        if sideways {
            self.sideways_step_count += 1;
        }
    }

    /// Records a scored candidate.
    pub fn record_move(&mut self) {
        self.moves_evaluated += 1;
    }
}
