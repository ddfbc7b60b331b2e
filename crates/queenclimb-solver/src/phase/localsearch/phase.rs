//! Local search phase implementation.

use std::fmt::Debug;

use queenclimb_core::{objective, Board};
use rand::Rng;
use tracing::{debug, trace};

use crate::heuristic::{SlideMove, SlidingMoveSelector};
use crate::phase::localsearch::{
    Acceptor, HillClimbingAcceptor, MinConflictForager, SidewaysAcceptor,
};
use crate::phase::{SearchOutcome, SearchStrategy};
use crate::stats::PhaseStats;

/// Local search phase that climbs from a start board.
///
/// Each step:
/// 1. Records the current board in the path
/// 2. Generates every sliding move and its successor board
/// 3. Scores each successor and lets the forager pick a lowest-objective one
/// 4. Asks the acceptor whether to move there; a rejection ends the search
///
/// # Type Parameters
/// * `A` - The acceptor type
pub struct LocalSearchPhase<A: Acceptor> {
    move_selector: SlidingMoveSelector,
    acceptor: A,
    forager: MinConflictForager,
    last_stats: Option<PhaseStats>,
}

/// Plain steepest-ascent hill climbing.
pub type HillClimbing = LocalSearchPhase<HillClimbingAcceptor>;

/// Hill climbing with bounded sideways moves.
pub type HillClimbingWithSideways = LocalSearchPhase<SidewaysAcceptor>;

impl<A: Acceptor> LocalSearchPhase<A> {
    /// Creates a new local search phase.
    pub fn new(acceptor: A) -> Self {
        Self {
            move_selector: SlidingMoveSelector::new(),
            acceptor,
            forager: MinConflictForager::new(),
            last_stats: None,
        }
    }

    /// Returns statistics of the most recent search, if any.
    pub fn last_stats(&self) -> Option<&PhaseStats> {
        self.last_stats.as_ref()
    }

    /// Climbs from `start` until the acceptor rejects the best neighbor or
    /// the board has no legal moves.
    pub fn solve<R: Rng + ?Sized>(&mut self, start: Board, rng: &mut R) -> SearchOutcome {
        let mut stats = PhaseStats::new(self.acceptor.acceptor_type_name());
        let mut current = start;
        let mut last_step_score = objective(&current);
        let mut path = Vec::new();

        self.acceptor.phase_started(last_step_score);
        debug!(
            event = "phase_start",
            phase = stats.phase_type,
            board_size = current.size(),
            score = last_step_score,
        );

        loop {
            path.push(current.clone());

            let (moves, mut candidates): (Vec<SlideMove>, Vec<Board>) = self
                .move_selector
                .iter_moves(&current)
                .filter_map(|m| m.apply(&current).ok().map(|next| (m, next)))
                .unzip();

            self.forager.step_started();
            for (index, candidate) in candidates.iter().enumerate() {
                self.forager.add_move_index(index, objective(candidate));
                stats.record_move();
            }

            let Some((selected_index, selected_score)) = self.forager.pick_move_index(rng) else {
                // No legal moves at all
                break;
            };

            if !self
                .acceptor
                .is_accepted(last_step_score, selected_score)
            {
                break;
            }

            let sideways = selected_score == last_step_score;
            self.acceptor.step_ended(last_step_score, selected_score);
            stats.record_step(sideways);

            trace!(
                event = "step",
                step = stats.step_count,
                selected = %moves[selected_index],
                tied = self.forager.tied_count(),
                score = selected_score,
                sideways = sideways,
            );

            current = candidates.swap_remove(selected_index);
            last_step_score = selected_score;
        }

        self.acceptor.phase_ended();

        debug!(
            event = "phase_end",
            phase = stats.phase_type,
            duration_ms = stats.elapsed().as_millis() as u64,
            steps = stats.step_count,
            sideways_steps = stats.sideways_step_count,
            moves_evaluated = stats.moves_evaluated,
            score = last_step_score,
        );

        let outcome = SearchOutcome {
            board: current,
            steps: stats.step_count,
            path,
            moves_evaluated: stats.moves_evaluated,
        };
        self.last_stats = Some(stats);
        outcome
    }
}

impl LocalSearchPhase<HillClimbingAcceptor> {
    /// Creates a plain hill climbing phase.
    pub fn hill_climbing() -> Self {
        Self::new(HillClimbingAcceptor::new())
    }
}

impl LocalSearchPhase<SidewaysAcceptor> {
    /// Creates a hill climbing phase allowing `sideways_move_limit`
    /// consecutive plateau moves.
    pub fn with_sideways(sideways_move_limit: u64) -> Self {
        Self::new(SidewaysAcceptor::new(sideways_move_limit))
    }
}

impl<A: Acceptor> Debug for LocalSearchPhase<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSearchPhase")
            .field("move_selector", &self.move_selector)
            .field("acceptor", &self.acceptor)
            .field("forager", &self.forager)
            .finish()
    }
}

impl<A: Acceptor> SearchStrategy for LocalSearchPhase<A> {
    fn search<R: Rng + ?Sized>(&mut self, start: Board, rng: &mut R) -> SearchOutcome {
        self.solve(start, rng)
    }

    fn strategy_name(&self) -> &'static str {
        self.acceptor.acceptor_type_name()
    }
}

/// Runs plain steepest-ascent hill climbing from `board`.
///
/// Stops at the first board whose best neighbor is no better than itself.
///
/// # Example
///
/// ```
/// use queenclimb_core::{objective, Board};
/// use queenclimb_solver::hill_climbing;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let start = Board::from_columns(&[0, 0, 0, 0]).unwrap();
/// let outcome = hill_climbing(start, &mut rng);
///
/// assert_eq!(outcome.path.len() as u64, outcome.steps + 1);
/// assert!(objective(&outcome.board) < 6);
/// ```
pub fn hill_climbing<R: Rng + ?Sized>(board: Board, rng: &mut R) -> SearchOutcome {
    HillClimbing::hill_climbing().solve(board, rng)
}

/// Runs hill climbing with up to [`SidewaysAcceptor::DEFAULT_LIMIT`]
/// consecutive sideways moves from `board`.
pub fn hill_climbing_with_sideways<R: Rng + ?Sized>(board: Board, rng: &mut R) -> SearchOutcome {
    HillClimbingWithSideways::with_sideways(SidewaysAcceptor::DEFAULT_LIMIT).solve(board, rng)
}
