//! Forager for local search neighbor selection
//!
//! The forager collects the objective of every candidate during a step and
//! picks one of the candidates tied for the lowest objective, uniformly at
//! random. Without the random tie-break, hill climbing on the symmetric
//! N-queens landscape would be biased toward enumeration order.

use queenclimb_core::{objective, Board};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Collects `(index, objective)` pairs and picks among the minimum.
///
/// Candidates are referenced by index; the caller keeps ownership of the
/// boards and takes the selected one out afterwards.
///
/// # Example
///
/// ```
/// use queenclimb_solver::phase::localsearch::MinConflictForager;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let mut forager = MinConflictForager::new();
/// forager.step_started();
/// forager.add_move_index(0, 4);
/// forager.add_move_index(1, 2);
/// forager.add_move_index(2, 2);
///
/// let (index, score) = forager.pick_move_index(&mut rng).unwrap();
/// assert_eq!(score, 2);
/// assert!(index == 1 || index == 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinConflictForager {
    best_score: Option<u64>,
    tied: Vec<usize>,
}

impl MinConflictForager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the forager at the start of a step.
    pub fn step_started(&mut self) {
        self.best_score = None;
        self.tied.clear();
    }

    /// Records the objective of candidate `index`.
    pub fn add_move_index(&mut self, index: usize, score: u64) {
        match self.best_score {
            Some(best) if score > best => {}
            Some(best) if score == best => self.tied.push(index),
            _ => {
                self.best_score = Some(score);
                self.tied.clear();
                self.tied.push(index);
            }
        }
    }

    /// Returns the lowest objective recorded this step.
    pub fn best_score(&self) -> Option<u64> {
        self.best_score
    }

    /// Returns how many candidates share the lowest objective.
    pub fn tied_count(&self) -> usize {
        self.tied.len()
    }

    /// Picks one of the tied candidates uniformly at random.
    ///
    /// Returns None if no candidate was recorded.
    pub fn pick_move_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, u64)> {
        let best = self.best_score?;
        self.tied.choose(rng).map(|&index| (index, best))
    }
}

/// Returns one of the `candidates` with the lowest objective, chosen
/// uniformly at random among ties.
///
/// Returns None when `candidates` is empty.
pub fn get_min_neighbor<R: Rng + ?Sized>(mut candidates: Vec<Board>, rng: &mut R) -> Option<Board> {
    let mut forager = MinConflictForager::new();
    forager.step_started();
    for (index, candidate) in candidates.iter().enumerate() {
        forager.add_move_index(index, objective(candidate));
    }
    let (index, _) = forager.pick_move_index(rng)?;
    Some(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use queenclimb_test::{four_queens_solution, seeded_rng};
    use std::collections::HashSet;

    #[test]
    fn test_forager_empty() {
        let mut rng = seeded_rng(0);
        let mut forager = MinConflictForager::new();
        forager.step_started();

        assert!(forager.pick_move_index(&mut rng).is_none());
        assert_eq!(forager.best_score(), None);
    }

    #[test]
    fn test_forager_keeps_only_minimum() {
        let mut forager = MinConflictForager::new();
        forager.step_started();

        forager.add_move_index(0, 5);
        forager.add_move_index(1, 3);
        forager.add_move_index(2, 7);
        forager.add_move_index(3, 3);

        assert_eq!(forager.best_score(), Some(3));
        assert_eq!(forager.tied_count(), 2);
    }

    #[test]
    fn test_forager_resets_on_step() {
        let mut rng = seeded_rng(0);
        let mut forager = MinConflictForager::new();

        forager.step_started();
        forager.add_move_index(0, 1);

        forager.step_started();
        assert!(forager.pick_move_index(&mut rng).is_none());
    }

    #[test]
    fn test_forager_tie_break_reaches_every_tied_index() {
        let mut rng = seeded_rng(21);
        let mut forager = MinConflictForager::new();
        forager.step_started();
        for index in 0..4 {
            forager.add_move_index(index, 2);
        }
        forager.add_move_index(4, 1);
        forager.add_move_index(5, 1);
        forager.add_move_index(6, 1);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let (index, score) = forager.pick_move_index(&mut rng).unwrap();
            assert_eq!(score, 1);
            seen.insert(index);
        }
        assert_eq!(seen, HashSet::from([4, 5, 6]));
    }

    #[test]
    fn test_get_min_neighbor_returns_minimum() {
        let mut rng = seeded_rng(8);
        let candidates = vec![
            Board::from_columns(&[0, 0, 0, 0]).unwrap(),
            four_queens_solution(),
            Board::from_columns(&[0, 1, 2, 3]).unwrap(),
        ];
        let min = candidates.iter().map(objective).min().unwrap();

        let picked = get_min_neighbor(candidates, &mut rng).unwrap();
        assert_eq!(objective(&picked), min);
        assert_eq!(picked, four_queens_solution());
    }

    #[test]
    fn test_get_min_neighbor_empty() {
        let mut rng = seeded_rng(8);
        assert!(get_min_neighbor(Vec::new(), &mut rng).is_none());
    }
}
