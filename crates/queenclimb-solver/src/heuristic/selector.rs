//! Move selector for sliding queen moves.
//!
//! Every queen may slide any number of cells along the eight chess-queen
//! directions, stopping at the board edge or in front of another queen.
//! Enumeration order is fixed: queens in row-major order, then
//! [`Direction::ALL`], then increasing distance. The order matters only for
//! reproducing tie-breaks under a fixed seed.

use queenclimb_core::{Board, Result};

use super::r#move::{Direction, SlideMove};

/// Enumerates every legal [`SlideMove`] of a board.
///
/// # Example
///
/// ```
/// use queenclimb_core::Board;
/// use queenclimb_solver::heuristic::SlidingMoveSelector;
///
/// // A lone queen in the corner of a 3x3 board reaches 6 cells.
/// let board = Board::from_rows(vec![vec![0], vec![], vec![]]).unwrap();
/// let selector = SlidingMoveSelector::new();
/// assert_eq!(selector.iter_moves(&board).count(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingMoveSelector;

impl SlidingMoveSelector {
    pub fn new() -> Self {
        Self
    }

    /// Lazily yields every legal move of `board`.
    pub fn iter_moves<'a>(&self, board: &'a Board) -> impl Iterator<Item = SlideMove> + 'a {
        board.queens().flat_map(move |(row, col)| {
            Direction::ALL
                .into_iter()
                .flat_map(move |direction| SlideRay::new(board, row, col, direction))
        })
    }

    /// Returns the number of legal moves of `board`.
    pub fn size(&self, board: &Board) -> usize {
        self.iter_moves(board).count()
    }
}

/// Walks one direction from a queen until blocked.
struct SlideRay<'a> {
    board: &'a Board,
    row: usize,
    col: usize,
    direction: Direction,
    steps: usize,
    blocked: bool,
}

impl<'a> SlideRay<'a> {
    fn new(board: &'a Board, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            board,
            row,
            col,
            direction,
            steps: 0,
            blocked: false,
        }
    }
}

impl Iterator for SlideRay<'_> {
    type Item = SlideMove;

    fn next(&mut self) -> Option<SlideMove> {
        if self.blocked {
            return None;
        }
        self.steps += 1;
        match self
            .direction
            .offset(self.row, self.col, self.steps, self.board.size())
        {
            Some((to_row, to_col)) if !self.board.is_occupied(to_row, to_col) => {
                Some(SlideMove::new(self.row, self.col, to_row, to_col))
            }
            // Off the board or in front of another queen.
            _ => {
                self.blocked = true;
                None
            }
        }
    }
}

/// Returns every legal move of `board` in generation order.
pub fn get_moves(board: &Board) -> Vec<SlideMove> {
    SlidingMoveSelector::new().iter_moves(board).collect()
}

/// Returns one successor board per move, in the same order as `moves`.
///
/// `board` is never mutated; each successor is an independent copy.
///
/// # Errors
///
/// Fails on the first move that is not doable on `board`.
pub fn get_move_states(board: &Board, moves: &[SlideMove]) -> Result<Vec<Board>> {
    moves.iter().map(|m| m.apply(board)).collect()
}
