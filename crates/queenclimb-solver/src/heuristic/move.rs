//! Sliding queen moves.

use std::fmt;

use queenclimb_core::{Board, Result};

/// One of the eight directions a queen slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All directions in generation order: orthogonal first, then diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the `(row, column)` delta of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Returns the cell `steps` cells away from `(row, column)`, if it lies on
    /// an `n`×`n` board.
    pub fn offset(self, row: usize, column: usize, steps: usize, n: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let steps = steps as isize;
        let to_row = row as isize + dr * steps;
        let to_col = column as isize + dc * steps;
        let bound = n as isize;
        if (0..bound).contains(&to_row) && (0..bound).contains(&to_col) {
            Some((to_row as usize, to_col as usize))
        } else {
            None
        }
    }
}

/// Relocates the queen at `(from_row, from_col)` to `(to_row, to_col)`.
///
/// Moves are produced by [`SlidingMoveSelector`](super::SlidingMoveSelector),
/// which only offers destinations that are on the board and free.
///
/// # Example
///
/// ```
/// use queenclimb_core::{Board, Result};
/// use queenclimb_solver::heuristic::SlideMove;
///
/// let board = Board::from_columns(&[0, 0, 0]).unwrap();
/// let m = SlideMove::new(1, 0, 1, 2);
/// assert!(m.is_doable(&board));
///
/// let next = m.apply(&board).unwrap();
/// assert_eq!(next.columns(), Some(vec![0, 2, 0]));
///
/// // The destination is now taken.
/// assert!(!SlideMove::new(0, 0, 1, 2).is_doable(&next));
/// assert!(SlideMove::new(0, 0, 1, 2).apply(&next).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideMove {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl SlideMove {
    pub fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// Origin cell as `(row, column)`.
    pub fn from(&self) -> (usize, usize) {
        (self.from_row, self.from_col)
    }

    /// Destination cell as `(row, column)`.
    pub fn to(&self) -> (usize, usize) {
        (self.to_row, self.to_col)
    }

    /// Returns true if this move can be executed on `board`.
    ///
    /// The origin must hold a queen and the destination must be a free cell
    /// on the board.
    pub fn is_doable(&self, board: &Board) -> bool {
        let n = board.size();
        self.to_row < n
            && self.to_col < n
            && board.is_occupied(self.from_row, self.from_col)
            && !board.is_occupied(self.to_row, self.to_col)
    }

    /// Returns the successor board. `board` itself is not modified.
    ///
    /// # Errors
    ///
    /// Fails when the move is not doable on `board`.
    pub fn apply(&self, board: &Board) -> Result<Board> {
        board.with_queen_moved(self.from(), self.to())
    }
}

impl fmt::Display for SlideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}
