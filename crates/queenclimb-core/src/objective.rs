//! Conflict-count objective.
//!
//! The objective is the number of attacking queen pairs on a board. For a
//! board with exactly one queen per row it reduces to the classic N-queens
//! heuristic and is zero exactly at a solution.

use crate::board::Board;

/// Returns the total number of conflicts on `board`.
///
/// Counts, in order:
/// 1. `k(k-1)/2` for every row holding `k >= 2` queens
/// 2. for every pair of queens on distinct rows, one conflict when they share
///    a column and one when they share a diagonal
///
/// # Examples
///
/// ```
/// use queenclimb_core::{objective, Board};
///
/// let solved = Board::from_columns(&[1, 3, 0, 2]).unwrap();
/// assert_eq!(objective(&solved), 0);
///
/// let stacked = Board::from_columns(&[0, 0, 0, 0]).unwrap();
/// assert_eq!(objective(&stacked), 6);
/// ```
pub fn objective(board: &Board) -> u64 {
    let n = board.size();
    let mut conflicts = 0u64;

    for row in 0..n {
        let k = board.row(row).len() as u64;
        if k > 1 {
            conflicts += k * (k - 1) / 2;
        }
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let row_distance = j - i;
            for &col_i in board.row(i) {
                for &col_j in board.row(j) {
                    if col_i == col_j {
                        conflicts += 1;
                    }
                    if col_i.abs_diff(col_j) == row_distance {
                        conflicts += 1;
                    }
                }
            }
        }
    }

    conflicts
}

/// Returns true when `board` has no conflicts.
pub fn is_goal(board: &Board) -> bool {
    objective(board) == 0
}
