//! Shared test fixtures for queenclimb crates.
//!
//! This crate provides known boards, seeded random number generators and a
//! brute-force conflict counter to check the objective against.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! queenclimb-test = { workspace = true }
//! ```

use queenclimb_core::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns a deterministic generator for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Solved 4×4 board with queens at (0,1), (1,3), (2,0), (3,2).
pub fn four_queens_solution() -> Board {
    board_from_columns(&[1, 3, 0, 2])
}

/// Solved 8×8 board.
pub fn eight_queens_solution() -> Board {
    board_from_columns(&[0, 4, 7, 5, 2, 6, 1, 3])
}

/// Board of size `n` with every queen in column `column`.
///
/// Each queen attacks every other one, so the objective is n(n-1)/2.
pub fn stacked_column(n: usize, column: usize) -> Board {
    board_from_columns(&vec![column; n])
}

/// Board with queens on the main diagonal.
pub fn main_diagonal(n: usize) -> Board {
    board_from_columns(&(0..n).collect::<Vec<_>>())
}

/// Builds a one-queen-per-row board, panicking on invalid input.
pub fn board_from_columns(columns: &[usize]) -> Board {
    match Board::from_columns(columns) {
        Ok(board) => board,
        Err(err) => panic!("invalid fixture {columns:?}: {err}"),
    }
}

/// Builds a board from an explicit row layout, panicking on invalid input.
pub fn board_from_rows(rows: Vec<Vec<usize>>) -> Board {
    match Board::from_rows(rows.clone()) {
        Ok(board) => board,
        Err(err) => panic!("invalid fixture {rows:?}: {err}"),
    }
}

/// Counts attacking pairs by checking every pair of queens directly.
///
/// Two queens attack each other when they share a row, a column or a
/// diagonal. Queens are given as `(row, column)` in any order.
pub fn reference_conflicts(queens: &[(usize, usize)]) -> u64 {
    let mut conflicts = 0;
    for (i, &(r1, c1)) in queens.iter().enumerate() {
        for &(r2, c2) in &queens[i + 1..] {
            if r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Reflects a board top to bottom.
pub fn mirror_rows(board: &Board) -> Board {
    let n = board.size();
    let rows = (0..n).rev().map(|r| board.row(r).to_vec()).collect();
    board_from_rows(rows)
}

/// Reflects a board left to right.
pub fn mirror_columns(board: &Board) -> Board {
    let n = board.size();
    let rows = (0..n)
        .map(|r| board.row(r).iter().map(|&c| n - 1 - c).collect())
        .collect();
    board_from_rows(rows)
}

#[cfg(test)]
mod tests;
