//! queenclimb Core - board state and objective for N-queens local search
//!
//! This crate provides the fundamental pieces the search engine works on:
//! - [`Board`] for configurations of queens on an N×N board
//! - [`objective`] for counting pairwise conflicts
//! - [`QueensError`] for the error taxonomy shared by the workspace

pub mod board;
pub mod error;
pub mod objective;

pub use board::{generate_start_state, to_array, Board, RowColumns};
pub use error::{QueensError, Result};
pub use objective::{is_goal, objective};
