//! Heuristic components for solving
//!
//! This module contains:
//! - Moves: single-queen relocations along a sliding ray
//! - Selectors: components that enumerate moves and successor boards

pub mod r#move;
pub mod selector;

pub use r#move::{Direction, SlideMove};
pub use selector::{get_move_states, get_moves, SlidingMoveSelector};
