//! Objective properties checked against the brute-force counter.

use queenclimb_core::{is_goal, objective, Board};

use super::*;

fn queen_list(board: &Board) -> Vec<(usize, usize)> {
    board.queens().collect()
}

#[test]
fn test_fixtures_are_solutions() {
    assert!(is_goal(&four_queens_solution()));
    assert!(is_goal(&eight_queens_solution()));
}

#[test]
fn test_stacked_column_conflicts() {
    for n in 1..9 {
        let n64 = n as u64;
        assert_eq!(objective(&stacked_column(n, 0)), n64 * (n64 - 1) / 2);
        assert_eq!(objective(&main_diagonal(n)), n64 * (n64 - 1) / 2);
    }
}

#[test]
fn test_objective_matches_reference_on_random_boards() {
    let mut rng = seeded_rng(11);
    for n in 1..12 {
        for _ in 0..20 {
            let board = Board::random(n, &mut rng).unwrap();
            assert_eq!(objective(&board), reference_conflicts(&queen_list(&board)));
        }
    }
}

#[test]
fn test_objective_matches_reference_with_shared_rows() {
    let board = board_from_rows(vec![vec![0, 2, 3], vec![], vec![1], vec![1, 3]]);
    assert_eq!(objective(&board), reference_conflicts(&queen_list(&board)));
}

#[test]
fn test_objective_independent_of_pair_order() {
    let mut rng = seeded_rng(5);
    let board = Board::random(9, &mut rng).unwrap();
    let mut queens = queen_list(&board);
    let forward = reference_conflicts(&queens);
    queens.reverse();

    assert_eq!(reference_conflicts(&queens), forward);
    assert_eq!(objective(&board), forward);
}

#[test]
fn test_objective_invariant_under_mirrors() {
    let mut rng = seeded_rng(23);
    for n in 2..10 {
        let board = Board::random(n, &mut rng).unwrap();
        let score = objective(&board);

        assert_eq!(objective(&mirror_rows(&board)), score);
        assert_eq!(objective(&mirror_columns(&board)), score);
        assert_eq!(objective(&mirror_rows(&mirror_columns(&board))), score);
    }
}

#[test]
fn test_goal_iff_no_shared_column_or_diagonal() {
    let mut rng = seeded_rng(31);
    for _ in 0..200 {
        let board = Board::random(5, &mut rng).unwrap();
        let Some(columns) = board.columns() else {
            panic!("random boards hold one queen per row");
        };
        let attacked = (0..5).any(|i| {
            (i + 1..5).any(|j| {
                columns[i] == columns[j] || columns[i].abs_diff(columns[j]) == j - i
            })
        });
        assert_eq!(is_goal(&board), !attacked);
    }
}
