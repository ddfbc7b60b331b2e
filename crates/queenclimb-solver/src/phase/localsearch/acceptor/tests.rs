//! Tests for acceptors.

use super::*;

#[test]
fn test_hill_climbing_accepts_improving() {
    let acceptor: Box<dyn Acceptor> = Box::new(HillClimbingAcceptor::new());

    assert!(acceptor.is_accepted(10, 5));
}

#[test]
fn test_hill_climbing_rejects_worsening() {
    let acceptor: Box<dyn Acceptor> = Box::new(HillClimbingAcceptor::new());

    assert!(!acceptor.is_accepted(5, 10));
}

#[test]
fn test_hill_climbing_rejects_equal() {
    let acceptor: Box<dyn Acceptor> = Box::new(HillClimbingAcceptor::new());

    // Plateau moves end plain hill climbing
    assert!(!acceptor.is_accepted(5, 5));
    assert!(!acceptor.is_accepted(0, 0));
}

#[test]
fn test_sideways_rejects_worsening() {
    let mut acceptor = SidewaysAcceptor::default();
    acceptor.phase_started(5);

    assert!(!acceptor.is_accepted(5, 6));
}

#[test]
fn test_sideways_budget_exhausts() {
    let mut acceptor = SidewaysAcceptor::new(3);
    acceptor.phase_started(7);

    for _ in 0..3 {
        assert!(acceptor.is_accepted(7, 7));
        acceptor.step_ended(7, 7);
    }
    assert_eq!(acceptor.sideways_moves(), 3);
    assert!(!acceptor.is_accepted(7, 7));
    // Improvements are still taken once the budget is spent
    assert!(acceptor.is_accepted(7, 6));
}

#[test]
fn test_sideways_improvement_resets_counter() {
    let mut acceptor = SidewaysAcceptor::new(2);
    acceptor.phase_started(9);

    acceptor.step_ended(9, 9);
    acceptor.step_ended(9, 9);
    assert!(!acceptor.is_accepted(9, 9));

    acceptor.step_ended(9, 8);
    assert_eq!(acceptor.sideways_moves(), 0);
    assert!(acceptor.is_accepted(8, 8));
}

#[test]
fn test_sideways_zero_limit_behaves_like_hill_climbing() {
    let sideways = SidewaysAcceptor::new(0);
    let plain = HillClimbingAcceptor::new();

    for (last, next) in [(4, 3), (4, 4), (4, 5), (0, 0)] {
        assert_eq!(sideways.is_accepted(last, next), plain.is_accepted(last, next));
    }
}

#[test]
fn test_sideways_phase_restart_clears_counter() {
    let mut acceptor = SidewaysAcceptor::new(1);
    acceptor.phase_started(3);
    acceptor.step_ended(3, 3);
    assert!(!acceptor.is_accepted(3, 3));

    acceptor.phase_ended();
    acceptor.phase_started(3);
    assert!(acceptor.is_accepted(3, 3));
}

#[test]
fn test_boxed_acceptor_delegates() {
    let mut acceptor: Box<dyn Acceptor> = Box::new(SidewaysAcceptor::new(1));
    acceptor.phase_started(2);
    acceptor.step_ended(2, 2);

    assert_eq!(acceptor.acceptor_type_name(), "HillClimbingWithSideways");
    assert!(!acceptor.is_accepted(2, 2));
}
