use std::time::Duration;

use super::*;
use crate::restart::RestartScope;

fn scope_with_restarts(restarts: u64) -> RestartScope {
    let mut scope = RestartScope::new();
    for _ in 0..restarts {
        scope.record_restart();
    }
    scope
}

#[test]
fn test_no_termination() {
    assert!(!NoTermination.is_terminated(&scope_with_restarts(1_000)));
}

#[test]
fn test_restart_count_termination() {
    let term = RestartCountTermination::new(3);

    assert!(!term.is_terminated(&scope_with_restarts(0)));
    assert!(!term.is_terminated(&scope_with_restarts(3)));
    assert!(term.is_terminated(&scope_with_restarts(4)));
}

#[test]
fn test_time_termination() {
    let scope = RestartScope::new();

    assert!(!TimeTermination::seconds(3_600).is_terminated(&scope));
    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let scope = scope_with_restarts(10);

    let none: Option<RestartCountTermination> = None;
    assert!(!none.is_terminated(&scope));
    assert!(Some(RestartCountTermination::new(2)).is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let scope = scope_with_restarts(5);

    let term = OrTermination::new((
        RestartCountTermination::new(100),
        TimeTermination::seconds(3_600),
    ));
    assert!(!term.is_terminated(&scope));

    let term = OrTermination::new((
        RestartCountTermination::new(100),
        RestartCountTermination::new(4),
    ));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_and_termination() {
    let scope = scope_with_restarts(5);

    let term = AndTermination::new((
        RestartCountTermination::new(4),
        TimeTermination::seconds(3_600),
    ));
    assert!(!term.is_terminated(&scope));

    let term = AndTermination::new((
        RestartCountTermination::new(4),
        TimeTermination::new(Duration::ZERO),
    ));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_boxed_termination() {
    let term: Box<dyn Termination> = Box::new(RestartCountTermination::new(0));
    assert!(term.is_terminated(&scope_with_restarts(1)));
}
