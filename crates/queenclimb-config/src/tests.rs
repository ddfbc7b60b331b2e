//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        board_size = 10
        random_seed = 42
        search_type = "hill_climbing_with_sideways"
        sideways_move_limit = 25

        [termination]
        restart_count_limit = 1000
        seconds_spent_limit = 30

        [experiment]
        run_count = 20
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.board_size, 10);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.search_type, SearchType::HillClimbingWithSideways);
    assert_eq!(config.sideways_move_limit, 25);
    assert_eq!(config.restart_count_limit(), Some(1000));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
    assert_eq!(config.run_count(), 20);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        board_size: 6
        random_seed: 42
        search_type: hill_climbing
        termination:
          restart_count_limit: 5
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.board_size, 6);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.search_type, SearchType::HillClimbing);
    assert_eq!(config.restart_count_limit(), Some(5));
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.board_size, DEFAULT_BOARD_SIZE);
    assert_eq!(config.sideways_move_limit, DEFAULT_SIDEWAYS_MOVE_LIMIT);
    assert_eq!(config.run_count(), DEFAULT_RUN_COUNT);
    assert!(config.termination.is_none());
}

#[test]
fn test_zero_board_size_rejected() {
    let err = SolverConfig::from_toml_str("board_size = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_run_count_rejected() {
    let err = SolverConfig::from_toml_str("[experiment]\nrun_count = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_search_type_rejected() {
    let err = SolverConfig::from_toml_str(r#"search_type = "simulated_annealing""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SolverConfig::load("does/not/exist/queenclimb.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_board_size(4)
        .with_random_seed(123)
        .with_search_type(SearchType::HillClimbingWithSideways)
        .with_sideways_move_limit(10)
        .with_restart_count_limit(7)
        .with_termination_seconds(60)
        .with_run_count(3);

    assert_eq!(config.board_size, 4);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.sideways_move_limit, 10);
    assert_eq!(config.restart_count_limit(), Some(7));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.run_count(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_termination_time_limit_combines_units() {
    let termination = TerminationConfig {
        seconds_spent_limit: Some(30),
        minutes_spent_limit: Some(2),
        ..Default::default()
    };
    assert_eq!(termination.time_limit(), Some(Duration::from_secs(150)));
    assert!(!termination.is_unbounded());
    assert!(TerminationConfig::default().is_unbounded());
}

#[test]
fn test_overflowing_time_limit_rejected() {
    let err = SolverConfig::from_toml_str(
        "[termination]\nminutes_spent_limit = 9223372036854775807",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    // Built without validation, the limit saturates instead of panicking.
    let termination = TerminationConfig {
        minutes_spent_limit: Some(u64::MAX),
        ..Default::default()
    };
    assert_eq!(termination.total_seconds(), None);
    assert_eq!(termination.time_limit(), Some(Duration::from_secs(u64::MAX)));
}

#[test]
fn test_zero_time_limit_is_immediate() {
    let config = SolverConfig::from_toml_str("[termination]\nseconds_spent_limit = 0").unwrap();

    assert_eq!(config.time_limit(), Some(Duration::ZERO));
    assert!(!config.termination.as_ref().unwrap().is_unbounded());
}
