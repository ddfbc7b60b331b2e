//! N-queens hill climbing demo.
//!
//! ```text
//! nqueens --size 8 --strategy sideways --mode single --runs 4 --print-path
//! nqueens --size 8 --mode restart --seed 42
//! nqueens --size 8 --mode experiment --runs 100 --output-dir reports
//! RUST_LOG=queenclimb_solver=debug nqueens --size 6 --mode restart
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use queenclimb::{generate_start_state, objective, to_array, Board, SearchType, SolverConfig};
use queenclimb_benchmark::{Experiment, ExperimentConfig, MarkdownReport};
use queenclimb_solver::{build_phase, random_restart, rng_from_config, SearchStrategy, TerminationBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    HillClimbing,
    Sideways,
}

impl From<Strategy> for SearchType {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::HillClimbing => SearchType::HillClimbing,
            Strategy::Sideways => SearchType::HillClimbingWithSideways,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Independent searches, each from a fresh random board.
    Single,
    /// Random restart until a solution is found.
    Restart,
    /// Success rates and average steps over many runs.
    Experiment,
}

#[derive(Debug, Parser)]
#[command(name = "nqueens", version, about = "Solve N-queens by hill climbing")]
struct Args {
    /// Board size N.
    #[arg(short = 'n', long)]
    size: Option<usize>,

    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    #[arg(short, long, value_enum, default_value = "single")]
    mode: Mode,

    /// Number of searches (single and experiment modes).
    #[arg(short, long)]
    runs: Option<usize>,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum restarts before giving up (restart mode). Without a limit,
    /// sizes 2 and 3 never finish.
    #[arg(long)]
    restart_limit: Option<u64>,

    /// TOML or YAML configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every board on the search path, not only the final one.
    #[arg(long)]
    print_path: bool,

    /// Directory receiving CSV and Markdown reports (experiment mode).
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

const DEFAULT_SINGLE_RUNS: usize = 4;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<SolverConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) if matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml")) => {
            SolverConfig::from_yaml_file(path)?
        }
        Some(path) => SolverConfig::from_toml_file(path)?,
        None => SolverConfig::default(),
    };

    if let Some(size) = args.size {
        config = config.with_board_size(size);
    }
    if let Some(strategy) = args.strategy {
        config = config.with_search_type(strategy.into());
    }
    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(limit) = args.restart_limit {
        config = config.with_restart_count_limit(limit);
    }
    if let Some(runs) = args.runs {
        config = config.with_run_count(runs);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    info!(
        event = "config_loaded",
        board_size = config.board_size,
        search_type = ?config.search_type,
        seed = ?config.random_seed,
    );

    match args.mode {
        Mode::Single => run_single(&config, args),
        Mode::Restart => run_restart(&config, args),
        Mode::Experiment => run_experiment(&config, args),
    }
}

fn print_board(board: &Board) {
    for row in to_array(board) {
        println!("{row:?}");
    }
    println!();
}

fn print_path(path: &[Board]) {
    for board in path {
        print_board(board);
    }
}

fn run_single(config: &SolverConfig, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rng_from_config(config);
    let mut phase = build_phase(config);
    let runs = args.runs.unwrap_or(DEFAULT_SINGLE_RUNS);

    for i in 0..runs {
        println!("{} SEARCH {i}", phase.strategy_name());
        let start = generate_start_state(config.board_size, &mut rng)?;
        let outcome = phase.search(start, &mut rng);

        if args.print_path {
            print_path(&outcome.path);
        } else {
            print_board(&outcome.board);
        }
        println!(
            "steps: {}, conflicts: {}, solved: {}\n",
            outcome.steps,
            objective(&outcome.board),
            outcome.is_goal()
        );
    }
    Ok(())
}

fn run_restart(config: &SolverConfig, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rng_from_config(config);
    let mut phase = build_phase(config);
    let termination = TerminationBuilder::build(config);

    let outcome = random_restart(config.board_size, &mut phase, &mut rng, &termination)?;
    if args.print_path {
        print_path(&outcome.path);
    } else {
        print_board(&outcome.board);
    }
    println!(
        "total steps: {}, restarts: {}",
        outcome.total_steps, outcome.restarts
    );
    Ok(())
}

fn run_experiment(config: &SolverConfig, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let name = format!("{n}-queens", n = config.board_size);
    let mut experiment_config = ExperimentConfig::from_solver_config(name, config);
    if let Some(dir) = &args.output_dir {
        experiment_config = experiment_config.with_output_dir(dir);
    }
    let experiment = Experiment::new(experiment_config);
    let mut phase = build_phase(config);
    let termination = TerminationBuilder::build(config);

    let single = experiment.run_single(&mut phase)?;
    println!("{}", MarkdownReport::single(&single));
    experiment.export_single(&single)?;

    let restart = experiment.run_restart(&mut phase, &termination)?;
    println!("{}", MarkdownReport::restart(&restart));
    experiment.export_restart(&restart)?;
    Ok(())
}
