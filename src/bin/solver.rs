use clap::{Parser, Subcommand};
use mazebot::{
    experiments::{
        reduction_experiment, weight_experiment, DEFAULT_REDUCTION_WEIGHT, DEFAULT_WEIGHTS,
    },
    maze::MazeProblem,
    search::{
        heuristics::HeuristicName,
        search_engines::SearchEngineName,
        ConfigError,
    },
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for LevelFilter {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::Debug => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Move a head/tail robot through a maze with heuristic search.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The maze problem file (TOML)")]
    problem: PathBuf,
    #[arg(
        help = "Time budget of each search, e.g. 30s or 2m",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the problem once and print the path.
    Solve {
        #[arg(
            value_enum,
            help = "The search engine to use",
            short = 'e',
            long = "engine",
            id = "ENGINE",
            default_value_t = SearchEngineName::WeightedAstar
        )]
        engine_name: SearchEngineName,
        #[arg(
            help = "Weight of the heuristic, only used by weighted A*",
            short = 'w',
            long = "weight",
            id = "WEIGHT",
            default_value_t = 0.5
        )]
        weight: f64,
        #[arg(
            value_enum,
            help = "The heuristic to use, only used by weighted A*",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = HeuristicName::TailManhattan
        )]
        heuristic_name: HeuristicName,
        #[arg(
            help = "How many cells the shorter robot heuristic removes",
            short = 'k',
            long = "reduction",
            id = "REDUCTION",
            default_value_t = 2
        )]
        reduction: usize,
    },
    /// Run weighted A* for w = 0, 0.1, ..., 1 and print one JSON record per
    /// run.
    WeightExperiment {
        #[arg(
            value_enum,
            help = "The heuristic to use",
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = HeuristicName::CenterManhattan
        )]
        heuristic_name: HeuristicName,
        #[arg(
            help = "How many cells the shorter robot heuristic removes",
            short = 'k',
            long = "reduction",
            id = "REDUCTION",
            default_value_t = 2
        )]
        reduction: usize,
    },
    /// Run weighted A* with the shorter robot heuristic for every valid
    /// reduction and print one JSON record per run.
    ReductionExperiment {
        #[arg(
            help = "Weight of the heuristic",
            short = 'w',
            long = "weight",
            id = "WEIGHT",
            default_value_t = DEFAULT_REDUCTION_WEIGHT
        )]
        weight: f64,
    },
}

#[derive(Serialize)]
struct SolveReport {
    engine: String,
    cost: Option<f64>,
    solve_time_secs: f64,
    heuristic_init_time_secs: Option<f64>,
    nodes_expanded: usize,
    failure_reason: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(cli.verbosity).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = match MazeProblem::from_path(&cli.problem) {
        Ok(problem) => problem,
        Err(e) => {
            error!("failed to load problem: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(length = problem.length(), "problem loaded");

    match run(cli.command, &problem, cli.time_limit) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("invalid configuration: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Commands,
    problem: &MazeProblem,
    time_limit: Option<Duration>,
) -> Result<(), ConfigError> {
    match command {
        Commands::Solve {
            engine_name,
            weight,
            heuristic_name,
            reduction,
        } => {
            let heuristic = heuristic_name.create(reduction)?;
            let mut engine = engine_name.create(weight, heuristic)?;
            let solution = engine.solve(problem, time_limit)?;

            if let Some(path) = solution.path() {
                println!("Path found:");
                for state in &path {
                    println!("head {:?} tail {:?}", state.head, state.tail);
                }
                println!("Path length: {}", path.len() - 1);
            } else {
                println!("No path found");
            }
            print_json(&SolveReport {
                engine: engine.name(),
                cost: solution.cost().map(|cost| cost.into_inner()),
                solve_time_secs: solution.elapsed_time().as_secs_f64(),
                heuristic_init_time_secs: solution
                    .heuristic_init_time()
                    .map(|time| time.as_secs_f64()),
                nodes_expanded: solution.nodes_expanded(),
                failure_reason: solution.failure_reason().map(|reason| reason.to_string()),
            });
        }
        Commands::WeightExperiment {
            heuristic_name,
            reduction,
        } => {
            let records = weight_experiment(
                problem,
                heuristic_name,
                reduction,
                &DEFAULT_WEIGHTS,
                time_limit,
            )?;
            print_json(&records);
        }
        Commands::ReductionExperiment { weight } => {
            let records = reduction_experiment(problem, weight, time_limit)?;
            print_json(&records);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("Records only hold plain data")
    );
}
