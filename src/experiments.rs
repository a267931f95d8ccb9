//! Parameter sweeps over the search engines, producing one serialisable
//! record per run.

use crate::maze::MazeProblem;
use crate::search::{
    heuristics::{HeuristicName, ShorterRobotHeuristic},
    search_engines::{BestFirstSearch, SearchEngine},
    ConfigError, FailureReason, Solution, MIN_ROBOT_LENGTH,
};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_WEIGHTS: [f64; 11] = [0., 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.];

/// Weight used by the reduction sweep unless told otherwise.
pub const DEFAULT_REDUCTION_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRecord {
    pub weight: f64,
    pub cost: Option<f64>,
    pub solve_time_secs: f64,
    pub nodes_expanded: usize,
    pub failure_reason: Option<FailureReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReductionRecord {
    pub reduction: usize,
    pub cost: Option<f64>,
    /// Includes the heuristic initialisation
    pub solve_time_secs: f64,
    pub heuristic_init_time_secs: Option<f64>,
    pub nodes_expanded: usize,
    pub failure_reason: Option<FailureReason>,
}

fn cost_of<S>(solution: &Solution<S>) -> Option<f64> {
    solution.cost().map(|cost| cost.into_inner())
}

/// Run weighted A* once per weight with a fresh heuristic each time.
pub fn weight_experiment(
    problem: &MazeProblem,
    heuristic_name: HeuristicName,
    reduction: usize,
    weights: &[f64],
    time_limit: Option<Duration>,
) -> Result<Vec<WeightRecord>, ConfigError> {
    let mut records = Vec::with_capacity(weights.len());
    for &weight in weights {
        let heuristic = heuristic_name.create(reduction)?;
        let mut engine = BestFirstSearch::weighted_astar(weight, heuristic)?;
        info!(engine = %engine.name(), "running weight experiment");
        let solution = engine.solve(problem, time_limit)?;
        records.push(WeightRecord {
            weight,
            cost: cost_of(&solution),
            solve_time_secs: solution.elapsed_time().as_secs_f64(),
            nodes_expanded: solution.nodes_expanded(),
            failure_reason: solution.failure_reason(),
        });
    }
    Ok(records)
}

/// Every even reduction that leaves a robot of at least
/// [`MIN_ROBOT_LENGTH`] cells.
pub fn reductions(length: usize) -> Vec<usize> {
    (2..)
        .step_by(2)
        .take_while(|reduction| reduction + MIN_ROBOT_LENGTH <= length)
        .collect()
}

/// Run weighted A* with the shorter robot heuristic for every admissible
/// reduction of the robot in `problem`.
pub fn reduction_experiment(
    problem: &MazeProblem,
    weight: f64,
    time_limit: Option<Duration>,
) -> Result<Vec<ReductionRecord>, ConfigError> {
    let reductions = reductions(problem.length());
    if reductions.is_empty() {
        info!(
            length = problem.length(),
            "robot is too short to be reduced"
        );
    }

    let mut records = Vec::with_capacity(reductions.len());
    for reduction in reductions {
        let heuristic = ShorterRobotHeuristic::deferred(reduction)?;
        let mut engine = BestFirstSearch::weighted_astar(weight, Box::new(heuristic))?;
        info!(engine = %engine.name(), "running reduction experiment");
        let solution = engine.solve(problem, time_limit)?;
        records.push(ReductionRecord {
            reduction,
            cost: cost_of(&solution),
            solve_time_secs: solution.elapsed_time().as_secs_f64(),
            heuristic_init_time_secs: solution
                .heuristic_init_time()
                .map(|time| time.as_secs_f64()),
            nodes_expanded: solution.nodes_expanded(),
            failure_reason: solution.failure_reason(),
        });
    }
    Ok(records)
}
