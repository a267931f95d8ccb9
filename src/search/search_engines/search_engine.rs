use crate::search::{
    search_engines::{BestFirstSearch, BreadthFirstSearch},
    ConfigError, FailureReason, Heuristic, NodeId, SearchSpace, SearchStatistics, Solution,
    StateSpace, TerminationCondition,
};
use std::time::Duration;

pub trait SearchEngine<P: StateSpace> {
    /// Human readable name, used in logs and experiment reports.
    fn name(&self) -> String;

    /// Search `problem` from its initial state. Running out of time or of
    /// states is reported through [`Solution::failure_reason`], errors are
    /// reserved for invalid configuration.
    fn solve(
        &mut self,
        problem: &P,
        time_limit: Option<Duration>,
    ) -> Result<Solution<P::State>, ConfigError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "bfs", help = "Breadth first search, shortest in steps.")]
    BreadthFirst,
    #[clap(name = "ucs", help = "Uniform cost search, cheapest path.")]
    UniformCost,
    #[clap(help = "Weighted A*, priority (1 - w) * g + w * h.")]
    WeightedAstar,
}

impl SearchEngineName {
    /// Build the engine. `weight` and `heuristic` are only used by weighted
    /// A*.
    pub fn create<P: StateSpace + 'static>(
        &self,
        weight: f64,
        heuristic: Box<dyn Heuristic<P>>,
    ) -> Result<Box<dyn SearchEngine<P>>, ConfigError> {
        Ok(match self {
            SearchEngineName::BreadthFirst => Box::new(BreadthFirstSearch::new()),
            SearchEngineName::UniformCost => Box::new(BestFirstSearch::uniform_cost()),
            SearchEngineName::WeightedAstar => {
                Box::new(BestFirstSearch::weighted_astar(weight, heuristic)?)
            }
        })
    }
}

/// Log the final statistics of a run and package its outcome.
pub(crate) fn finish_search<S>(
    outcome: Result<NodeId, FailureReason>,
    search_space: SearchSpace<S>,
    statistics: &SearchStatistics,
    termination: &mut TerminationCondition,
    heuristic_init_time: Option<Duration>,
) -> Solution<S> {
    statistics.finalise_search();
    termination.finalise();
    let elapsed_time = termination.elapsed();
    let nodes_expanded = statistics.expanded_nodes();
    match outcome {
        Ok(goal_id) => Solution::found(
            search_space,
            goal_id,
            elapsed_time,
            nodes_expanded,
            heuristic_init_time,
        ),
        Err(reason) => Solution::failed(
            search_space,
            reason,
            elapsed_time,
            nodes_expanded,
            heuristic_init_time,
        ),
    }
}
