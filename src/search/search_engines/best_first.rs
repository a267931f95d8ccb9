//! Best-first search, covering uniform cost search and weighted A*.
//!
//! Nodes are checked against the goal when they are taken out of the open
//! list. A state that is reached again with a strictly lower g-value is
//! updated in place while it is still open, and reopened if it was already
//! closed.

use crate::search::{
    search_engines::{finish_search, SearchEngine},
    ConfigError, Cost, DistanceTable, FailureReason, Heuristic, NodeCollection, NodeId,
    PriorityOpenList, SearchSpace, SearchStatistics, Solution, StateSpace, TerminationCondition,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Weight of the heuristic in weighted A*, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight(f64);

impl Weight {
    pub fn new(weight: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&weight) {
            Ok(Self(weight))
        } else {
            Err(ConfigError::InvalidWeight(weight))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// How a best-first search orders its open list.
#[derive(Debug)]
pub enum PriorityFunction<P: StateSpace> {
    /// `priority = g`
    UniformCost,
    /// `priority = (1 - w) * g + w * h`
    WeightedAstar {
        weight: Weight,
        heuristic: Box<dyn Heuristic<P>>,
    },
}

impl<P: StateSpace> PriorityFunction<P> {
    fn priority(
        &mut self,
        state: &P::State,
        g_value: Cost,
        problem: &P,
        statistics: &mut SearchStatistics,
    ) -> Cost {
        match self {
            PriorityFunction::UniformCost => g_value,
            PriorityFunction::WeightedAstar { weight, heuristic } => {
                statistics.increment_evaluated_nodes();
                let h_value = heuristic.evaluate(state, problem);
                let w = weight.value();
                Cost::from((1. - w) * g_value.into_inner() + w * h_value.into_inner())
            }
        }
    }

    /// Initialise the heuristic if it asks for it, returning how long that
    /// took. The heuristic gets whatever is left of the search's budget.
    fn initialise(
        &mut self,
        problem: &P,
        termination: &TerminationCondition,
    ) -> Result<Option<Duration>, ConfigError> {
        match self {
            PriorityFunction::WeightedAstar { heuristic, .. }
                if heuristic.requires_initialisation() =>
            {
                info!(heuristic = %heuristic.name(), "initialising heuristic");
                let start_time = Instant::now();
                heuristic.initialise(problem, termination.remaining())?;
                let init_time = start_time.elapsed();
                info!(heuristic_init_time = init_time.as_secs_f64());
                Ok(Some(init_time))
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Stop at the first goal taken out of the open list
    FirstGoal,
    /// Ignore goals and run until the open list is empty
    AllDistances,
}

/// Everything a finished run leaves behind.
struct SearchRun<S> {
    outcome: Result<NodeId, FailureReason>,
    search_space: SearchSpace<S>,
    closed: NodeCollection<S>,
    statistics: SearchStatistics,
    termination: TerminationCondition,
    heuristic_init_time: Option<Duration>,
}

#[derive(Debug)]
pub struct BestFirstSearch<P: StateSpace> {
    priority_function: PriorityFunction<P>,
}

impl<P: StateSpace> BestFirstSearch<P> {
    pub fn new(priority_function: PriorityFunction<P>) -> Self {
        Self { priority_function }
    }

    /// Dijkstra's algorithm.
    pub fn uniform_cost() -> Self {
        Self::new(PriorityFunction::UniformCost)
    }

    /// Weighted A*. A weight of 0 behaves like uniform cost search, a weight
    /// of 1 is greedy best-first search.
    pub fn weighted_astar(
        weight: f64,
        heuristic: Box<dyn Heuristic<P>>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(PriorityFunction::WeightedAstar {
            weight: Weight::new(weight)?,
            heuristic,
        }))
    }

    /// Expand every state reachable from the initial state and return the
    /// closed list, which then maps each of them to its optimal distance. The
    /// table is partial if the time limit ran out first.
    pub fn compute_all_dists(
        &mut self,
        problem: &P,
        time_limit: Option<Duration>,
    ) -> Result<DistanceTable<P::State>, ConfigError> {
        let mut run = self.run(problem, time_limit, Mode::AllDistances)?;
        run.statistics.finalise_search();
        run.termination.finalise();

        let complete = run.outcome == Err(FailureReason::NoSolution);
        if complete {
            info!(reachable_states = run.closed.len(), "computed all distances");
        } else {
            warn!(
                reachable_states = run.closed.len(),
                "time limit exceeded, distance table is partial"
            );
        }
        Ok(DistanceTable::new(run.search_space, run.closed, complete))
    }

    fn run(
        &mut self,
        problem: &P,
        time_limit: Option<Duration>,
        mode: Mode,
    ) -> Result<SearchRun<P::State>, ConfigError> {
        let mut termination = TerminationCondition::new(time_limit);
        let mut statistics = SearchStatistics::new();
        let heuristic_init_time = self
            .priority_function
            .initialise(problem, &termination)?;

        let initial_state = problem.initial_state();
        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut open = PriorityOpenList::new();
        let mut closed = NodeCollection::new();

        let root = search_space.get_root_node();
        let root_priority = self.priority_function.priority(
            &initial_state,
            root.get_g(),
            problem,
            &mut statistics,
        );
        open.add(initial_state, root.get_node_id(), root_priority)
            .expect("Open list starts empty");

        let outcome = loop {
            if let Some(reason) = termination.should_terminate() {
                break Err(reason);
            }
            termination.log_if_needed();

            let Some(node_id) = open.pop() else {
                break Err(FailureReason::NoSolution);
            };
            let node = search_space.get_node(node_id);
            let state = node.get_state().clone();
            let g_value = node.get_g();
            closed
                .add(state.clone(), node_id)
                .expect("Open and closed lists never share a state");
            statistics.increment_expanded_nodes();

            if mode == Mode::FirstGoal && problem.is_goal(&state) {
                info!(cost = g_value.into_inner(), "goal found");
                break Ok(node_id);
            }

            let successors = problem.expand_state(&state);
            statistics.increment_generated_nodes(successors.len());
            for (successor, cost) in successors {
                let child_g = g_value + cost;

                if let Some(old_id) = closed.try_get(&successor) {
                    if search_space.get_node(old_id).get_g() <= child_g {
                        continue;
                    }
                    // Only possible when the priority function is not
                    // monotone, e.g. with an inconsistent heuristic
                    debug!(state = ?successor, "reopening closed state");
                    statistics.increment_reopened_nodes();
                    closed.remove(&successor);
                    let priority = self.priority_function.priority(
                        &successor,
                        child_g,
                        problem,
                        &mut statistics,
                    );
                    let child_id = search_space.add_node(successor.clone(), child_g, node_id);
                    open.add(successor, child_id, priority)
                        .expect("Open and closed lists never share a state");
                } else if let Some(old_id) = open.try_get(&successor) {
                    if search_space.get_node(old_id).get_g() <= child_g {
                        continue;
                    }
                    statistics.increment_updated_nodes();
                    let priority = self.priority_function.priority(
                        &successor,
                        child_g,
                        problem,
                        &mut statistics,
                    );
                    search_space.get_node_mut(old_id).update(child_g, node_id);
                    open.remove(&successor);
                    open.add(successor, old_id, priority)
                        .expect("State was just removed from the open list");
                } else {
                    let priority = self.priority_function.priority(
                        &successor,
                        child_g,
                        problem,
                        &mut statistics,
                    );
                    let child_id = search_space.add_node(successor.clone(), child_g, node_id);
                    open.add(successor, child_id, priority)
                        .expect("Successor was checked not to be open");
                }
            }
        };

        if let Err(reason) = outcome {
            if mode == Mode::FirstGoal {
                info!(%reason, "no solution found");
            }
        }

        Ok(SearchRun {
            outcome,
            search_space,
            closed,
            statistics,
            termination,
            heuristic_init_time,
        })
    }
}

impl<P: StateSpace> SearchEngine<P> for BestFirstSearch<P> {
    fn name(&self) -> String {
        match &self.priority_function {
            PriorityFunction::UniformCost => "uniform cost search robot".to_string(),
            PriorityFunction::WeightedAstar { weight, heuristic } => {
                format!("wA* [{}, {}]", weight.value(), heuristic.name())
            }
        }
    }

    fn solve(
        &mut self,
        problem: &P,
        time_limit: Option<Duration>,
    ) -> Result<Solution<P::State>, ConfigError> {
        let mut run = self.run(problem, time_limit, Mode::FirstGoal)?;
        Ok(finish_search(
            run.outcome,
            run.search_space,
            &run.statistics,
            &mut run.termination,
            run.heuristic_init_time,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeState;
    use crate::search::heuristics::{
        tail_manhattan, FnHeuristic, ShorterRobotHeuristic, ZeroHeuristic,
    };
    use crate::search::search_engines::BreadthFirstSearch;
    use crate::test_utils::*;

    fn tail_manhattan_astar(weight: f64) -> BestFirstSearch<crate::maze::MazeProblem> {
        BestFirstSearch::weighted_astar(
            weight,
            Box::new(FnHeuristic::new("tail_manhattan", tail_manhattan)),
        )
        .unwrap()
    }

    #[test]
    fn weight_must_be_in_unit_interval() {
        assert!(Weight::new(0.).is_ok());
        assert!(Weight::new(1.).is_ok());
        assert_eq!(Weight::new(1.5), Err(ConfigError::InvalidWeight(1.5)));
        assert_eq!(Weight::new(-0.1), Err(ConfigError::InvalidWeight(-0.1)));
        assert!(Weight::new(f64::NAN).is_err());

        let result =
            BestFirstSearch::<GraphProblem>::weighted_astar(2., Box::new(ZeroHeuristic::new()));
        assert_eq!(result.unwrap_err(), ConfigError::InvalidWeight(2.));
    }

    #[test]
    fn ucs_solves_open_maze_with_manhattan_cost() {
        let problem = open_5x5_problem();
        let solution = BestFirstSearch::uniform_cost()
            .solve(&problem, None)
            .unwrap();

        assert!(solution.nodes_expanded() > 0);
        assert_eq!(solution.cost(), Some(Cost::from(6.)));
        let path = solution.path().unwrap();
        assert_eq!(path.first(), Some(&problem.initial_state()));
        assert_eq!(path.last(), Some(&MazeState::new([4, 4], [4, 2])));
        assert_eq!(solution.heuristic_init_time(), None);
    }

    #[test]
    fn bfs_expands_no_more_than_ucs_on_unit_costs() {
        let problem = open_5x5_problem();
        let ucs = BestFirstSearch::uniform_cost()
            .solve(&problem, None)
            .unwrap();
        let bfs = BreadthFirstSearch::new().solve(&problem, None).unwrap();

        assert!(bfs.nodes_expanded() <= ucs.nodes_expanded());
        assert_eq!(bfs.cost(), ucs.cost());
    }

    #[test]
    fn weighted_astar_matches_ucs_with_admissible_heuristic() {
        let problem = walled_problem();
        let ucs_cost = BestFirstSearch::uniform_cost()
            .solve(&problem, None)
            .unwrap()
            .cost()
            .unwrap();

        for weight in [0., 0.25, 0.5] {
            let solution = tail_manhattan_astar(weight).solve(&problem, None).unwrap();
            assert_eq!(solution.cost(), Some(ucs_cost), "weight {}", weight);
        }
    }

    #[test]
    fn weighted_astar_matches_ucs_with_expensive_side_moves() {
        let problem = detour_problem();
        let ucs = BestFirstSearch::uniform_cost()
            .solve(&problem, None)
            .unwrap();
        assert_eq!(ucs.cost(), Some(Cost::from(21.5)));

        for weight in [0., 0.25, 0.5] {
            let solution = tail_manhattan_astar(weight).solve(&problem, None).unwrap();
            assert_eq!(solution.cost(), ucs.cost(), "weight {}", weight);

            let heuristic = ShorterRobotHeuristic::deferred(2).unwrap();
            let mut engine = BestFirstSearch::weighted_astar(weight, Box::new(heuristic)).unwrap();
            let solution = engine.solve(&problem, None).unwrap();
            assert_eq!(solution.cost(), ucs.cost(), "weight {}", weight);
        }
    }

    #[test]
    fn greedy_search_expands_fewer_nodes() {
        let problem = open_5x5_problem();
        let ucs = tail_manhattan_astar(0.).solve(&problem, None).unwrap();
        let greedy = tail_manhattan_astar(1.).solve(&problem, None).unwrap();

        assert!(greedy.nodes_expanded() <= ucs.nodes_expanded());
        assert!(greedy.cost() >= ucs.cost());
    }

    #[test]
    fn open_node_is_updated_in_place() {
        let problem = GraphProblem::new(
            0,
            3,
            &[(0, 1, 1.), (0, 2, 5.), (1, 2, 1.), (2, 3, 1.)],
        );
        let solution = BestFirstSearch::uniform_cost()
            .solve(&problem, None)
            .unwrap();

        assert_eq!(solution.path(), Some(vec![0, 1, 2, 3]));
        assert_eq!(solution.cost(), Some(Cost::from(3.)));
        // 0, 1, 2 and the goal, each exactly once
        assert_eq!(solution.nodes_expanded(), 4);
    }

    #[test]
    fn inconsistent_heuristic_reopens_closed_state() {
        // h(1) = 4 is admissible but inconsistent, so state 2 is first closed
        // through the expensive edge and later reopened
        let problem = GraphProblem::new(
            0,
            3,
            &[(0, 1, 1.), (0, 2, 3.), (1, 2, 1.), (2, 3, 3.)],
        );
        let heuristic = TableHeuristic::new(&[(1, 4.)]);
        let solution = BestFirstSearch::weighted_astar(0.5, Box::new(heuristic))
            .unwrap()
            .solve(&problem, None)
            .unwrap();

        assert_eq!(solution.path(), Some(vec![0, 1, 2, 3]));
        assert_eq!(solution.cost(), Some(Cost::from(5.)));
        // 0, 2, 1, 2 again, 3
        assert_eq!(solution.nodes_expanded(), 5);
    }

    #[test]
    fn zero_time_limit_never_reports_a_goal() {
        let problem = GraphProblem::new(0, 0, &[]);
        for mut engine in [BestFirstSearch::uniform_cost(), zero_heuristic_astar()] {
            let solution = engine.solve(&problem, Some(Duration::ZERO)).unwrap();
            assert_eq!(
                solution.failure_reason(),
                Some(FailureReason::TimeLimitExceeded)
            );
            assert!(solution.final_node().is_none());
            assert_eq!(solution.nodes_expanded(), 0);
        }
    }

    fn zero_heuristic_astar() -> BestFirstSearch<GraphProblem> {
        BestFirstSearch::weighted_astar(0.5, Box::new(ZeroHeuristic::new())).unwrap()
    }

    #[test]
    fn exhaustion_is_reported() {
        let problem = unreachable_goal_problem();
        let solution = tail_manhattan_astar(0.5).solve(&problem, None).unwrap();
        assert_eq!(solution.failure_reason(), Some(FailureReason::NoSolution));
        assert!(solution.cost().is_none());
    }

    #[test]
    fn all_distances_ignores_goal() {
        let problem = GraphProblem::new(
            0,
            1,
            &[(0, 1, 2.), (1, 2, 1.), (0, 2, 5.), (2, 3, 0.5)],
        );
        let table = BestFirstSearch::uniform_cost()
            .compute_all_dists(&problem, None)
            .unwrap();

        assert!(table.is_complete());
        assert_eq!(table.len(), 4);
        assert_eq!(table.distance(&0), Some(Cost::from(0.)));
        assert_eq!(table.distance(&1), Some(Cost::from(2.)));
        assert_eq!(table.distance(&2), Some(Cost::from(3.)));
        assert_eq!(table.distance(&3), Some(Cost::from(3.5)));
        assert_eq!(table.distance(&4), None);
    }

    #[test]
    fn all_distances_with_zero_time_limit_is_partial() {
        let problem = open_5x5_problem();
        let table = BestFirstSearch::uniform_cost()
            .compute_all_dists(&problem, Some(Duration::ZERO))
            .unwrap();
        assert!(!table.is_complete());
        assert!(table.is_empty());
    }

    #[test]
    fn engine_names() {
        let ucs: BestFirstSearch<GraphProblem> = BestFirstSearch::uniform_cost();
        assert_eq!(ucs.name(), "uniform cost search robot");
        assert_eq!(tail_manhattan_astar(0.5).name(), "wA* [0.5, tail_manhattan]");
    }
}
