//! Breadth first search

use crate::search::{
    search_engines::{finish_search, SearchEngine},
    ConfigError, FailureReason, FifoOpenList, NodeCollection, SearchSpace, SearchStatistics,
    Solution, StateSpace, TerminationCondition,
};
use std::time::Duration;
use tracing::info;

/// Breadth first search. Successors are checked against the goal when they
/// are generated rather than when they are expanded. The search minimises the
/// number of steps, which is only the cheapest path when all edges cost the
/// same.
#[derive(Debug, Default)]
pub struct BreadthFirstSearch {}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: StateSpace> SearchEngine<P> for BreadthFirstSearch {
    fn name(&self) -> String {
        "breadth first search robot".to_string()
    }

    fn solve(
        &mut self,
        problem: &P,
        time_limit: Option<Duration>,
    ) -> Result<Solution<P::State>, ConfigError> {
        let mut termination = TerminationCondition::new(time_limit);
        let mut statistics = SearchStatistics::new();

        let initial_state = problem.initial_state();
        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut queue = FifoOpenList::new();
        let mut closed = NodeCollection::new();
        queue
            .add(initial_state, search_space.get_root_node().get_node_id())
            .expect("Open list starts empty");

        let failure_reason = loop {
            if let Some(reason) = termination.should_terminate() {
                break reason;
            }
            termination.log_if_needed();

            let Some(node_id) = queue.pop() else {
                break FailureReason::NoSolution;
            };
            let node = search_space.get_node(node_id);
            let state = node.get_state().clone();
            let g_value = node.get_g();
            let is_root = node.is_root();
            closed
                .add(state.clone(), node_id)
                .expect("States are never queued twice");
            statistics.increment_expanded_nodes();

            // The root is never generated, so it is the only node checked on
            // expansion
            if is_root && problem.is_goal(&state) {
                info!("initial state is a goal");
                return Ok(finish_search(
                    Ok(node_id),
                    search_space,
                    &statistics,
                    &mut termination,
                    None,
                ));
            }

            let successors = problem.expand_state(&state);
            statistics.increment_generated_nodes(successors.len());
            for (successor, cost) in successors {
                if problem.is_goal(&successor) {
                    let goal_id = search_space.add_node(successor, g_value + cost, node_id);
                    info!("goal found");
                    return Ok(finish_search(
                        Ok(goal_id),
                        search_space,
                        &statistics,
                        &mut termination,
                        None,
                    ));
                }
                if closed.contains(&successor) || queue.contains(&successor) {
                    continue;
                }
                let child_id = search_space.add_node(successor.clone(), g_value + cost, node_id);
                queue
                    .add(successor, child_id)
                    .expect("Successor was checked not to be queued");
            }
        };

        info!(reason = %failure_reason, "no solution found");
        Ok(finish_search(
            Err(failure_reason),
            search_space,
            &statistics,
            &mut termination,
            None,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{MazeProblem, MazeState};
    use crate::search::search_engines::BestFirstSearch;
    use crate::search::Cost;
    use crate::test_utils::*;

    #[test]
    fn bfs_solves_open_maze() {
        let problem = open_5x5_problem();
        let solution = BreadthFirstSearch::new().solve(&problem, None).unwrap();

        assert!(solution.is_solved());
        assert!(solution.nodes_expanded() > 0);
        assert_eq!(solution.cost(), Some(Cost::from(6.)));
        let path = solution.path().unwrap();
        assert_eq!(path.first(), Some(&problem.initial_state()));
        assert!(problem.is_goal(path.last().unwrap()));
        assert_eq!(path.len(), 7);
        assert_eq!(solution.heuristic_init_time(), None);
    }

    #[test]
    fn bfs_path_is_made_of_legal_moves() {
        let problem = MazeProblem::from_text(WALLED_MAZE_TEXT).unwrap();
        let solution = BreadthFirstSearch::new().solve(&problem, None).unwrap();
        let path = solution.path().unwrap();
        for pair in path.windows(2) {
            let successors: Vec<MazeState> = problem
                .expand_state(&pair[0])
                .into_iter()
                .map(|(state, _)| state)
                .collect();
            assert!(successors.contains(&pair[1]));
        }
    }

    #[test]
    fn bfs_zero_time_limit() {
        let problem = open_5x5_problem();
        let solution = BreadthFirstSearch::new()
            .solve(&problem, Some(Duration::ZERO))
            .unwrap();
        assert!(!solution.is_solved());
        assert_eq!(
            solution.failure_reason(),
            Some(FailureReason::TimeLimitExceeded)
        );
        assert_eq!(solution.nodes_expanded(), 0);
    }

    #[test]
    fn bfs_reports_exhaustion() {
        let problem = unreachable_goal_problem();
        let solution = BreadthFirstSearch::new().solve(&problem, None).unwrap();
        assert_eq!(solution.failure_reason(), Some(FailureReason::NoSolution));
        assert!(solution.final_node().is_none());
        assert!(solution.nodes_expanded() > 0);
    }

    #[test]
    fn bfs_initial_goal() {
        let problem = GraphProblem::new(0, 0, &[(0, 1, 1.)]);
        let solution = BreadthFirstSearch::new().solve(&problem, None).unwrap();
        assert_eq!(solution.path(), Some(vec![0]));
        assert_eq!(solution.cost(), Some(Cost::from(0.)));
        assert_eq!(solution.nodes_expanded(), 1);
    }

    #[test]
    fn bfs_minimises_steps_not_cost() {
        // 0 -> 3 directly is expensive, 0 -> 1 -> 2 -> 3 is cheap
        let problem = GraphProblem::new(
            0,
            3,
            &[(0, 3, 10.), (0, 1, 1.), (1, 2, 1.), (2, 3, 1.)],
        );
        let solution = BreadthFirstSearch::new().solve(&problem, None).unwrap();
        assert_eq!(solution.path(), Some(vec![0, 3]));
        assert_eq!(solution.cost(), Some(Cost::from(10.)));
    }

    #[test]
    fn bfs_cost_is_never_below_the_optimum() {
        let problem = detour_problem();
        let optimum = BestFirstSearch::uniform_cost()
            .solve(&problem, None)
            .unwrap()
            .cost()
            .unwrap();
        let solution = BreadthFirstSearch::new().solve(&problem, None).unwrap();

        assert!(solution.cost().unwrap() >= optimum);
        let path = solution.path().unwrap();
        assert_eq!(path.first(), Some(&problem.initial_state()));
        assert!(problem.is_goal(path.last().unwrap()));
    }
}
