use crate::search::{Cost, NodeId, SearchNode, SearchSpace};
use serde::Serialize;
use std::time::Duration;

/// Why a search run ended without reaching a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The time budget ran out before the search finished
    #[strum(serialize = "time limit exceeded")]
    TimeLimitExceeded,
    /// Every reachable state was expanded without finding a goal
    #[strum(serialize = "no solution exists")]
    NoSolution,
}

/// The outcome of one call to [`crate::search::search_engines::SearchEngine::solve`].
///
/// A [`Solution`] keeps the search space of its run alive, so the final node
/// can be traced back to the root through its parent ids.
#[derive(Debug)]
pub struct Solution<S> {
    search_space: SearchSpace<S>,
    final_node: Option<NodeId>,
    failure_reason: Option<FailureReason>,
    elapsed_time: Duration,
    nodes_expanded: usize,
    heuristic_init_time: Option<Duration>,
}

impl<S> Solution<S> {
    pub(crate) fn found(
        search_space: SearchSpace<S>,
        final_node: NodeId,
        elapsed_time: Duration,
        nodes_expanded: usize,
        heuristic_init_time: Option<Duration>,
    ) -> Self {
        Self {
            search_space,
            final_node: Some(final_node),
            failure_reason: None,
            elapsed_time,
            nodes_expanded,
            heuristic_init_time,
        }
    }

    pub(crate) fn failed(
        search_space: SearchSpace<S>,
        failure_reason: FailureReason,
        elapsed_time: Duration,
        nodes_expanded: usize,
        heuristic_init_time: Option<Duration>,
    ) -> Self {
        Self {
            search_space,
            final_node: None,
            failure_reason: Some(failure_reason),
            elapsed_time,
            nodes_expanded,
            heuristic_init_time,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.final_node.is_some()
    }

    pub fn final_node(&self) -> Option<&SearchNode<S>> {
        self.final_node
            .map(|node_id| self.search_space.get_node(node_id))
    }

    /// The parent of `node` in the search tree, `None` for the root.
    pub fn parent(&self, node: &SearchNode<S>) -> Option<&SearchNode<S>> {
        if node.is_root() {
            None
        } else {
            Some(self.search_space.get_node(node.get_parent_id()))
        }
    }

    /// Cost of the path to the final node.
    pub fn cost(&self) -> Option<Cost> {
        self.final_node().map(SearchNode::get_g)
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        self.failure_reason
    }

    /// Total wall-clock time of the run, including heuristic initialisation.
    pub fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Time spent initialising the heuristic, `None` if the heuristic did not
    /// need initialising.
    pub fn heuristic_init_time(&self) -> Option<Duration> {
        self.heuristic_init_time
    }
}

impl<S: Clone> Solution<S> {
    /// The states from the initial state to the goal, inclusive.
    pub fn path(&self) -> Option<Vec<S>> {
        self.final_node
            .map(|node_id| self.search_space.extract_path(node_id))
    }
}
