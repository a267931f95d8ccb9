use crate::maze::MazeProblem;
use crate::search::{Cost, Heuristic, HeuristicValue, StateSpace};
use std::collections::HashMap;

pub const OPEN_5X5_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/open_5x5.toml"
));

pub const WALLED_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/walled_6x6.toml"
));

pub const REVERSED_GOAL_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/reversed_goal_5x5.toml"
));

pub const LONG_ROBOT_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/long_robot_7x7.toml"
));

pub const DETOUR_MAZE_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/detour_9x13.toml"
));

pub fn open_5x5_problem() -> MazeProblem {
    MazeProblem::from_text(OPEN_5X5_TEXT).unwrap()
}

pub fn walled_problem() -> MazeProblem {
    MazeProblem::from_text(WALLED_MAZE_TEXT).unwrap()
}

pub fn unreachable_goal_problem() -> MazeProblem {
    MazeProblem::from_text(REVERSED_GOAL_TEXT).unwrap()
}

pub fn long_robot_problem() -> MazeProblem {
    MazeProblem::from_text(LONG_ROBOT_TEXT).unwrap()
}

pub fn detour_problem() -> MazeProblem {
    MazeProblem::from_text(DETOUR_MAZE_TEXT).unwrap()
}

/// Small explicit graph, for tests that need exact control over costs and
/// expansion order. Successors come out in the order the edges were given.
#[derive(Debug)]
pub struct GraphProblem {
    start: u32,
    goal: u32,
    edges: HashMap<u32, Vec<(u32, Cost)>>,
}

impl GraphProblem {
    pub fn new(start: u32, goal: u32, edges: &[(u32, u32, f64)]) -> Self {
        let mut adjacency: HashMap<u32, Vec<(u32, Cost)>> = HashMap::new();
        for &(from, to, cost) in edges {
            adjacency
                .entry(from)
                .or_default()
                .push((to, Cost::from(cost)));
        }
        Self {
            start,
            goal,
            edges: adjacency,
        }
    }
}

impl StateSpace for GraphProblem {
    type State = u32;

    fn initial_state(&self) -> u32 {
        self.start
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.goal
    }

    fn expand_state(&self, state: &u32) -> Vec<(u32, Cost)> {
        self.edges.get(state).cloned().unwrap_or_default()
    }
}

/// Heuristic with hand-picked values, zero everywhere else.
#[derive(Debug)]
pub struct TableHeuristic {
    values: HashMap<u32, HeuristicValue>,
}

impl TableHeuristic {
    pub fn new(values: &[(u32, f64)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|&(state, value)| (state, HeuristicValue::from(value)))
                .collect(),
        }
    }
}

impl Heuristic<GraphProblem> for TableHeuristic {
    fn evaluate(&mut self, state: &u32, _problem: &GraphProblem) -> HeuristicValue {
        self.values
            .get(state)
            .copied()
            .unwrap_or_else(|| HeuristicValue::from(0.))
    }

    fn name(&self) -> String {
        "table".to_string()
    }
}
