//! Distance estimates that ignore the walls of the maze.
//!
//! Every move shifts both ends of the robot by exactly one cell, so a
//! Manhattan distance times the cheapest move cost never overestimates.

use crate::maze::{manhattan_distance, MazeProblem, MazeState};
use crate::search::HeuristicValue;

pub fn tail_manhattan(state: &MazeState, problem: &MazeProblem) -> HeuristicValue {
    let distance = manhattan_distance(state.tail, problem.tail_goal());
    HeuristicValue::from(distance as f64 * problem.costs().cheapest())
}

pub fn center_manhattan(state: &MazeState, problem: &MazeProblem) -> HeuristicValue {
    let center = state.center();
    let goal_center = problem.goal().center();
    let distance = (center[0] - goal_center[0]).abs() + (center[1] - goal_center[1]).abs();
    HeuristicValue::from(distance * problem.costs().cheapest())
}
