//! A robot made of a straight head/tail segment moving through a grid maze.
//! This is the concrete state space the heuristics are written for.

mod maze_map;
mod maze_problem;
mod maze_state;

pub use maze_map::MazeMap;
pub use maze_problem::{MazeProblem, MoveCosts};
pub use maze_state::{manhattan_distance, MazeState, Move, Position};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("failed to read problem file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse problem file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("the map has no cells")]
    EmptyMap,
    #[error("row {row} of the map has a different length than the first row")]
    RaggedMap { row: usize },
    #[error("unknown cell {cell:?} at row {row}, column {col}")]
    InvalidCell { cell: char, row: usize, col: usize },
    #[error("head and tail of {0:?} must differ on exactly one axis")]
    NotStraight(MazeState),
    #[error("initial robot has length {initial} but the goal has length {goal}")]
    LengthMismatch { initial: usize, goal: usize },
    #[error("{0:?} overlaps a blocked cell")]
    Blocked(MazeState),
    #[error("move costs must be finite and non-negative, got {0}")]
    InvalidCost(f64),
}
