mod fn_heuristic;
mod heuristic;
mod manhattan;
mod shorter_robot;
mod zero_heuristic;

pub use fn_heuristic::FnHeuristic;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::{center_manhattan, tail_manhattan};
pub use shorter_robot::{shorten, ShorterRobotHeuristic};
pub use zero_heuristic::ZeroHeuristic;
