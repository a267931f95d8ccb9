mod errors;
pub mod heuristics;
mod node_collection;
mod open_lists;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod solution;
mod state_space;
mod termination_condition;

pub use errors::{ConfigError, NodeCollectionError, MIN_ROBOT_LENGTH};
pub use heuristics::{Heuristic, HeuristicValue};
pub use node_collection::{DistanceTable, NodeCollection};
pub use open_lists::{FifoOpenList, PriorityOpenList};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use solution::{FailureReason, Solution};
pub use state_space::{Cost, StateSpace};
pub use termination_condition::TerminationCondition;
