mod best_first;
mod bfs;
mod search_engine;

pub use best_first::{BestFirstSearch, PriorityFunction, Weight};
pub use bfs::BreadthFirstSearch;
pub(crate) use search_engine::finish_search;
pub use search_engine::{SearchEngine, SearchEngineName};
