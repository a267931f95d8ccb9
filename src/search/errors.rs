use thiserror::Error;

/// Shortest robot the maze can hold in a meaningful way.
pub const MIN_ROBOT_LENGTH: usize = 3;

/// Invalid search or heuristic configuration. These are reported as soon as
/// the offending value is seen and are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("heuristic weight must lie in [0, 1], got {0}")]
    InvalidWeight(f64),
    #[error("reduction amount must be even, got {0}")]
    OddReduction(usize),
    #[error(
        "cannot shorten a robot of length {length} by {reduction}, the shortened \
        robot must be at least {MIN_ROBOT_LENGTH} long"
    )]
    ReductionTooLarge { length: usize, reduction: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeCollectionError {
    #[error("state is already in the collection, remove it before adding it again")]
    DuplicateState,
}
