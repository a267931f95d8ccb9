use crate::maze::MazeProblem;
use crate::search::heuristics::{
    center_manhattan, tail_manhattan, FnHeuristic, ShorterRobotHeuristic, ZeroHeuristic,
};
use crate::search::{ConfigError, Cost, StateSpace};
use std::fmt::Debug;
use std::time::Duration;

pub type HeuristicValue = Cost;

pub trait Heuristic<P: StateSpace>: Debug {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;

    /// Whether [`Heuristic::initialise`] has to run before the first call to
    /// [`Heuristic::evaluate`]. Search engines only initialise (and time the
    /// initialisation of) heuristics that say so.
    fn requires_initialisation(&self) -> bool {
        false
    }

    /// One-off preparation against the problem about to be searched.
    /// `time_limit` is what is left of the search's own budget, `None` if the
    /// search is unbounded.
    fn initialise(
        &mut self,
        _problem: &P,
        _time_limit: Option<Duration>,
    ) -> Result<(), ConfigError> {
        Ok(())
    }

    fn name(&self) -> String;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "zero", help = "The zero heuristic.")]
    Zero,
    #[clap(help = "Manhattan distance between the tail and its goal.")]
    TailManhattan,
    #[clap(help = "Manhattan distance between the body center and its goal.")]
    CenterManhattan,
    #[clap(help = "Exact distances of a shortened robot, precomputed by a \
        uniform cost search before the main search starts. Requires a \
        reduction amount.")]
    ShorterRobot,
}

impl HeuristicName {
    /// Build the heuristic. `reduction` is only used by the shorter robot
    /// heuristic, whose precomputation is deferred until the search engine
    /// initialises it.
    pub fn create(&self, reduction: usize) -> Result<Box<dyn Heuristic<MazeProblem>>, ConfigError> {
        Ok(match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicName::TailManhattan => {
                Box::new(FnHeuristic::new("tail_manhattan", tail_manhattan))
            }
            HeuristicName::CenterManhattan => {
                Box::new(FnHeuristic::new("center_manhattan", center_manhattan))
            }
            HeuristicName::ShorterRobot => Box::new(ShorterRobotHeuristic::deferred(reduction)?),
        })
    }
}
