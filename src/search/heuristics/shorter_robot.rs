//! Heuristic backed by the exact distances of a shorter robot.
//!
//! Every move of the robot is also a legal move of a robot that keeps only
//! its middle cells, at the same cost, so the optimal cost of the shortened
//! problem never exceeds the cost of the full-length one. The distances of the
//! shortened robot to its goal are computed once, by a uniform cost search
//! run backwards from the (reversed) shortened goal, and then looked up.

use crate::maze::{MazeProblem, MazeState};
use crate::search::{
    search_engines::BestFirstSearch, ConfigError, DistanceTable, Heuristic, HeuristicValue,
    MIN_ROBOT_LENGTH,
};
use std::time::{Duration, Instant};
use tracing::info;

/// Shrink the robot by `reduction` cells, half from each end, along the axis
/// its body lies on.
pub fn shorten(state: &MazeState, reduction: usize) -> MazeState {
    let half = (reduction / 2) as i32;
    let (mut head, mut tail) = (state.head, state.tail);
    if let Some(axis) = (0..2).find(|&axis| head[axis] > tail[axis]) {
        head[axis] -= half;
        tail[axis] += half;
    } else {
        let axis = (0..2).find(|&axis| tail[axis] > head[axis]).unwrap_or(0);
        head[axis] += half;
        tail[axis] -= half;
    }
    MazeState::new(head, tail)
}

#[derive(Debug)]
struct ReducedProblem {
    problem: MazeProblem,
    distances: DistanceTable<MazeState>,
}

#[derive(Debug)]
pub struct ShorterRobotHeuristic {
    reduction: usize,
    /// Own budget of the precomputation, on top of whatever is left of the
    /// budget of the search that initialises the heuristic
    time_limit: Option<Duration>,
    /// Precompute when the search engine initialises the heuristic rather
    /// than on construction
    deferred: bool,
    reduced: Option<ReducedProblem>,
    precomputation_time: Option<Duration>,
}

impl ShorterRobotHeuristic {
    /// Build the heuristic for `problem` and precompute its distance table
    /// straight away.
    pub fn new(problem: &MazeProblem, reduction: usize) -> Result<Self, ConfigError> {
        Self::with_time_limit(problem, reduction, None)
    }

    /// Like [`ShorterRobotHeuristic::new`], with a time budget for the
    /// precomputation. A table cut short by the budget still only holds exact
    /// distances; states it misses evaluate to zero.
    pub fn with_time_limit(
        problem: &MazeProblem,
        reduction: usize,
        time_limit: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let mut heuristic = Self::deferred(reduction)?.precompute_within(time_limit);
        heuristic.deferred = false;
        heuristic.precompute(problem, None)?;
        Ok(heuristic)
    }

    /// A heuristic that precomputes its table when a search engine
    /// initialises it, so the engine can report the precomputation time.
    pub fn deferred(reduction: usize) -> Result<Self, ConfigError> {
        if reduction % 2 != 0 {
            return Err(ConfigError::OddReduction(reduction));
        }
        Ok(Self {
            reduction,
            time_limit: None,
            deferred: true,
            reduced: None,
            precomputation_time: None,
        })
    }

    pub fn precompute_within(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    fn precompute(
        &mut self,
        problem: &MazeProblem,
        search_time_limit: Option<Duration>,
    ) -> Result<(), ConfigError> {
        let length = problem.length();
        if length < self.reduction + MIN_ROBOT_LENGTH {
            return Err(ConfigError::ReductionTooLarge {
                length,
                reduction: self.reduction,
            });
        }

        let time_limit = match (self.time_limit, search_time_limit) {
            (Some(own), Some(search)) => Some(own.min(search)),
            (own, search) => own.or(search),
        };

        let start_time = Instant::now();
        let shorter_goal = shorten(&problem.goal(), self.reduction);
        // Searching forwards from the reversed goal gives the distance of
        // every reversed state to the goal
        let reduced_problem = problem
            .with_configurations(shorter_goal.reversed(), shorter_goal)
            .expect("The shortened goal covers a subset of the goal cells");
        let distances =
            BestFirstSearch::uniform_cost().compute_all_dists(&reduced_problem, time_limit)?;

        let precomputation_time = start_time.elapsed();
        info!(
            reduction = self.reduction,
            tabulated_states = distances.len(),
            precomputation_time = precomputation_time.as_secs_f64(),
        );
        self.precomputation_time = Some(precomputation_time);
        self.reduced = Some(ReducedProblem {
            problem: reduced_problem,
            distances,
        });
        Ok(())
    }

    pub fn reduction(&self) -> usize {
        self.reduction
    }

    /// Time the last precomputation took.
    pub fn precomputation_time(&self) -> Option<Duration> {
        self.precomputation_time
    }

    pub fn reduced_problem(&self) -> Option<&MazeProblem> {
        self.reduced.as_ref().map(|reduced| &reduced.problem)
    }

    pub fn distances(&self) -> Option<&DistanceTable<MazeState>> {
        self.reduced.as_ref().map(|reduced| &reduced.distances)
    }
}

impl Heuristic<MazeProblem> for ShorterRobotHeuristic {
    /// Distance of the shortened robot, or zero if the precomputation never
    /// reached it. Zero keeps the estimate admissible but tells the search
    /// nothing.
    fn evaluate(&mut self, state: &MazeState, _problem: &MazeProblem) -> HeuristicValue {
        let reduced = self
            .reduced
            .as_ref()
            .expect("Shorter robot heuristic must be initialised before evaluation");
        let key = shorten(state, self.reduction).reversed();
        reduced
            .distances
            .distance(&key)
            .unwrap_or_else(|| HeuristicValue::from(0.))
    }

    fn requires_initialisation(&self) -> bool {
        self.deferred
    }

    fn initialise(
        &mut self,
        problem: &MazeProblem,
        time_limit: Option<Duration>,
    ) -> Result<(), ConfigError> {
        self.precompute(problem, time_limit)
    }

    fn name(&self) -> String {
        format!("shorter_robot(k={})", self.reduction)
    }
}
