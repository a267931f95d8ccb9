use crate::search::{Heuristic, HeuristicValue, StateSpace};

/// A heuristic given by a plain function of the state and the problem.
pub struct FnHeuristic<P: StateSpace> {
    name: &'static str,
    function: fn(&P::State, &P) -> HeuristicValue,
}

impl<P: StateSpace> FnHeuristic<P> {
    pub fn new(name: &'static str, function: fn(&P::State, &P) -> HeuristicValue) -> Self {
        Self { name, function }
    }
}

impl<P: StateSpace> std::fmt::Debug for FnHeuristic<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHeuristic").field("name", &self.name).finish()
    }
}

impl<P: StateSpace> Heuristic<P> for FnHeuristic<P> {
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        (self.function)(state, problem)
    }

    fn name(&self) -> String {
        self.name.to_string()
    }
}
