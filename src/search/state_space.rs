use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Edge and path costs. Costs are never negative.
pub type Cost = OrderedFloat<f64>;

/// A [`StateSpace`] is the contract between the search engines and the
/// problem being solved. The engines never look inside a state, they only
/// rely on equality and hashing to tell states apart.
pub trait StateSpace {
    type State: Clone + Eq + Hash + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Generate the successors of `state` together with the cost of the edge
    /// leading to each of them. The order must be deterministic so that ties
    /// are broken the same way on every run.
    fn expand_state(&self, state: &Self::State) -> Vec<(Self::State, Cost)>;
}
