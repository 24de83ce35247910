use std::hash::Hash;

use crate::node::Cost;

/// Provides an interface for conducting searches.
///
/// A search space is defined only by which states are goals
/// and which states can be reached in a single step from
/// any other state. States are read-only values to the
/// search algorithms, which clone them into nodes as they
/// are discovered.
pub trait SearchSpace {
    type State: Clone + Eq + Hash;

    /// Indicates that this state satisfies the search, and
    /// causes the search algorithm to stop and return it.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produces the states reachable in one step from this state.
    ///
    /// The order of the returned states is the order in which
    /// they are handed to the frontier.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// An interface for searching when a heuristic can be provided.
///
/// The heuristic should be the best guess at the remaining cost
/// from a state to the nearest goal. A* only returns the cheapest
/// path when this guess never overestimates.
pub trait SearchHeuristic: SearchSpace {
    /// Estimated remaining cost from this state to a goal.
    fn heuristic(&self, state: &Self::State) -> Cost;

    /// Cost of stepping from one state to an adjacent state.
    ///
    /// Defaults to a uniform cost of one per step.
    #[allow(unused_variables)]
    fn edge_cost(&self, from: &Self::State, to: &Self::State) -> Cost {
        1.0
    }
}
