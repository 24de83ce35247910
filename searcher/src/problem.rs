//! Adapters which turn plain functions into search spaces.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::node::Cost;
use crate::traits::{SearchHeuristic, SearchSpace};

/// A search space built from a goal test and a successor function.
pub struct FnSpace<T, G, S> {
    goal_test: G,
    successors: S,
    state: PhantomData<fn() -> T>,
}

impl<T, G, S> FnSpace<T, G, S> {
    pub fn new(goal_test: G, successors: S) -> Self {
        Self {
            goal_test,
            successors,
            state: PhantomData,
        }
    }
}

impl<T, G, S> fmt::Debug for FnSpace<T, G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpace").finish()
    }
}

impl<T, G, S, I> SearchSpace for FnSpace<T, G, S>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    type State = T;

    fn is_goal(&self, state: &T) -> bool {
        (self.goal_test)(state)
    }

    fn successors(&self, state: &T) -> Vec<T> {
        (self.successors)(state).into_iter().collect()
    }
}

/// A search space with a heuristic and an edge cost, built from functions.
pub struct FnHeuristic<P, H, E> {
    space: P,
    heuristic: H,
    edge_cost: E,
}

impl<P, H, E> FnHeuristic<P, H, E> {
    pub fn new(space: P, heuristic: H, edge_cost: E) -> Self {
        Self {
            space,
            heuristic,
            edge_cost,
        }
    }
}

impl<P, H, E> fmt::Debug for FnHeuristic<P, H, E>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHeuristic")
            .field("space", &self.space)
            .finish()
    }
}

impl<P, H, E> SearchSpace for FnHeuristic<P, H, E>
where
    P: SearchSpace,
{
    type State = P::State;

    fn is_goal(&self, state: &Self::State) -> bool {
        self.space.is_goal(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        self.space.successors(state)
    }
}

impl<P, H, E> SearchHeuristic for FnHeuristic<P, H, E>
where
    P: SearchSpace,
    H: Fn(&P::State) -> Cost,
    E: Fn(&P::State, &P::State) -> Cost,
{
    fn heuristic(&self, state: &Self::State) -> Cost {
        (self.heuristic)(state)
    }

    fn edge_cost(&self, from: &Self::State, to: &Self::State) -> Cost {
        (self.edge_cost)(from, to)
    }
}

/// Wraps a search space for the uninformed searches.
///
/// Every node keeps the default cost and heuristic of zero,
/// so the frontier alone decides the exploration order.
#[derive(Debug, Clone)]
pub struct Uninformed<P> {
    space: P,
}

impl<P> Uninformed<P> {
    pub fn new(space: P) -> Self {
        Self { space }
    }

    pub fn into_inner(self) -> P {
        self.space
    }
}

impl<P> SearchSpace for Uninformed<P>
where
    P: SearchSpace,
{
    type State = P::State;

    fn is_goal(&self, state: &Self::State) -> bool {
        self.space.is_goal(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        self.space.successors(state)
    }
}

impl<P> SearchHeuristic for Uninformed<P>
where
    P: SearchSpace,
{
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0.0
    }

    fn edge_cost(&self, _from: &Self::State, _to: &Self::State) -> Cost {
        0.0
    }
}
