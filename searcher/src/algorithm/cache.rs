//! Search cacheing support to eliminate already explored items.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;

use crate::node::Cost;

/// Defines the behavior required of a search cache.
pub trait Cache: Default {
    type State;

    /// Record a newly discovered state reached at `cost`.
    ///
    /// Returns true when the state should be pushed onto the frontier.
    fn admit(&mut self, state: &Self::State, cost: Cost) -> bool;

    /// Whether a popped node has since been superseded by a cheaper one.
    fn is_stale(&self, state: &Self::State, cost: Cost) -> bool;

    /// Number of states recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Remembers every state which has been discovered.
///
/// A state is admitted only the first time it is seen,
/// regardless of cost.
#[derive(Debug, Clone)]
pub struct ExploredSet<T> {
    explored: HashSet<T>,
}

impl<T> Default for ExploredSet<T> {
    fn default() -> Self {
        ExploredSet {
            explored: HashSet::default(),
        }
    }
}

impl<T> ExploredSet<T>
where
    T: Eq + Hash,
{
    pub fn contains(&self, state: &T) -> bool {
        self.explored.contains(state)
    }
}

impl<T> Cache for ExploredSet<T>
where
    T: Clone + Eq + Hash,
{
    type State = T;

    fn admit(&mut self, state: &T, _cost: Cost) -> bool {
        if self.explored.contains(state) {
            return false;
        }
        self.explored.insert(state.clone());
        true
    }

    fn is_stale(&self, _state: &T, _cost: Cost) -> bool {
        false
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

/// Provides a simple hashmap cache which stores the
/// cheapest known cost to reach every state encountered.
#[derive(Debug, Clone)]
pub struct CostMap<T> {
    costs: HashMap<T, Cost>,
}

impl<T> Default for CostMap<T> {
    fn default() -> Self {
        CostMap {
            costs: HashMap::default(),
        }
    }
}

impl<T> CostMap<T>
where
    T: Eq + Hash,
{
    /// Cheapest known cost to reach this state.
    pub fn get(&self, state: &T) -> Option<Cost> {
        self.costs.get(state).copied()
    }
}

impl<T> Cache for CostMap<T>
where
    T: Clone + Eq + Hash,
{
    type State = T;

    fn admit(&mut self, state: &T, cost: Cost) -> bool {
        // (a) States which are not in the cache are added.
        // (b) States already reached at a lower or equal cost are ignored.
        // (c) States already reached at a higher cost take the new cost.
        match self.costs.get_mut(state) {
            None => {
                // (a)
                self.costs.insert(state.clone(), cost);
                true
            }
            Some(best) if *best <= cost => false, // (b)
            Some(best) => {
                // (c)
                *best = cost;
                true
            }
        }
    }

    fn is_stale(&self, state: &T, cost: Cost) -> bool {
        self.costs.get(state).map_or(false, |best| cost > *best)
    }

    fn len(&self) -> usize {
        self.costs.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explored_set_admits_once() {
        let mut cache = ExploredSet::default();

        assert!(cache.admit(&'a', 5.0));
        assert!(!cache.admit(&'a', 1.0));
        assert!(cache.admit(&'b', 0.0));
        assert!(cache.contains(&'a'));
        assert!(!cache.is_stale(&'a', 100.0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cost_map_relaxes() {
        let mut cache = CostMap::default();

        assert!(cache.is_empty());
        assert!(cache.admit(&"s", 4.0));
        assert!(!cache.admit(&"s", 4.0));
        assert!(!cache.admit(&"s", 6.0));
        assert!(cache.admit(&"s", 2.0));
        assert_eq!(cache.get(&"s"), Some(2.0));
        assert_eq!(cache.get(&"t"), None);
    }

    #[test]
    fn cost_map_stale_entries() {
        let mut cache = CostMap::default();
        cache.admit(&1, 4.0);
        cache.admit(&1, 2.0);

        assert!(cache.is_stale(&1, 4.0));
        assert!(!cache.is_stale(&1, 2.0));
        assert!(!cache.is_stale(&2, 9.0));
    }
}
