//! Provides the building blocks for search algorithms

use std::cmp;
use std::default::Default;
use std::time::{Duration, Instant};

use log::{debug, info, trace};

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::node::{node_to_path, Cost, Node, NodeId, Tree};
use crate::traits::SearchHeuristic;

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;

/// Trait used to implement the frontier of nodes which
/// have been discovered but not yet expanded.
///
/// The frontier owns each item from the moment it is pushed
/// until it is popped again.
pub trait Frontier: Default {
    type Item;

    fn is_empty(&self) -> bool;

    fn push(&mut self, item: Self::Item);

    /// Remove the next item to expand.
    ///
    /// Callers must check [Frontier::is_empty] first,
    /// popping an empty frontier panics.
    fn pop(&mut self) -> Self::Item;

    fn len(&self) -> usize;
}

/// Options which bound how long a search may run.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Maximum number of nodes to pop from the frontier.
    pub limit: Option<usize>,

    /// Maximum wall-clock time to spend searching.
    pub time_limit: Option<Duration>,

    /// Log progress every this many steps.
    pub verbose: Option<usize>,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        if self.current >= self.maximum {
            return Err(SearchError::StepLimitExhausted(self.current));
        }
        self.current += 1;
        Ok(())
    }
}

#[derive(Debug)]
struct TimeLimit {
    started: Instant,
    maximum: Duration,
}

impl TimeLimit {
    fn new(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            maximum: limit,
        }
    }

    fn check(&self) -> Result<()> {
        let elapsed = self.started.elapsed();
        if elapsed >= self.maximum {
            Err(SearchError::TimeLimitExhausted(elapsed))
        } else {
            Ok(())
        }
    }
}

/// Counters describing the work done by a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded into their successors.
    pub expanded: usize,

    /// Nodes popped and discarded because a cheaper path was found.
    pub skipped: usize,

    /// Nodes pushed onto the frontier, including the root.
    pub pushed: usize,

    /// Largest size the frontier reached.
    pub max_frontier: usize,
}

/// The outcome of a single step of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A node was expanded and its new successors pushed.
    Expanded,

    /// A superseded node was popped and dropped.
    Skipped,

    /// A node satisfying the goal was popped.
    Found(NodeId),

    /// The frontier is empty, no goal can be reached.
    Exhausted,
}

/// A successful search result.
///
/// Holds the terminal node along with every node expanded
/// during the search, so that the path can be reconstructed.
#[derive(Debug, Clone)]
pub struct Solution<T> {
    tree: Tree<T>,
    terminal: NodeId,
    stats: SearchStats,
}

impl<T> Solution<T> {
    /// The terminal node, whose state satisfied the goal.
    pub fn node(&self) -> &Node<T> {
        &self.tree[self.terminal]
    }

    pub fn state(&self) -> &T {
        self.node().state()
    }

    /// Cost accumulated along the path to the terminal node.
    pub fn cost(&self) -> Cost {
        self.node().cost()
    }

    /// Number of steps in the path.
    pub fn len(&self) -> usize {
        self.tree.depth(self.terminal)
    }

    /// True when the initial state was already a goal.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn terminal(&self) -> NodeId {
        self.terminal
    }

    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<T> Solution<T>
where
    T: Clone,
{
    /// States from the initial state to the goal, inclusive.
    pub fn path(&self) -> Vec<T> {
        node_to_path(&self.tree, self.terminal)
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (Q) and a generic cache (C) to provide
/// a single foundation for multiple search algorithms.
#[derive(Debug)]
pub struct SearchAlgorithm<P, Q, C>
where
    P: SearchHeuristic,
    Q: Frontier<Item = Node<P::State>>,
    C: Cache<State = P::State>,
{
    problem: P,
    cache: C,
    queue: Q,
    tree: Tree<P::State>,
    stats: SearchStats,
    options: SearchOptions,
}

impl<P, Q, C> SearchAlgorithm<P, Q, C>
where
    P: SearchHeuristic,
    Q: Frontier<Item = Node<P::State>>,
    C: Cache<State = P::State>,
{
    /// Build a search which starts from the initial state.
    pub fn new(problem: P, initial: P::State) -> Self {
        let mut sr = SearchAlgorithm {
            problem,
            cache: C::default(),
            queue: Q::default(),
            tree: Tree::new(),
            stats: SearchStats::default(),
            options: SearchOptions::default(),
        };
        let heuristic = sr.problem.heuristic(&initial);
        sr.cache.admit(&initial, 0.0);
        sr.queue.push(Node::new(initial, None, 0.0, heuristic));
        sr.stats.pushed = 1;
        sr.stats.max_frontier = 1;
        sr
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many nodes have been popped without
    /// finding a goal, [SearchAlgorithm::run] returns an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.limit = Some(limit);
    }

    pub fn set_time_limit(&mut self, limit: Duration) {
        self.options.time_limit = Some(limit);
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of nodes waiting on the frontier.
    pub fn frontier_len(&self) -> usize {
        self.queue.len()
    }

    /// Nodes which have been expanded so far.
    pub fn tree(&self) -> &Tree<P::State> {
        &self.tree
    }

    /// Pop and process a single node from the frontier.
    ///
    /// Calling this repeatedly until it returns [Step::Found] or
    /// [Step::Exhausted] performs the whole search, which lets
    /// callers interleave searching with their own bookkeeping.
    pub fn step(&mut self) -> Step {
        if self.queue.is_empty() {
            return Step::Exhausted;
        }

        let node = self.queue.pop();

        // Lazy deletion: a cheaper path to this state was pushed
        // after this node was, so this node is obsolete.
        if self.cache.is_stale(node.state(), node.cost()) {
            self.stats.skipped += 1;
            trace!("skipping superseded node at cost {}", node.cost());
            return Step::Skipped;
        }

        if self.problem.is_goal(node.state()) {
            let id = self.tree.insert(node);
            return Step::Found(id);
        }

        let id = self.tree.insert(node);
        self.stats.expanded += 1;

        let current = &self.tree[id];
        let mut pushed = 0;
        for child in self.problem.successors(current.state()) {
            let cost = current.cost() + self.problem.edge_cost(current.state(), &child);
            if self.cache.admit(&child, cost) {
                let heuristic = self.problem.heuristic(&child);
                self.queue.push(Node::new(child, Some(id), cost, heuristic));
                pushed += 1;
            }
        }
        trace!(
            "expanded node {} at cost {}, pushed {} successors",
            id.index(),
            current.cost(),
            pushed
        );

        self.stats.pushed += pushed;
        self.stats.max_frontier = cmp::max(self.stats.max_frontier, self.queue.len());
        Step::Expanded
    }

    /// Finish a search which found its goal at `terminal`.
    pub fn into_solution(self, terminal: NodeId) -> Solution<P::State> {
        info!(
            "Found goal at depth {} after expanding {} nodes ({} pushed, {} skipped)",
            self.tree.depth(terminal),
            self.stats.expanded,
            self.stats.pushed,
            self.stats.skipped
        );
        Solution {
            tree: self.tree,
            terminal,
            stats: self.stats,
        }
    }

    fn exhausted(&self) {
        info!(
            "Search exhausted after expanding {} nodes, no goal found",
            self.stats.expanded
        );
    }

    /// Run the search to completion without any limits.
    ///
    /// Returns `None` when the frontier is exhausted without
    /// reaching a goal.
    pub fn solve(mut self) -> Option<Solution<P::State>> {
        loop {
            match self.step() {
                Step::Found(id) => return Some(self.into_solution(id)),
                Step::Exhausted => {
                    self.exhausted();
                    return None;
                }
                Step::Expanded | Step::Skipped => {}
            }
        }
    }

    /// Run the search to completion, respecting the configured [SearchOptions].
    pub fn run(mut self) -> Result<Option<Solution<P::State>>> {
        let mut counter = self.options.limit.map(StepLimit::new);
        let timer = self.options.time_limit.map(TimeLimit::new);
        let verbose = self.options.verbose.filter(|&n| n > 0);

        let mut n = 0;
        while !self.queue.is_empty() {
            if let Some(c) = counter.as_mut() {
                c.increment()?;
            }
            if let Some(t) = timer.as_ref() {
                t.check()?;
            }
            n += 1;

            let step = self.step();
            if let Some(every) = verbose {
                if n % every == 0 {
                    debug!(
                        "Q{} C{} E{} S{} ({:?}) {}",
                        self.queue.len(),
                        self.cache.len(),
                        self.stats.expanded,
                        self.stats.skipped,
                        step,
                        n
                    );
                }
            }

            if let Step::Found(id) = step {
                return Ok(Some(self.into_solution(id)));
            }
        }
        self.exhausted();
        Ok(None)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::astar::AStarSearcher;
    use crate::algorithm::basic::{breadth_first, depth_first};
    use crate::problem::{FnHeuristic, FnSpace};

    type Line = FnSpace<i32, fn(&i32) -> bool, fn(&i32) -> Vec<i32>>;

    // States 0..=10 on a line, the goal at 10.
    fn line() -> Line {
        fn goal(n: &i32) -> bool {
            *n == 10
        }
        fn successors(n: &i32) -> Vec<i32> {
            vec![n - 1, n + 1]
                .into_iter()
                .filter(|m| (0..=10).contains(m))
                .collect()
        }
        FnSpace::new(goal as fn(&i32) -> bool, successors as fn(&i32) -> Vec<i32>)
    }

    #[test]
    fn stepping() {
        let mut search = breadth_first(line(), 8);

        assert_eq!(search.frontier_len(), 1);
        assert_eq!(search.step(), Step::Expanded);
        assert_eq!(search.frontier_len(), 2);
        assert_eq!(search.step(), Step::Expanded);
        assert_eq!(search.step(), Step::Expanded);
        assert_eq!(search.step(), Step::Expanded);

        let found = match search.step() {
            Step::Found(id) => id,
            other => panic!("Expected to find the goal, got {:?}", other),
        };
        assert_eq!(search.tree()[found].state(), &10);

        let solution = search.into_solution(found);
        assert_eq!(solution.path(), vec![8, 9, 10]);
        assert_eq!(solution.len(), 2);
    }

    #[test]
    fn stepping_exhausted() {
        let space: FnSpace<i32, _, _> = FnSpace::new(|_: &i32| false, |_: &i32| Vec::new());
        let mut search = depth_first(space, 0);

        assert_eq!(search.step(), Step::Expanded);
        assert_eq!(search.step(), Step::Exhausted);
        assert_eq!(search.step(), Step::Exhausted);
        assert_eq!(search.stats().expanded, 1);
    }

    #[test]
    fn step_limit() {
        let mut search = breadth_first(line(), 0);
        search.set_limit(5);

        match search.run() {
            Err(SearchError::StepLimitExhausted(n)) => assert_eq!(n, 5),
            other => panic!("Expected the step limit to be hit, got {:?}", other),
        }
    }

    #[test]
    fn step_limit_not_reached() {
        let options = SearchOptions {
            limit: Some(11),
            verbose: Some(2),
            ..SearchOptions::default()
        };
        let solution = breadth_first(line(), 0)
            .with_options(options)
            .run()
            .unwrap()
            .unwrap();

        assert_eq!(solution.len(), 10);
        assert_eq!(solution.stats().expanded, 10);
    }

    #[test]
    fn time_limit() {
        let mut search = depth_first(line(), 0);
        search.set_time_limit(Duration::from_secs(0));

        assert!(matches!(
            search.run(),
            Err(SearchError::TimeLimitExhausted(_))
        ));
    }

    #[test]
    fn run_exhausted() {
        let successors = |n: &i32| if *n < 3 { vec![n + 1] } else { vec![] };
        let space: FnSpace<i32, _, _> = FnSpace::new(|_: &i32| false, successors);
        let result = depth_first(space, 0).run().unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn stats() {
        let informed = FnHeuristic::new(
            line(),
            |n: &i32| f64::from(10 - n),
            |_: &i32, _: &i32| 1.0,
        );
        let solution = AStarSearcher::new(informed, 0).solve().unwrap();
        let stats = solution.stats();

        assert_eq!(solution.cost(), 10.0);
        assert_eq!(stats.expanded, 10);
        assert_eq!(stats.pushed, 11);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.max_frontier, 1);
    }
}
