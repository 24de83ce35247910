pub use bfs::{bfs, breadth_first, BreadthFirstSearcher, Queue};
pub use dfs::{depth_first, dfs, DepthFirstSearcher, Stack};

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;
    use std::hash::Hash;

    use crate::algorithm::cache::ExploredSet;
    use crate::algorithm::{Frontier, SearchAlgorithm, Solution};
    use crate::node::Node;
    use crate::problem::{FnSpace, Uninformed};
    use crate::traits::SearchSpace;

    /// First-in, first-out frontier.
    #[derive(Debug, Clone)]
    pub struct Queue<I> {
        queue: VecDeque<I>,
    }

    impl<I> Frontier for Queue<I> {
        type Item = I;

        fn is_empty(&self) -> bool {
            self.queue.is_empty()
        }

        fn push(&mut self, item: Self::Item) {
            self.queue.push_back(item);
        }

        fn pop(&mut self) -> Self::Item {
            self.queue.pop_front().expect("pop from an empty queue")
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<I> Default for Queue<I> {
        fn default() -> Self {
            Queue {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearcher<P> = SearchAlgorithm<
        Uninformed<P>,
        Queue<Node<<P as SearchSpace>::State>>,
        ExploredSet<<P as SearchSpace>::State>,
    >;

    /// Build a breadth-first search over a search space.
    pub fn breadth_first<P>(problem: P, initial: P::State) -> BreadthFirstSearcher<P>
    where
        P: SearchSpace,
    {
        SearchAlgorithm::new(Uninformed::new(problem), initial)
    }

    /// Breadth-first search, where the order is determined
    /// by the states returned by the `successors` function.
    ///
    /// The path to the returned node has the fewest steps
    /// of any path to a goal.
    pub fn bfs<T, G, S, I>(initial: T, goal_test: G, successors: S) -> Option<Solution<T>>
    where
        T: Clone + Eq + Hash,
        G: Fn(&T) -> bool,
        S: Fn(&T) -> I,
        I: IntoIterator<Item = T>,
    {
        breadth_first(FnSpace::new(goal_test, successors), initial).solve()
    }
}

mod dfs {
    use std::default::Default;
    use std::hash::Hash;

    use crate::algorithm::cache::ExploredSet;
    use crate::algorithm::{Frontier, SearchAlgorithm, Solution};
    use crate::node::Node;
    use crate::problem::{FnSpace, Uninformed};
    use crate::traits::SearchSpace;

    /// Last-in, first-out frontier.
    #[derive(Debug, Clone)]
    pub struct Stack<I> {
        stack: Vec<I>,
    }

    impl<I> Default for Stack<I> {
        fn default() -> Self {
            Stack { stack: Vec::new() }
        }
    }

    impl<I> Frontier for Stack<I> {
        type Item = I;

        fn is_empty(&self) -> bool {
            self.stack.is_empty()
        }

        fn push(&mut self, item: Self::Item) {
            self.stack.push(item);
        }

        fn pop(&mut self) -> Self::Item {
            self.stack.pop().expect("pop from an empty stack")
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    pub type DepthFirstSearcher<P> = SearchAlgorithm<
        Uninformed<P>,
        Stack<Node<<P as SearchSpace>::State>>,
        ExploredSet<<P as SearchSpace>::State>,
    >;

    /// Build a depth-first search over a search space.
    pub fn depth_first<P>(problem: P, initial: P::State) -> DepthFirstSearcher<P>
    where
        P: SearchSpace,
    {
        SearchAlgorithm::new(Uninformed::new(problem), initial)
    }

    /// Depth-first search, where the order is determined
    /// by the states returned by the `successors` function.
    ///
    /// Stops at the first goal it finds, which need not be
    /// the closest one.
    pub fn dfs<T, G, S, I>(initial: T, goal_test: G, successors: S) -> Option<Solution<T>>
    where
        T: Clone + Eq + Hash,
        G: Fn(&T) -> bool,
        S: Fn(&T) -> I,
        I: IntoIterator<Item = T>,
    {
        depth_first(FnSpace::new(goal_test, successors), initial).solve()
    }
}
