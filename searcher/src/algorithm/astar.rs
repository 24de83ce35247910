use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::hash::Hash;

use ordered_float::OrderedFloat;

use super::cache::CostMap;
use super::{Frontier, SearchAlgorithm, Solution};
use crate::node::{Cost, Node};
use crate::problem::{FnHeuristic, FnSpace};
use crate::traits::{SearchHeuristic, SearchSpace};

/// Items which can be ranked in a [PriorityQueue].
pub trait Prioritized {
    /// Lower priorities are popped first.
    fn priority(&self) -> Cost;
}

impl<T> Prioritized for Node<T> {
    fn priority(&self) -> Cost {
        self.total()
    }
}

#[derive(Debug)]
struct Ranked<I> {
    priority: OrderedFloat<Cost>,
    order: u64,
    item: I,
}

impl<I> PartialEq for Ranked<I> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.order.eq(&other.order)
    }
}

impl<I> Eq for Ranked<I> {}

impl<I> Ord for Ranked<I> {
    // BinaryHeap is a max-heap: the lowest priority, then the
    // earliest pushed, compares as the greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.order.cmp(&other.order))
            .reverse()
    }
}

impl<I> PartialOrd for Ranked<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A frontier which always pops the item with the lowest priority.
///
/// Items of equal priority are popped in the order they were pushed.
#[derive(Debug)]
pub struct PriorityQueue<I> {
    queue: BinaryHeap<Ranked<I>>,
    counter: u64,
}

impl<I> Default for PriorityQueue<I> {
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            counter: 0,
        }
    }
}

impl<I> Frontier for PriorityQueue<I>
where
    I: Prioritized,
{
    type Item = I;

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn push(&mut self, item: Self::Item) {
        let order = self.counter;
        self.counter += 1;
        self.queue.push(Ranked {
            priority: OrderedFloat(item.priority()),
            order,
            item,
        });
    }

    fn pop(&mut self) -> Self::Item {
        self.queue
            .pop()
            .map(|r| r.item)
            .expect("pop from an empty priority queue")
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<P> = SearchAlgorithm<
    P,
    PriorityQueue<Node<<P as SearchSpace>::State>>,
    CostMap<<P as SearchSpace>::State>,
>;

/// Build an A* search over a search space with a heuristic.
pub fn astar_search<P>(problem: P, initial: P::State) -> AStarSearcher<P>
where
    P: SearchHeuristic,
{
    SearchAlgorithm::new(problem, initial)
}

/// A* search with a uniform cost of one per step.
///
/// The path to the returned node is the cheapest path to a goal
/// as long as the heuristic never overestimates the remaining cost.
pub fn astar<T, G, S, I, H>(
    initial: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    H: Fn(&T) -> Cost,
{
    astar_with_cost(initial, goal_test, successors, heuristic, |_: &T, _: &T| 1.0)
}

/// A* search where each step costs `edge_cost(from, to)`.
///
/// Negative edge costs void the guarantee that the cheapest
/// path is returned.
pub fn astar_with_cost<T, G, S, I, H, E>(
    initial: T,
    goal_test: G,
    successors: S,
    heuristic: H,
    edge_cost: E,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    H: Fn(&T) -> Cost,
    E: Fn(&T, &T) -> Cost,
{
    let space = FnHeuristic::new(FnSpace::new(goal_test, successors), heuristic, edge_cost);
    astar_search(space, initial).solve()
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::algorithm::basic::bfs;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Item(f64, char);

    impl Prioritized for Item {
        fn priority(&self) -> Cost {
            self.0
        }
    }

    #[test]
    fn priority_order() {
        let mut queue = PriorityQueue::default();

        queue.push(Item(3.0, 'c'));
        queue.push(Item(1.0, 'a'));
        queue.push(Item(2.0, 'b'));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop().1, 'a');
        queue.push(Item(0.5, 'z'));
        assert_eq!(queue.pop().1, 'z');
        assert_eq!(queue.pop().1, 'b');
        assert_eq!(queue.pop().1, 'c');
        assert!(queue.is_empty());
    }

    #[test]
    fn priority_ties_in_insertion_order() {
        let mut queue = PriorityQueue::default();

        for c in "tiebreak".chars() {
            queue.push(Item(1.0, c));
        }
        let popped: String = (0..8).map(|_| queue.pop().1).collect();
        assert_eq!(popped, "tiebreak");
    }

    #[test]
    fn nodes_by_total_cost() {
        let mut queue = PriorityQueue::default();

        queue.push(Node::new('a', None, 4.0, 0.0));
        queue.push(Node::new('b', None, 1.0, 2.0));
        queue.push(Node::new('c', None, 0.0, 3.5));
        assert_eq!(queue.pop().state(), &'b');
        assert_eq!(queue.pop().state(), &'c');
        assert_eq!(queue.pop().state(), &'a');
    }

    #[test]
    #[should_panic(expected = "pop from an empty priority queue")]
    fn empty_priority_queue() {
        let mut queue: PriorityQueue<Item> = PriorityQueue::default();
        queue.pop();
    }

    fn weighted() -> HashMap<char, Vec<(char, f64)>> {
        let mut g = HashMap::new();
        g.insert('s', vec![('a', 1.0), ('b', 4.0)]);
        g.insert('a', vec![('b', 1.0)]);
        g.insert('b', vec![('g', 5.0)]);
        g.insert('g', vec![]);
        g
    }

    #[test]
    fn relaxation() {
        let g = weighted();
        let solution = astar_with_cost(
            's',
            |s| *s == 'g',
            |s| g[s].iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            |_| 0.0,
            |from, to| {
                g[from]
                    .iter()
                    .find(|(n, _)| n == to)
                    .map(|(_, c)| *c)
                    .unwrap()
            },
        )
        .unwrap();

        assert_eq!(solution.path(), vec!['s', 'a', 'b', 'g']);
        assert_eq!(solution.cost(), 7.0);

        // 'b' was first pushed at cost 4, then again at cost 2.
        // The stale copy is popped before 'g' and dropped.
        let stats = solution.stats();
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.expanded, 3);
        assert_eq!(stats.pushed, 5);
    }

    #[test]
    fn heuristic_guides_expansion() {
        // A long line with the goal far to the right.
        let successors = |n: &i32| vec![n - 1, n + 1];
        let goal = |n: &i32| *n == 20;

        let informed = astar(0, goal, successors, |n| f64::from((20 - n).abs())).unwrap();
        assert_eq!(informed.len(), 20);
        assert_eq!(informed.stats().expanded, 20);
    }

    #[test]
    fn zero_heuristic_matches_bfs() {
        let successors = |&(x, y): &(i32, i32)| {
            vec![(x + 1, y), (x, y + 1), (x - 1, y), (x, y - 1)]
                .into_iter()
                .filter(|(x, y)| (0..5).contains(x) && (0..5).contains(y))
                .collect::<Vec<_>>()
        };
        let goal = |p: &(i32, i32)| *p == (4, 3);

        let breadth = bfs((0, 0), goal, successors).unwrap();
        let uniform = astar((0, 0), goal, successors, |_| 0.0).unwrap();

        assert_eq!(breadth.len(), 7);
        assert_eq!(uniform.len(), breadth.len());
        assert_eq!(uniform.cost(), 7.0);
    }

    #[test]
    fn start_is_goal() {
        let never = |_: &u8| -> Vec<u8> { panic!("expanded the initial state") };
        let solution = astar(5u8, |n| *n == 5, never, |_| 0.0).unwrap();

        assert_eq!(solution.path(), vec![5]);
        assert_eq!(solution.cost(), 0.0);
        assert!(solution.is_empty());
    }

    #[test]
    fn unreachable() {
        let successors = |n: &u32| if *n < 10 { vec![n + 1] } else { vec![] };
        let result = astar(0u32, |n| *n == 100, successors, |_| 1.0);
        assert!(result.is_none());
    }
}
