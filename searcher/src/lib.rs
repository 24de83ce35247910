//! Generalized search algorithms, especially useful for graph traversal.
//!
//! The simplest way to search is to call [dfs], [bfs] or [astar] with
//! an initial state, a goal test and a successor function:
//!
//! ```
//! let solution = searcher::bfs(1u32, |n| *n == 12, |n| vec![n + 1, n * 2]).unwrap();
//! assert_eq!(solution.path(), vec![1, 2, 3, 6, 12]);
//! ```
//!
//! For reusable problems, implement [SearchSpace] (and [SearchHeuristic]
//! for A*) and drive a [SearchAlgorithm] directly, which also allows
//! limiting the search with [SearchOptions] or stepping it by hand.

#![deny(clippy::all)]

pub mod algorithm;
mod errors;
pub mod node;
pub mod problem;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::SearchHeuristic;
pub use traits::SearchSpace;

pub use node::{node_to_path, Cost, Node, NodeId, Tree};

pub use algorithm::astar::{astar, astar_search, astar_with_cost, AStarSearcher};
pub use algorithm::astar::{PriorityQueue, Prioritized};
pub use algorithm::basic::{bfs, breadth_first, BreadthFirstSearcher, Queue};
pub use algorithm::basic::{depth_first, dfs, DepthFirstSearcher, Stack};
pub use algorithm::cache::{Cache, CostMap, ExploredSet};
pub use algorithm::{Frontier, SearchAlgorithm, SearchOptions, SearchStats, Solution, Step};
