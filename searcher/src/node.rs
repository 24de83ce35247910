//! Search nodes and the arena which holds expanded nodes.
//!
//! Nodes refer to their parent by [NodeId], a handle into
//! the [Tree] owned by a single search. A node's parent is
//! always inserted into the tree before the node itself, so
//! every ancestor chain strictly decreases and ends at a root.

use std::cmp::{Ordering, PartialEq, PartialOrd};
use std::iter::FusedIterator;
use std::ops::Index;

/// Data type used for path costs and heuristic estimates.
pub type Cost = f64;

/// Handle to a node stored in a [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of this node in its tree.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A state along with the context in which it was discovered.
///
/// Nodes compare by their estimated total cost, `cost + heuristic`,
/// which is the order the A* frontier pops them in.
#[derive(Debug, Clone)]
pub struct Node<T> {
    state: T,
    parent: Option<NodeId>,
    cost: Cost,
    heuristic: Cost,
}

impl<T> Node<T> {
    /// Build a new node discovered from `parent`.
    pub fn new(state: T, parent: Option<NodeId>, cost: Cost, heuristic: Cost) -> Self {
        Self {
            state,
            parent,
            cost,
            heuristic,
        }
    }

    /// A node with no parent and no accumulated cost.
    pub fn root(state: T) -> Self {
        Self::new(state, None, 0.0, 0.0)
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Cost accumulated from the root to this node.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Estimated remaining cost from this node to a goal.
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    /// Estimated cost of the cheapest path through this node.
    pub fn total(&self) -> Cost {
        self.cost + self.heuristic
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn into_state(self) -> T {
        self.state
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.total().eq(&other.total())
    }
}

impl<T> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.total().partial_cmp(&other.total())
    }
}

/// Arena of expanded nodes for a single search.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree { nodes: Vec::new() }
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Add a node to the tree, returning its handle.
    ///
    /// Panics if the node's parent is not already in the tree.
    pub fn insert(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            assert!(
                parent < id,
                "parent {:?} of node {:?} is not in the tree",
                parent,
                id
            );
        }
        self.nodes.push(node);
        id
    }

    /// Iterate from this node back to its root, including both.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            current: Some(id),
        }
    }

    /// Number of steps between this node and its root.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }
}

impl<T> Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Iterator over a node and its ancestors, see [Tree::ancestors].
#[derive(Debug)]
pub struct Ancestors<'t, T> {
    tree: &'t Tree<T>,
    current: Option<NodeId>,
}

impl<'t, T> Iterator for Ancestors<'t, T> {
    type Item = &'t Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = &self.tree[id];
        if let Some(parent) = node.parent {
            assert!(
                parent < id,
                "malformed ancestor chain: {:?} has parent {:?}",
                id,
                parent
            );
        }
        self.current = node.parent;
        Some(node)
    }
}

impl<'t, T> FusedIterator for Ancestors<'t, T> {}

/// Reconstruct the path from the root of the tree to this node.
///
/// The first state is the initial state of the search,
/// the last is the state held by `node`.
pub fn node_to_path<T>(tree: &Tree<T>, node: NodeId) -> Vec<T>
where
    T: Clone,
{
    let mut path: Vec<T> = tree.ancestors(node).map(|n| n.state.clone()).collect();
    path.reverse();
    path
}
