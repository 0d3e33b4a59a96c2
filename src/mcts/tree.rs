//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The whole tree
//! is rebuilt for every search and dropped as one allocation.

use serde::{Deserialize, Serialize};

use super::node::{Children, NodeId, SearchNode};
use crate::core::Coord;

/// Arena-based search tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree {
    /// All nodes in the tree.
    nodes: Vec<SearchNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,
}

impl Default for SearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTree {
    /// Create a new tree with a root node.
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::root());
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Give `parent` one child per move, in the order given.
    ///
    /// Returns the first child, or `None` when `moves` is empty. The parent
    /// is marked expanded either way. Expanding an expanded node is a no-op
    /// that returns `None`.
    pub fn expand(&mut self, parent: NodeId, moves: &[Coord]) -> Option<NodeId> {
        if self.get(parent).is_expanded() {
            return None;
        }

        let depth = self.get(parent).depth + 1;
        let ids: Vec<NodeId> = moves
            .iter()
            .map(|&mv| self.alloc(SearchNode::new(parent, mv, depth)))
            .collect();
        let first = ids.first().copied();
        self.get_mut(parent).children = Children::Expanded(ids);
        first
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(SearchNode::root());
        self.root = NodeId::new(0);
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            expanded_count: self.nodes.iter().filter(|n| n.is_expanded()).count(),
        }
    }
}

/// Statistics about the search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of nodes with generated children.
    pub expanded_count: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            // Every node but the root is somebody's child
            (self.node_count - 1) as f64 / self.expanded_count as f64
        }
    }
}
