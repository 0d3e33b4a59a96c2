//! Search tree nodes.
//!
//! Nodes live in the `SearchTree` arena and refer to each other by `NodeId`.
//! A parent owns its children through the arena; the `parent` link is a
//! plain index back up the tree.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Expansion state of a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Children {
    /// Leaf of the search tree; no children generated yet.
    Unexpanded,
    /// One child per move that was legal when the node was expanded.
    Expanded(Vec<NodeId>),
}

/// A node in the search tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchNode {
    /// The move that led here (`Coord::NONE` for the root).
    pub mv: Coord,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    pub children: Children,

    /// Depth in tree (root = 0).
    pub depth: u16,

    pub visits: u32,

    /// Visits whose playout was won by the searching player.
    pub wins: u32,
}

impl SearchNode {
    /// Create a new unexpanded node.
    pub fn new(parent: NodeId, mv: Coord, depth: u16) -> Self {
        Self {
            mv,
            parent,
            children: Children::Unexpanded,
            depth,
            visits: 0,
            wins: 0,
        }
    }

    /// Create a root node.
    pub fn root() -> Self {
        Self::new(NodeId::NONE, Coord::NONE, 0)
    }

    /// Parent link, `None` for the root.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        (!self.parent.is_none()).then_some(self.parent)
    }

    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(self.children, Children::Expanded(_))
    }

    /// Child ids; empty while unexpanded.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        match &self.children {
            Children::Unexpanded => &[],
            Children::Expanded(ids) => ids,
        }
    }

    /// Fraction of visits won, 0 when unvisited.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }

    /// Count one playout through this node.
    #[inline]
    pub fn record(&mut self, won: bool) {
        self.visits += 1;
        self.wins += u32::from(won);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(5);
        assert_eq!(id.raw(), 5);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = SearchNode::root();

        assert!(node.mv.is_none());
        assert_eq!(node.parent(), None);
        assert_eq!(node.depth, 0);
        assert!(!node.is_expanded());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_expanded_state_is_explicit() {
        let mut node = SearchNode::root();
        node.children = Children::Expanded(Vec::new());

        // Expanded with nothing is still distinguishable from unexpanded
        assert!(node.is_expanded());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_record() {
        let mut node = SearchNode::new(NodeId::new(0), Coord::new(1, 2), 1);
        assert_eq!(node.win_rate(), 0.0);
        assert_eq!(node.parent(), Some(NodeId::new(0)));

        node.record(true);
        node.record(false);
        node.record(true);
        node.record(true);

        assert_eq!(node.visits, 4);
        assert_eq!(node.wins, 3);
        assert_eq!(node.win_rate(), 0.75);
    }

    #[test]
    fn test_serialization() {
        let mut node = SearchNode::root();
        node.children = Children::Expanded(vec![NodeId::new(1), NodeId::new(2)]);
        node.visits = 100;

        let json = serde_json::to_string(&node).unwrap();
        let deserialized: SearchNode = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.visits, 100);
        assert_eq!(deserialized.children(), &[NodeId::new(1), NodeId::new(2)]);
    }
}
