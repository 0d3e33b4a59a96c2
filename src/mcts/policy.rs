//! UCT scoring and child selection.
//!
//! Formula: w/n + c * sqrt(ln(N) / n), where N is the parent's visit count.
//! Unvisited children score infinity so every child is tried once before
//! any is exploited.

use super::node::{NodeId, SearchNode};
use super::tree::SearchTree;

/// UCT score of a child whose parent has `parent_visits` visits.
#[must_use]
pub fn uct_score(node: &SearchNode, parent_visits: u32, exploration: f64) -> f64 {
    if node.visits == 0 {
        return f64::INFINITY;
    }
    let visits = node.visits as f64;
    node.win_rate() + exploration * ((parent_visits as f64).ln() / visits).sqrt()
}

/// Child of `parent` with the highest UCT score.
///
/// Ties go to the earliest child, so unvisited siblings are tried in
/// `possible_moves` order. Returns `None` for unexpanded nodes.
#[must_use]
pub fn best_child(tree: &SearchTree, parent: NodeId, exploration: f64) -> Option<NodeId> {
    let node = tree.get(parent);
    first_max_by(node.children(), |id| uct_score(tree.get(id), node.visits, exploration))
}

/// Child of `parent` with the most visits, earliest on ties.
#[must_use]
pub fn most_visited_child(tree: &SearchTree, parent: NodeId) -> Option<NodeId> {
    first_max_by(tree.get(parent).children(), |id| tree.get(id).visits as f64)
}

/// First element with a strictly greater score than everything before it.
fn first_max_by(ids: &[NodeId], score: impl Fn(NodeId) -> f64) -> Option<NodeId> {
    let (&first, rest) = ids.split_first()?;
    let mut best = (first, score(first));
    for &id in rest {
        let s = score(id);
        if s > best.1 {
            best = (id, s);
        }
    }
    Some(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    fn make_tree() -> (SearchTree, Vec<NodeId>) {
        let mut tree = SearchTree::new();
        let root = tree.root();
        tree.expand(root, &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        let ids = tree.root_node().children().to_vec();

        // Child 0: high reward, many visits
        tree.get_mut(ids[0]).visits = 100;
        tree.get_mut(ids[0]).wins = 80;

        // Child 1: lower reward, fewer visits
        tree.get_mut(ids[1]).visits = 10;
        tree.get_mut(ids[1]).wins = 7;

        // Child 2: unvisited
        tree.get_mut(root).visits = 110;
        (tree, ids)
    }

    #[test]
    fn test_unvisited_scores_infinite() {
        let node = SearchNode::root();
        assert_eq!(uct_score(&node, 10, 2.0), f64::INFINITY);
    }

    #[test]
    fn test_score_formula() {
        let mut node = SearchNode::root();
        node.visits = 4;
        node.wins = 1;

        let expected = 0.25 + 2.0 * ((16f64).ln() / 4.0).sqrt();
        assert!((uct_score(&node, 16, 2.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unvisited_siblings_tried_in_order() {
        let mut tree = SearchTree::new();
        let root = tree.root();
        tree.expand(root, &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        let ids = tree.root_node().children().to_vec();

        assert_eq!(best_child(&tree, root, 2.0), Some(ids[0]));
        tree.get_mut(ids[0]).visits = 1;
        tree.get_mut(root).visits = 1;
        assert_eq!(best_child(&tree, root, 2.0), Some(ids[1]));
    }

    #[test]
    fn test_selects_unvisited_first() {
        let (tree, ids) = make_tree();
        assert_eq!(best_child(&tree, tree.root(), 2.0), Some(ids[2]));
    }

    #[test]
    fn test_exploration_favours_rarely_visited() {
        let (mut tree, ids) = make_tree();
        tree.get_mut(ids[2]).visits = 5;
        tree.get_mut(ids[2]).wins = 2;
        tree.get_mut(tree.root()).visits = 115;

        // 0.4 + 2*sqrt(ln 115 / 5) beats 0.8 + 2*sqrt(ln 115 / 100)
        assert_eq!(best_child(&tree, tree.root(), 2.0), Some(ids[2]));
        // Without exploration the best win rate wins
        assert_eq!(best_child(&tree, tree.root(), 0.0), Some(ids[0]));
    }

    #[test]
    fn test_ties_go_to_first_child() {
        let mut tree = SearchTree::new();
        let root = tree.root();
        tree.expand(root, &[Coord::new(0, 0), Coord::new(0, 1)]);
        let ids = tree.root_node().children().to_vec();

        assert_eq!(best_child(&tree, root, 2.0), Some(ids[0]));
        assert_eq!(most_visited_child(&tree, root), Some(ids[0]));

        tree.get_mut(ids[0]).visits = 3;
        tree.get_mut(ids[1]).visits = 3;
        assert_eq!(most_visited_child(&tree, root), Some(ids[0]));

        tree.get_mut(ids[1]).visits = 4;
        assert_eq!(most_visited_child(&tree, root), Some(ids[1]));
    }

    #[test]
    fn test_most_visited_ignores_win_rate() {
        let (tree, ids) = make_tree();
        assert_eq!(most_visited_child(&tree, tree.root()), Some(ids[0]));
    }

    #[test]
    fn test_unexpanded_has_no_child() {
        let tree = SearchTree::new();
        assert_eq!(best_child(&tree, tree.root(), 2.0), None);
        assert_eq!(most_visited_child(&tree, tree.root()), None);
    }
}
