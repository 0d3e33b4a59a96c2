//! Border sentinel assignment.
//!
//! The playable area is surrounded by a one-cell ring of sentinels. Player
//! One owns the top and bottom rows of the ring, Player Two the left and
//! right columns. Corners are shared by two edges and go to the first edge
//! that matches in the order top, bottom, left, right, so all four ring
//! corners belong to Player One.

use super::cell::BorderId;
use crate::core::PlayerId;

/// One side of the sentinel ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Owner of every sentinel on this edge.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        match self {
            Edge::Top | Edge::Bottom => PlayerId::One,
            Edge::Left | Edge::Right => PlayerId::Two,
        }
    }

    /// Which side of its player's border pair this edge is.
    #[must_use]
    pub const fn border_id(self) -> BorderId {
        match self {
            Edge::Top | Edge::Left => BorderId::NEAR,
            Edge::Bottom | Edge::Right => BorderId::FAR,
        }
    }
}

/// Edge of a ring position in the `(height + 2) x (width + 2)` storage grid.
///
/// Returns `None` for playable positions.
#[must_use]
pub fn edge_at(ring_row: usize, ring_col: usize, width: usize, height: usize) -> Option<Edge> {
    if ring_row == 0 {
        Some(Edge::Top)
    } else if ring_row == height + 1 {
        Some(Edge::Bottom)
    } else if ring_col == 0 {
        Some(Edge::Left)
    } else if ring_col == width + 1 {
        Some(Edge::Right)
    } else {
        None
    }
}
