//! A single hexagonal cell.
//!
//! Cells never own each other. Neighbours are stored as indices into the
//! `Board`'s flat cell storage, so the cyclic adjacency graph has exactly one
//! owner.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, HexError, PlayerId, Result};

/// Identifies one side of an opposing border pair.
///
/// Each player owns two border sides, `BorderId(0)` and `BorderId(1)`. A
/// chain wins when it touches both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorderId(pub u8);

impl BorderId {
    pub const NEAR: BorderId = BorderId(0);
    pub const FAR: BorderId = BorderId(1);

    /// Bit used in a touched-borders mask.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        1 << self.0
    }
}

/// Index into the board's cell storage.
pub type CellIndex = usize;

/// One board position: owner, optional border tag and adjacency.
#[derive(Clone, Debug)]
pub struct Cell {
    owner: Option<PlayerId>,
    border: Option<BorderId>,
    neighbors: SmallVec<[CellIndex; 6]>,
}

impl Cell {
    /// An unclaimed interior cell.
    pub(crate) fn interior() -> Self {
        Self {
            owner: None,
            border: None,
            neighbors: SmallVec::new(),
        }
    }

    /// A border sentinel, claimed for its player from construction on.
    pub(crate) fn sentinel(owner: PlayerId, border: BorderId) -> Self {
        Self {
            owner: Some(owner),
            border: Some(border),
            neighbors: SmallVec::new(),
        }
    }

    /// The owning player, if any.
    #[inline]
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Border tag; `None` for playable cells.
    #[inline]
    #[must_use]
    pub fn border(&self) -> Option<BorderId> {
        self.border
    }

    /// True for the fixed sentinels around the playable area.
    #[inline]
    #[must_use]
    pub fn is_border(&self) -> bool {
        self.border.is_some()
    }

    /// Indices of adjacent cells, sentinels included.
    #[inline]
    #[must_use]
    pub fn neighbors(&self) -> &[CellIndex] {
        &self.neighbors
    }

    pub(crate) fn link(&mut self, neighbor: CellIndex) {
        self.neighbors.push(neighbor);
    }

    /// Set or clear the owner.
    ///
    /// Ownership only toggles between unset and set: replacing one owner with
    /// another is rejected with `CellAlreadyOwned` and leaves the cell as is.
    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>, coord: Coord) -> Result<()> {
        if self.owner.is_some() && owner.is_some() {
            return Err(HexError::CellAlreadyOwned { coord });
        }
        self.owner = owner;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_starts_free() {
        let cell = Cell::interior();
        assert!(cell.owner().is_none());
        assert!(!cell.is_border());
        assert!(cell.neighbors().is_empty());
    }

    #[test]
    fn test_owner_toggles_through_none() {
        let coord = Coord::new(0, 0);
        let mut cell = Cell::interior();

        cell.set_owner(Some(PlayerId::One), coord).unwrap();
        assert_eq!(cell.owner(), Some(PlayerId::One));

        cell.set_owner(None, coord).unwrap();
        cell.set_owner(Some(PlayerId::Two), coord).unwrap();
        assert_eq!(cell.owner(), Some(PlayerId::Two));
    }

    #[test]
    fn test_double_ownership_rejected() {
        let coord = Coord::new(1, 1);
        let mut cell = Cell::interior();
        cell.set_owner(Some(PlayerId::One), coord).unwrap();

        let err = cell.set_owner(Some(PlayerId::Two), coord).unwrap_err();
        assert_eq!(err, HexError::CellAlreadyOwned { coord });
        assert_eq!(cell.owner(), Some(PlayerId::One));
    }

    #[test]
    fn test_sentinel() {
        let cell = Cell::sentinel(PlayerId::Two, BorderId::FAR);
        assert!(cell.is_border());
        assert_eq!(cell.border(), Some(BorderId::FAR));
        assert_eq!(cell.owner(), Some(PlayerId::Two));
        assert_eq!(BorderId::NEAR.mask() | BorderId::FAR.mask(), 0b11);
    }
}
