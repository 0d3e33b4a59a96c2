//! Player identification for the two sides of a Hex game.
//!
//! ## PlayerId
//!
//! `PlayerId::One` connects the top and bottom edges, `PlayerId::Two`
//! connects the left and right edges. `PlayerId::One` always moves first.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Connects the top edge to the bottom edge. Moves first.
    One,
    /// Connects the left edge to the right edge.
    Two,
}

impl PlayerId {
    /// The player that opens every game.
    pub const FIRST: PlayerId = PlayerId::One;

    /// The opposing player.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Iterate over both players in turn order.
    ///
    /// ```
    /// use hex_mcts::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::One, PlayerId::Two]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::One, PlayerId::Two].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player One"),
            PlayerId::Two => write!(f, "Player Two"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for player in PlayerId::all() {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_index_and_display() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(format!("{}", PlayerId::Two), "Player Two");
    }

    #[test]
    fn test_first_player() {
        assert_eq!(PlayerId::FIRST, PlayerId::One);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerId::Two).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::Two);
    }
}
