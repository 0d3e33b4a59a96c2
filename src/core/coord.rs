//! Board coordinates and hexagonal adjacency.
//!
//! Coordinates are signed so that out-of-range requests (`row = -1`) can be
//! expressed and rejected by the board rather than by the type system.

use serde::{Deserialize, Serialize};

/// The six hex directions, top-left first, bottom-right last.
///
/// Each entry is `(row_delta, col_delta)`. Row `r` is drawn shifted right by
/// `r` half-cells, which makes these the six touching neighbours.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// A `(row, col)` position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Sentinel for "no move", carried by the search root.
    pub const NONE: Coord = Coord { row: -1, col: -1 };

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this is the `NONE` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == Self::NONE.row && self.col == Self::NONE.col
    }

    /// Offset this coordinate by a `(row_delta, col_delta)` pair.
    ///
    /// `None` if either axis leaves the `i32` range.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: (i32, i32)) -> Option<Self> {
        match (self.row.checked_add(delta.0), self.col.checked_add(delta.1)) {
            (Some(row), Some(col)) => Some(Self::new(row, col)),
            _ => None,
        }
    }

    /// The hex neighbours, in `NEIGHBOR_OFFSETS` order, unbounded.
    ///
    /// Yields fewer than six only at the edge of the `i32` range.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |delta| self.offset(delta))
    }

    /// True if `other` touches this coordinate on the hex grid.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        match (other.row.checked_sub(self.row), other.col.checked_sub(self.col)) {
            (Some(row_delta), Some(col_delta)) => {
                NEIGHBOR_OFFSETS.contains(&(row_delta, col_delta))
            }
            _ => false,
        }
    }

    /// Walk from `self` to `dest` one unit step at a time.
    ///
    /// Consecutive elements differ by exactly one in exactly one axis. The
    /// column moves while its remaining distance is at least the row's. The
    /// path starts at `self` and ends at `dest`.
    ///
    /// ```
    /// use hex_mcts::core::Coord;
    ///
    /// let path = Coord::new(0, 0).path_to(Coord::new(1, 2));
    /// assert_eq!(
    ///     path,
    ///     vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 2)]
    /// );
    /// ```
    #[must_use]
    pub fn path_to(self, dest: Coord) -> Vec<Coord> {
        let mut cursor = self;
        let mut path = vec![cursor];

        while cursor != dest {
            let row_delta = i64::from(dest.row) - i64::from(cursor.row);
            let col_delta = i64::from(dest.col) - i64::from(cursor.col);
            if col_delta.abs() >= row_delta.abs() {
                cursor.col += col_delta.signum() as i32;
            } else {
                cursor.row += row_delta.signum() as i32;
            }
            path.push(cursor);
        }
        path
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel() {
        assert!(Coord::NONE.is_none());
        assert!(!Coord::new(0, 0).is_none());
        assert_eq!(format!("{}", Coord::new(2, 3)), "(2, 3)");
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let center = Coord::new(2, 2);
        for neighbor in center.neighbors() {
            assert!(center.is_adjacent(neighbor));
            assert!(neighbor.is_adjacent(center));
        }
        // The two "long" diagonals are not hex neighbours
        assert!(!center.is_adjacent(Coord::new(1, 1)));
        assert!(!center.is_adjacent(Coord::new(3, 3)));
        assert!(!center.is_adjacent(center));
    }

    #[test]
    fn test_path_to_self() {
        let c = Coord::new(4, 1);
        assert_eq!(c.path_to(c), vec![c]);
    }

    #[test]
    fn test_path_steps_are_unit() {
        let path = Coord::new(5, 0).path_to(Coord::new(0, 3));
        assert_eq!(path.first(), Some(&Coord::new(5, 0)));
        assert_eq!(path.last(), Some(&Coord::new(0, 3)));
        assert_eq!(path.len(), 9);

        for pair in path.windows(2) {
            let dr = (pair[1].row - pair[0].row).abs();
            let dc = (pair[1].col - pair[0].col).abs();
            assert_eq!(dr + dc, 1);
        }
    }

    #[test]
    fn test_extreme_coords_do_not_overflow() {
        let top = Coord::new(i32::MAX, i32::MAX);
        let bottom = Coord::new(i32::MIN, i32::MIN);

        assert_eq!(top.offset((1, 0)), None);
        assert_eq!(bottom.offset((0, -1)), None);
        assert_eq!(top.offset((-1, 0)), Some(Coord::new(i32::MAX - 1, i32::MAX)));

        assert_eq!(top.neighbors().count(), 2);
        assert_eq!(bottom.neighbors().count(), 2);
        assert!(!top.is_adjacent(bottom));
        assert!(!bottom.is_adjacent(top));
        assert!(Coord::new(i32::MIN, 0).is_adjacent(Coord::new(i32::MIN, 1)));

        let path = Coord::new(i32::MAX, i32::MIN).path_to(Coord::new(i32::MAX - 2, i32::MIN + 1));
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&Coord::new(i32::MAX - 2, i32::MIN + 1)));
    }

    #[test]
    fn test_path_prefers_column_on_tie() {
        let path = Coord::new(0, 0).path_to(Coord::new(1, 1));
        assert_eq!(path[1], Coord::new(0, 1));
    }
}
