//! Indexed set of unclaimed coordinates.
//!
//! Insert, remove and uniform random choice are all O(1). Every playable
//! coordinate lives in one permutation vector; the first `len` entries are
//! the members and the tail holds removed cells, most recent first. Removing
//! a member and inserting it straight back restores the exact order, so a
//! play/undo pair leaves random draws unchanged.

use crate::core::{Coord, GameRng};

#[derive(Clone, Debug)]
pub struct FreeCells {
    width: usize,
    /// Permutation of every playable coordinate.
    order: Vec<Coord>,
    /// Index of each slot's coordinate in `order`.
    positions: Vec<usize>,
    /// Index each slot held in `order` when it was last removed.
    origins: Vec<usize>,
    len: usize,
}

impl FreeCells {
    /// A set containing every coordinate of a `width x height` area.
    pub fn full(width: usize, height: usize) -> Self {
        let count = width * height;
        let order = (0..height as i32)
            .flat_map(|row| (0..width as i32).map(move |col| Coord::new(row, col)))
            .collect();
        Self {
            width,
            order,
            positions: (0..count).collect(),
            origins: (0..count).collect(),
            len: count,
        }
    }

    #[inline]
    fn slot(&self, coord: Coord) -> usize {
        coord.row as usize * self.width + coord.col as usize
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.order.swap(a, b);
        let slot_a = self.slot(self.order[a]);
        let slot_b = self.slot(self.order[b]);
        self.positions[slot_a] = a;
        self.positions[slot_b] = b;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.positions[self.slot(coord)] < self.len
    }

    /// Returns false if `coord` was already present.
    ///
    /// Inserting the most recently removed coordinate puts it back where it
    /// was.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let slot = self.slot(coord);
        let pos = self.positions[slot];
        if pos < self.len {
            return false;
        }
        let at = self.len;
        self.swap(pos, at);
        self.len += 1;
        let origin = self.origins[slot];
        if origin < at {
            self.swap(origin, at);
        }
        true
    }

    /// Returns false if `coord` was not present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        let slot = self.slot(coord);
        let pos = self.positions[slot];
        if pos >= self.len {
            return false;
        }
        self.origins[slot] = pos;
        self.len -= 1;
        self.swap(pos, self.len);
        true
    }

    /// Uniform random member, `None` when empty.
    pub fn choose(&self, rng: &mut GameRng) -> Option<Coord> {
        rng.choose(&self.order[..self.len]).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.order[..self.len].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full() {
        let set = FreeCells::full(3, 2);
        assert_eq!(set.len(), 6);
        assert!(set.contains(Coord::new(1, 2)));
    }

    #[test]
    fn test_remove_then_insert() {
        let mut set = FreeCells::full(3, 3);

        assert!(set.remove(Coord::new(0, 0)));
        assert!(!set.remove(Coord::new(0, 0)));
        assert!(!set.contains(Coord::new(0, 0)));
        assert_eq!(set.len(), 8);

        // The member swapped into the hole must stay addressable
        assert!(set.contains(Coord::new(2, 2)));
        assert!(set.remove(Coord::new(2, 2)));

        assert!(set.insert(Coord::new(0, 0)));
        assert!(!set.insert(Coord::new(0, 0)));
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn test_lifo_insert_restores_order() {
        let mut set = FreeCells::full(3, 3);
        let before: Vec<_> = set.iter().collect();

        let moves = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 0), Coord::new(0, 2)];
        for &mv in &moves {
            assert!(set.remove(mv));
        }
        assert_eq!(set.len(), 5);
        for &mv in moves.iter().rev() {
            assert!(set.insert(mv));
        }

        assert_eq!(set.iter().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_out_of_order_insert_keeps_set() {
        let mut set = FreeCells::full(3, 3);
        set.remove(Coord::new(0, 0));
        set.remove(Coord::new(1, 1));
        set.remove(Coord::new(2, 2));

        assert!(set.insert(Coord::new(0, 0)));
        assert!(set.contains(Coord::new(0, 0)));
        assert!(!set.contains(Coord::new(1, 1)));
        assert!(!set.contains(Coord::new(2, 2)));

        let mut members: Vec<_> = set.iter().collect();
        members.sort();
        let mut expected: Vec<_> = (0..3)
            .flat_map(|r| (0..3).map(move |c| Coord::new(r, c)))
            .filter(|&c| c != Coord::new(1, 1) && c != Coord::new(2, 2))
            .collect();
        expected.sort();
        assert_eq!(members, expected);
    }

    #[test]
    fn test_choose_only_members() {
        let mut set = FreeCells::full(2, 2);
        set.remove(Coord::new(0, 0));
        set.remove(Coord::new(1, 1));

        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            let c = set.choose(&mut rng).unwrap();
            assert!(c == Coord::new(0, 1) || c == Coord::new(1, 0));
        }
    }

    #[test]
    fn test_choose_empty() {
        let mut set = FreeCells::full(1, 1);
        set.remove(Coord::new(0, 0));
        assert!(set.is_empty());
        assert_eq!(set.choose(&mut GameRng::new(1)), None);
    }
}
