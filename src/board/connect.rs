//! Incremental win detection.
//!
//! A move wins when the chain of same-owner cells containing it touches both
//! of its player's border sides. The search starts at the cell just played,
//! so only the chain that move belongs to is ever explored.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::cell::{Cell, CellIndex};
use crate::core::PlayerId;

const BOTH_BORDERS: u8 = 0b11;

/// True if the `player` chain through `start` spans both border sides.
///
/// Breadth-first over same-owner neighbours. Sentinels record their border
/// side and are never expanded. Stops as soon as both sides are touched.
pub(crate) fn chain_connects(cells: &[Cell], start: CellIndex, player: PlayerId) -> bool {
    // No friendly neighbour: this move cannot have joined anything
    if !cells[start]
        .neighbors()
        .iter()
        .any(|&n| cells[n].owner() == Some(player))
    {
        return false;
    }

    let mut touched = 0u8;
    let mut visited: FxHashSet<CellIndex> = FxHashSet::default();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while touched != BOTH_BORDERS {
        let Some(current) = queue.pop_front() else {
            break;
        };
        let cell = &cells[current];

        if let Some(border) = cell.border() {
            touched |= border.mask();
            continue;
        }

        for &neighbor in cell.neighbors() {
            if cells[neighbor].owner() == Some(player) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    touched == BOTH_BORDERS
}
