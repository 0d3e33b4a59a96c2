//! The mutable Hex board with exact undo.
//!
//! ## Layout
//!
//! The playable area is `height x width`. Around it the board allocates a
//! ring of border sentinels (see `border`), so the flat cell storage is
//! `(height + 2) x (width + 2)` and the sentinels are never addressable by a
//! `Coord`.
//!
//! ## Play / Undo
//!
//! `play` and `undo` form a strict stack: every successful `play` pushes its
//! coordinate on the history, and `undo` pops exactly one. Playing a
//! sequence and undoing it the same number of times restores the current
//! player, the game-over flag, every owner and the free-cell set.
//!
//! ```
//! use hex_mcts::board::Board;
//! use hex_mcts::core::{Coord, PlayerId};
//!
//! let mut board = Board::new(3, 3).unwrap();
//! assert!(board.play(Coord::new(1, 1)));
//! assert_eq!(board.current_player(), PlayerId::Two);
//!
//! board.undo().unwrap();
//! assert_eq!(board.current_player(), PlayerId::One);
//! assert_eq!(board.free_cell_count(), 9);
//! ```

use super::border::edge_at;
use super::cell::{Cell, CellIndex};
use super::connect::chain_connects;
use super::free_cells::FreeCells;
use crate::core::{Coord, GameRng, HexError, PlayerId, Result, NEIGHBOR_OFFSETS};

/// Hex board: cells, turn, game-over flag, free cells and move history.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,

    /// Flat `(height + 2) x (width + 2)` storage, sentinel ring included.
    cells: Vec<Cell>,

    /// Player to move, or the winner once `is_over` is set.
    current_player: PlayerId,

    is_over: bool,

    free: FreeCells,

    /// Coordinates played and not yet undone, oldest first.
    history: Vec<Coord>,
}

impl Board {
    /// Create an empty board. Player One moves first.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as usize - 2 || height > i32::MAX as usize - 2 {
            return Err(HexError::InvalidDimensions { width, height });
        }

        let stride = width + 2;
        let mut cells = Vec::with_capacity(stride * (height + 2));
        for ring_row in 0..height + 2 {
            for ring_col in 0..stride {
                let cell = match edge_at(ring_row, ring_col, width, height) {
                    Some(edge) => Cell::sentinel(edge.owner(), edge.border_id()),
                    None => Cell::interior(),
                };
                cells.push(cell);
            }
        }

        // Adjacency is wired once and never changes
        let ring_height = (height + 2) as i32;
        let ring_width = stride as i32;
        for ring_row in 0..ring_height {
            for ring_col in 0..ring_width {
                let index = ring_row as usize * stride + ring_col as usize;
                for (row_delta, col_delta) in NEIGHBOR_OFFSETS {
                    let r = ring_row + row_delta;
                    let c = ring_col + col_delta;
                    if (0..ring_height).contains(&r) && (0..ring_width).contains(&c) {
                        cells[index].link(r as usize * stride + c as usize);
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells,
            current_player: PlayerId::FIRST,
            is_over: false,
            free: FreeCells::full(width, height),
            history: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Player to move; the winner once the game is over.
    #[inline]
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The winning player, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.is_over.then_some(self.current_player)
    }

    /// True if `(row, col)` lies on the playable area.
    #[must_use]
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    #[inline]
    fn cell_index(&self, coord: Coord) -> Option<CellIndex> {
        self.is_in_bounds(coord.row, coord.col)
            .then(|| (coord.row as usize + 1) * (self.width + 2) + coord.col as usize + 1)
    }

    /// The cell at `coord`, `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cell_index(coord).map(|index| &self.cells[index])
    }

    /// Owner of the cell at `coord`; `None` when free or out of bounds.
    #[must_use]
    pub fn owner(&self, coord: Coord) -> Option<PlayerId> {
        self.cell(coord).and_then(Cell::owner)
    }

    /// Playable neighbours of `coord`.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord
            .neighbors()
            .filter(move |c| self.is_in_bounds(c.row, c.col))
    }

    /// Owners of every playable cell in row-major order.
    #[must_use]
    pub fn owners(&self) -> Vec<Option<PlayerId>> {
        self.coords().map(|c| self.owner(c)).collect()
    }

    fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }

    /// Moves played and not undone, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Coord> {
        self.history.last().copied()
    }

    #[must_use]
    pub fn free_cell_count(&self) -> usize {
        self.free.len()
    }

    /// Free coordinates in no particular order.
    pub fn free_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.free.iter()
    }

    /// True if `coord` is on the board and unclaimed.
    #[must_use]
    pub fn is_free(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord.row, coord.col) && self.free.contains(coord)
    }

    /// True once every playable cell is claimed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.coords().filter(|&c| self.owner(c).is_some()).count()
    }

    /// Claim `coord` for the current player.
    ///
    /// Returns false and changes nothing if the coordinate is out of bounds,
    /// already owned, or the game is over. On a winning move `is_over` is set
    /// and the mover stays the current player; otherwise the turn passes.
    pub fn play(&mut self, coord: Coord) -> bool {
        if self.is_over {
            return false;
        }
        let Some(index) = self.cell_index(coord) else {
            return false;
        };

        let player = self.current_player;
        if self.cells[index].set_owner(Some(player), coord).is_err() {
            return false;
        }
        self.history.push(coord);
        let was_free = self.free.remove(coord);
        debug_assert!(was_free, "{coord} owned but missing from free cells");

        if chain_connects(&self.cells, index, player) {
            self.is_over = true;
        } else {
            self.current_player = player.other();
        }
        true
    }

    /// Revert the most recent successful `play`.
    ///
    /// Fails with `UndoUnderflow` and changes nothing when there is nothing
    /// to undo. Returns the coordinate that was freed.
    pub fn undo(&mut self) -> Result<Coord> {
        let coord = *self.history.last().ok_or(HexError::UndoUnderflow)?;
        let index = self.cell_index(coord).ok_or(HexError::OutOfBounds { coord })?;
        self.cells[index].set_owner(None, coord)?;
        self.history.pop();
        let inserted = self.free.insert(coord);
        debug_assert!(inserted, "{coord} freed twice");

        // The winner was also the mover, so only an ongoing game flips turns
        if self.is_over {
            self.is_over = false;
        } else {
            self.current_player = self.current_player.other();
        }
        Ok(coord)
    }

    /// Every free coordinate in row-major order.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Coord> {
        self.coords().filter(|&c| self.owner(c).is_none()).collect()
    }

    /// Uniform random free coordinate, `None` when the board is full.
    pub fn random_possible_move(&self, rng: &mut GameRng) -> Option<Coord> {
        self.free.choose(rng)
    }

    /// Re-run win detection from an owned cell.
    pub fn connects(&self, coord: Coord) -> Result<bool> {
        let index = self.cell_index(coord).ok_or(HexError::OutOfBounds { coord })?;
        let player = self.cells[index].owner().ok_or(HexError::CellUnowned { coord })?;
        Ok(chain_connects(&self.cells, index, player))
    }
}
