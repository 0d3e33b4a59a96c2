//! Scoped play/undo guard.
//!
//! The search plays hypothetical lines on the caller's board and must leave
//! it exactly as it found it. `Rewind` counts every move it plays and undoes
//! whatever is still outstanding when dropped, so an early return or an
//! error in the middle of an iteration cannot leak moves.

use std::ops::Deref;

use tracing::error;

use crate::board::Board;
use crate::core::{Coord, HexError, Result};

/// Borrow of a board that undoes its own moves on drop.
///
/// Dereferences to `&Board` for queries. Mutation is only possible through
/// `play` and `undo`, which keep the ply count in step with the board's
/// history.
#[derive(Debug)]
pub struct Rewind<'a> {
    board: &'a mut Board,
    plies: usize,
}

impl<'a> Rewind<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self { board, plies: 0 }
    }

    /// Play `coord`; counted only if the board accepts it.
    pub fn play(&mut self, coord: Coord) -> bool {
        let played = self.board.play(coord);
        if played {
            self.plies += 1;
        }
        played
    }

    /// Undo one move played through this guard.
    ///
    /// Refuses with `UndoUnderflow` rather than reach into moves that
    /// predate the guard.
    pub fn undo(&mut self) -> Result<Coord> {
        if self.plies == 0 {
            return Err(HexError::UndoUnderflow);
        }
        let coord = self.board.undo()?;
        self.plies -= 1;
        Ok(coord)
    }

    /// Undo everything played through this guard.
    pub fn rewind(&mut self) -> Result<()> {
        while self.plies > 0 {
            self.undo()?;
        }
        Ok(())
    }

    /// Moves played through this guard and not yet undone.
    #[inline]
    #[must_use]
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// A guard for a sub-line, rewound independently of this one.
    pub fn nested(&mut self) -> Rewind<'_> {
        Rewind::new(&mut *self.board)
    }
}

impl Deref for Rewind<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Rewind<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.rewind() {
            error!(plies = self.plies, %err, "failed to rewind board");
        }
    }
}
