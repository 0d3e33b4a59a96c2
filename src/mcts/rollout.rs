//! Uniform random playouts on the live board.

use super::rewind::Rewind;
use crate::core::{GameRng, HexError, PlayerId, Result};

/// Outcome of one playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rollout {
    pub winner: PlayerId,
    /// Random moves played before the game ended.
    pub plies: usize,
}

/// Play uniformly random moves until the game ends, then undo all of them.
///
/// If the game is already over no move is played and the current player is
/// the winner. Running out of free cells before someone connects means the
/// board bookkeeping is broken and yields `NoFreeCells`.
pub fn random_rollout(line: &mut Rewind<'_>, rng: &mut GameRng) -> Result<Rollout> {
    let mut playout = line.nested();

    while !playout.is_over() {
        let mv = playout.random_possible_move(rng).ok_or(HexError::NoFreeCells)?;
        if !playout.play(mv) {
            return Err(HexError::CellAlreadyOwned { coord: mv });
        }
    }

    let rollout = Rollout {
        winner: playout.current_player(),
        plies: playout.plies(),
    };
    playout.rewind()?;
    Ok(rollout)
}
