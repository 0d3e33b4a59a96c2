//! Core engine types: players, coordinates, RNG, errors.
//!
//! These are shared by the board model and the search and carry no game
//! state of their own.

pub mod coord;
pub mod error;
pub mod player;
pub mod rng;

pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use error::{HexError, Result};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
