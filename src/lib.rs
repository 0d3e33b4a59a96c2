//! # hex-mcts
//!
//! A Hex connection-game engine and a Monte Carlo Tree Search opponent.
//!
//! ## Design Principles
//!
//! 1. **Mutate and rewind**: the search plays hypothetical lines directly on
//!    the one `Board` and undoes them. Nothing is cloned per simulation.
//!
//! 2. **Virtual borders**: the playable area is ringed by pre-owned sentinel
//!    cells, so a win is "one chain touches both of my border sides" and
//!    needs no coordinate arithmetic.
//!
//! 3. **Reproducible**: all randomness flows from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, RNG, errors
//! - `board`: Cells, sentinels, free-cell set, win detection, play/undo
//! - `mcts`: Search tree, UCT, rollouts, the `Agent`

pub mod board;
pub mod core;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{Coord, GameRng, GameRngState, HexError, PlayerId, NEIGHBOR_OFFSETS};

pub use crate::board::{Board, BorderId, Cell, Edge};

pub use crate::mcts::{
    Agent, AgentConfig, NodeId, SearchNode, SearchStats, SearchTree, TreeStats,
};
