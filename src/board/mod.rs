//! The Hex board model.
//!
//! - `cell`: one hexagon with owner, border tag and neighbour indices
//! - `border`: which player and border side owns each sentinel
//! - `free_cells`: O(1) indexed set of unclaimed coordinates
//! - `connect`: breadth-first win detection from the last move
//! - `grid`: the `Board` itself, with play/undo

pub mod border;
pub mod cell;
mod connect;
mod free_cells;
pub mod grid;

pub use border::Edge;
pub use cell::{BorderId, Cell, CellIndex};
pub use grid::Board;
