//! Monte Carlo Tree Search over the live board.
//!
//! ## Overview
//!
//! The agent never copies the board. Every iteration plays its line on the
//! caller's `Board` and undoes it again, so the search depends on `undo`
//! being the exact inverse of `play`. The `Rewind` guard enforces the stack
//! discipline: whatever a guard played is undone when it goes out of scope.
//!
//! ## Usage
//!
//! ```rust
//! use hex_mcts::board::Board;
//! use hex_mcts::mcts::{Agent, AgentConfig};
//!
//! let mut board = Board::new(5, 5).unwrap();
//! let config = AgentConfig::default().with_wait_time(50).with_max_iterations(200);
//! let mut agent = Agent::with_config(&board, config);
//!
//! let mv = agent.get_move(&mut board).unwrap();
//! assert!(board.play(mv));
//! ```

pub mod agent;
pub mod config;
pub mod node;
pub mod policy;
pub mod rewind;
pub mod rollout;
pub mod stats;
pub mod tree;

// Re-export main types
pub use agent::Agent;
pub use config::AgentConfig;
pub use node::{Children, NodeId, SearchNode};
pub use policy::{best_child, most_visited_child, uct_score};
pub use rewind::Rewind;
pub use rollout::{random_rollout, Rollout};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
