//! The Monte Carlo Tree Search opponent.
//!
//! Each `get_move` builds a fresh tree and runs iterations until the time
//! budget (or the optional iteration cap) is spent:
//!
//! 1. **Selection**: descend by UCT from the root, playing each move on the
//!    board, until reaching a node without children.
//! 2. **Expansion**: a leaf that has been visited before and whose game is
//!    not over gets one child per free cell; descend into the first.
//! 3. **Simulation**: finish the game with uniform random moves, note the
//!    winner, undo the random moves.
//! 4. **Backpropagation**: walk back to the root, undoing one move per step
//!    and counting the visit (and the win, if the searching player won) on
//!    every node of the path.
//!
//! All of this happens on the caller's board through a `Rewind` guard; the
//! board is back in its original state when `get_move` returns, on success
//! and on error alike.

use std::time::Instant;

use tracing::{debug, trace};

use super::config::AgentConfig;
use super::node::NodeId;
use super::policy::{best_child, most_visited_child};
use super::rewind::Rewind;
use super::rollout::random_rollout;
use super::stats::SearchStats;
use super::tree::SearchTree;
use crate::board::Board;
use crate::core::{Coord, GameRng, HexError, PlayerId, Result};

/// MCTS player bound to one side of the board.
#[derive(Debug)]
pub struct Agent {
    /// The side this agent plays; fixed at construction.
    player: PlayerId,

    config: AgentConfig,

    /// Forked once per search.
    rng: GameRng,

    /// Tree of the most recent search.
    tree: SearchTree,

    stats: SearchStats,
}

impl Agent {
    /// Agent for the player to move on `board`, with a time budget in
    /// milliseconds and otherwise default settings.
    pub fn new(board: &Board, wait_time_ms: u64) -> Self {
        Self::with_config(board, AgentConfig::default().with_wait_time(wait_time_ms))
    }

    /// Agent for the player to move on `board`.
    pub fn with_config(board: &Board, config: AgentConfig) -> Self {
        Self {
            player: board.current_player(),
            rng: GameRng::new(config.seed),
            config,
            tree: SearchTree::new(),
            stats: SearchStats::default(),
        }
    }

    /// The side this agent searches for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Tree of the most recent search.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// `(move, visits, wins)` for every root child of the most recent search.
    pub fn action_visits(&self) -> Vec<(Coord, u32, u32)> {
        self.tree
            .root_node()
            .children()
            .iter()
            .map(|&id| {
                let node = self.tree.get(id);
                (node.mv, node.visits, node.wins)
            })
            .collect()
    }

    /// Search the current position and recommend a move.
    ///
    /// The move is not played; the caller commits it with `Board::play`.
    /// Fails with `GameOver` on a finished game.
    pub fn get_move(&mut self, board: &mut Board) -> Result<Coord> {
        if board.is_over() {
            return Err(HexError::GameOver);
        }

        let start = Instant::now();
        let deadline = start + self.config.wait_time();
        let mut rng = self.rng.fork();

        self.stats.reset();
        self.tree.reset();
        let root = self.tree.root();
        self.expand(root, board)?;

        while self.has_budget(deadline) {
            self.iterate(board, &mut rng)?;
            self.stats.iterations += 1;
        }

        let root_node = self.tree.root_node();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.root_visits = root_node.visits;
        self.stats.root_wins = root_node.wins;

        let best = most_visited_child(&self.tree, root).ok_or(HexError::NoFreeCells)?;
        let best = self.tree.get(best);
        debug!(
            player = %self.player,
            iterations = self.stats.iterations,
            root_visits = self.stats.root_visits,
            root_wins = self.stats.root_wins,
            nodes = self.tree.len(),
            time_us = self.stats.time_us,
            best = %best.mv,
            best_visits = best.visits,
            "search finished"
        );
        Ok(best.mv)
    }

    /// Iteration cap not reached and deadline not passed.
    fn has_budget(&self, deadline: Instant) -> bool {
        let under_cap = match self.config.max_iterations {
            Some(cap) => self.stats.iterations < cap,
            None => true,
        };
        under_cap && Instant::now() < deadline
    }

    /// One select / expand / simulate / backpropagate pass.
    fn iterate(&mut self, board: &mut Board, rng: &mut GameRng) -> Result<()> {
        let exploration = self.config.exploration_constant;
        let mut line = Rewind::new(board);
        let mut current = self.tree.root();

        // Selection
        while let Some(child) = best_child(&self.tree, current, exploration) {
            current = child;
            self.descend(&mut line, current)?;
        }

        // Expansion
        let leaf = self.tree.get(current);
        if !line.is_over() && leaf.visits > 0 && !leaf.is_expanded() {
            current = self.expand(current, &line)?;
            self.descend(&mut line, current)?;
        }

        // Simulation
        let winner = if line.is_over() {
            line.current_player()
        } else {
            self.stats.simulations += 1;
            random_rollout(&mut line, rng)?.winner
        };

        // Backpropagation
        let won = winner == self.player;
        self.tree.get_mut(current).record(won);
        while let Some(parent) = self.tree.get(current).parent() {
            line.undo()?;
            current = parent;
            self.tree.get_mut(current).record(won);
        }
        debug_assert_eq!(line.plies(), 0);
        Ok(())
    }

    /// Play the move of `node` on the line.
    fn descend(&mut self, line: &mut Rewind<'_>, node: NodeId) -> Result<()> {
        let node = self.tree.get(node);
        if !line.play(node.mv) {
            return Err(HexError::IllegalTreeMove { coord: node.mv });
        }
        self.stats.max_depth = self.stats.max_depth.max(node.depth);
        Ok(())
    }

    /// Give `node` one child per free cell; returns the first child.
    fn expand(&mut self, node: NodeId, board: &Board) -> Result<NodeId> {
        let moves = board.possible_moves();
        let first = self.tree.expand(node, &moves).ok_or(HexError::NoFreeCells)?;
        self.stats.nodes_expanded += 1;
        trace!(%node, children = moves.len(), "expanded node");
        Ok(first)
    }
}
