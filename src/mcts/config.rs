//! Agent configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Search configuration for the `Agent`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Wall-clock budget per `get_move`, in milliseconds.
    /// Checked between iterations, so a search may overrun by one iteration.
    pub wait_time_ms: u64,

    /// UCT exploration coefficient (default: 2.0).
    pub exploration_constant: f64,

    /// Random seed for rollouts.
    /// Same seed and same iteration count produce the same search.
    pub seed: u64,

    /// Optional cap on iterations per `get_move`, checked alongside the
    /// deadline. `None` runs until the time budget is spent.
    pub max_iterations: Option<u32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            wait_time_ms: 1000,
            exploration_constant: 2.0,
            seed: 42,
            max_iterations: None,
        }
    }
}

impl AgentConfig {
    /// Set the per-move time budget in milliseconds.
    pub fn with_wait_time(mut self, wait_time_ms: u64) -> Self {
        self.wait_time_ms = wait_time_ms;
        self
    }

    /// Set a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Set a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Stop each search after at most `iterations` iterations.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// The time budget as a `Duration`.
    #[must_use]
    pub fn wait_time(&self) -> Duration {
        Duration::from_millis(self.wait_time_ms)
    }
}
