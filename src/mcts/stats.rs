//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `get_move`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed iterations.
    pub iterations: u32,

    /// Random playouts run (iterations that ended on a finished game skip it).
    pub simulations: u32,

    /// Nodes expanded, root included.
    pub nodes_expanded: u32,

    /// Maximum tree depth reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// Root visits at the end of the search.
    pub root_visits: u32,

    /// Root visits won by the searching player.
    pub root_wins: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of root visits won by the searching player.
    #[must_use]
    pub fn root_win_rate(&self) -> f64 {
        if self.root_visits == 0 {
            0.0
        } else {
            self.root_wins as f64 / self.root_visits as f64
        }
    }
}
