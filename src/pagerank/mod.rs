//! PageRank computation
//!
//! [`power::PowerIterationSolver`] produces the rank vector and
//! [`sort::RankSorter`] orders it.

pub mod power;
pub mod sort;

use serde::{Deserialize, Serialize};

/// Result of a power-iteration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankResult {
    /// Scores for each page (indexed by page index)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-entry change in the last iteration
    pub delta: f64,
    /// Whether the epsilon condition was met before the iteration cap
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for a page index
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Total rank mass. 1 for stochastic input, less when dangling pages were accepted.
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}
