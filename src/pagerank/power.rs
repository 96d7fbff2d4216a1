//! Power iteration
//!
//! Starts from the uniform vector `r⁰ = (1/N, …, 1/N)` and repeatedly applies
//! the damped matrix, `r^k = M · r^{k-1}`, using two swapped buffers.
//! Iteration stops once every entry moved by at most `epsilon` relative to the
//! previous iterate (never on the first step, which has no previous iterate),
//! or when the iteration cap is reached.

use super::PageRankResult;
use crate::errors::{LinkRankError, Result};
use crate::matrix::damping::DampedMatrix;
use crate::types::RankConfig;

/// Power-iteration solver for a [`DampedMatrix`]
#[derive(Debug, Clone, PartialEq)]
pub struct PowerIterationSolver {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Per-entry convergence threshold
    pub epsilon: f64,
}

impl Default for PowerIterationSolver {
    fn default() -> Self {
        Self {
            max_iterations: RankConfig::DEFAULT_MAX_ITERATIONS,
            epsilon: RankConfig::DEFAULT_EPSILON,
        }
    }
}

impl PowerIterationSolver {
    /// Create a new solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver using the iteration settings of `config`
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            epsilon: config.epsilon,
        }
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence epsilon
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Run power iteration.
    ///
    /// Hitting the iteration cap is not an error: the last iterate comes back
    /// with `converged = false`.
    pub fn solve(&self, matrix: &DampedMatrix) -> Result<PageRankResult> {
        if self.max_iterations == 0 {
            return Err(LinkRankError::invalid_config("max_iterations must be >= 1"));
        }
        if self.epsilon.is_nan() || self.epsilon <= 0.0 {
            return Err(LinkRankError::invalid_config(format!(
                "epsilon must be > 0, got {}",
                self.epsilon
            )));
        }

        let m = matrix.as_matrix();
        let n = matrix.size();

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;
            m.mul_vec_into(&scores, &mut next);

            delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0, f64::max);

            std::mem::swap(&mut scores, &mut next);

            if iterations > 1 && delta <= self.epsilon {
                converged = true;
                break;
            }
        }

        #[cfg(feature = "tracing")]
        {
            if converged {
                tracing::debug!(iterations, delta, "power iteration converged");
            } else {
                tracing::warn!(
                    iterations,
                    delta,
                    epsilon = self.epsilon,
                    "power iteration hit the iteration cap"
                );
            }
        }

        Ok(PageRankResult::new(scores, iterations, delta, converged))
    }
}
