//! Error types for linkrank
//!
//! This module defines the error types used throughout the library.
//! Non-convergence is reported on the result rather than as an error; callers
//! that want it to be fatal use [`crate::RankedResult::ensure_converged`].

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Main error type for linkrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkRankError {
    /// A configuration value or a network precondition is out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// At least one page has no inbound links, so the damped matrix would not
    /// be column-stochastic
    #[error(
        "Dangling graph: {} page(s) without inbound links (columns {columns:?})",
        .columns.len()
    )]
    DanglingGraph { columns: Vec<usize> },

    /// Power iteration hit the iteration cap before the epsilon condition held
    /// Note: the partial rank vector is still available on the result
    #[error("Convergence failure after {iterations} iterations (delta={delta:.6})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl LinkRankError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a dangling graph error from the offending column indices
    pub fn dangling_graph(columns: Vec<usize>) -> Self {
        Self::DanglingGraph { columns }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize, delta: f64) -> Self {
        Self::ConvergenceFailure { iterations, delta }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error indicates non-convergence
    /// (which may still have usable partial results)
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }

    /// Check if this error reports pages without inbound links
    pub fn is_dangling_graph(&self) -> bool {
        matches!(self, Self::DanglingGraph { .. })
    }
}

impl From<serde_json::Error> for LinkRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
