//! Outputs of a ranking run.
//!
//! Both types are immutable snapshots owned by the caller once a run returns.

use crate::errors::{LinkRankError, Result};
use crate::matrix::adjacency::AdjacencyMatrix;
use crate::matrix::damping::DampedMatrix;
use crate::matrix::hyperlink::HyperlinkMatrix;
use crate::types::RankedPage;
use serde::{Deserialize, Serialize};

// ============================================================================
// RankedResult
// ============================================================================

/// Pages sorted by descending score, plus iteration diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Sorted entries, highest score first, ties in index order
    pub ranked: Vec<RankedPage>,
    /// Power-iteration steps performed
    pub iterations: usize,
    /// Largest per-entry change in the final step
    pub delta: f64,
    /// `false` when the iteration cap was reached first
    pub converged: bool,
}

impl RankedResult {
    /// Sorted entries
    pub fn pages(&self) -> &[RankedPage] {
        &self.ranked
    }

    /// The `n` best-ranked entries (all of them if `n` exceeds the page count)
    pub fn top_n(&self, n: usize) -> &[RankedPage] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Score of a page index, if present
    pub fn score_of(&self, index: usize) -> Option<f64> {
        self.ranked.iter().find(|r| r.index == index).map(|r| r.score)
    }

    /// 1-based position of a page index in the ranking
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.ranked.iter().position(|r| r.index == index).map(|p| p + 1)
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Turn a non-converged result into a [`LinkRankError::ConvergenceFailure`]
    pub fn ensure_converged(&self) -> Result<&Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(LinkRankError::convergence_failure(self.iterations, self.delta))
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// RankingArtifacts
// ============================================================================

/// Every intermediate of a run, for callers that display the matrices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingArtifacts {
    pub adjacency: AdjacencyMatrix,
    pub hyperlink: HyperlinkMatrix,
    pub damped: DampedMatrix,
    /// Final rank vector in page-index order
    pub rank_vector: Vec<f64>,
    pub result: RankedResult,
}

impl RankingArtifacts {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
