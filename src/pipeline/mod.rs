//! Ranking pipeline: orchestration and the entry points used by callers.
//!
//! ## Submodules
//!
//! - [`artifacts`] — typed outputs of a run ([`RankedResult`], [`RankingArtifacts`])
//! - [`runner`] — [`RankingPipeline`] and the one-call helpers

pub mod artifacts;
pub mod runner;

pub use crate::matrix::adjacency::validate_no_dangling;
pub use artifacts::{RankedResult, RankingArtifacts};
pub use runner::{compute_ranking, search, RankingPipeline};
