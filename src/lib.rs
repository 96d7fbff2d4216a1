//! # linkrank
//!
//! PageRank for small directed link networks, with keyword search in rank
//! order.
//!
//! A run takes a fixed [`Network`] snapshot through these stages:
//!
//! 1. [`AdjacencyBuilder`] — 0/1 link matrix
//! 2. [`HyperlinkMatrixBuilder`] — column-normalized transition matrix
//! 3. [`DampingBlender`] — `M = (1 - m)H + mS` teleportation blend
//! 4. [`PowerIterationSolver`] — `r^k = M · r^{k-1}` until every entry moves
//!    by at most epsilon, or the iteration cap is hit
//! 5. [`RankSorter`] — descending scores, ties in page order
//!
//! [`KeywordSearchIndex`] then searches page keywords in the ranked order.
//!
//! ## Features
//!
//! - **Reproducible**: randomness is always injected, so seeded runs replay
//! - **Explicit about dangling pages**: networks where a page has no inbound
//!   link are rejected unless the caller opts in
//! - **Inspectable**: every intermediate matrix is returned for display
//!
//! ```
//! use linkrank::{compute_ranking, Network};
//!
//! let network = Network::from_adjacency(&[
//!     vec![0, 0, 1, 1],
//!     vec![1, 0, 0, 0],
//!     vec![1, 1, 0, 1],
//!     vec![1, 1, 0, 0],
//! ])?;
//! let result = compute_ranking(&network, 0.15, 0.001, 50)?;
//! assert!(result.converged);
//! assert_eq!(result.pages()[0].page_id(), 1);
//! # Ok::<(), linkrank::LinkRankError>(())
//! ```

pub mod errors;
pub mod matrix;
pub mod network;
pub mod pagerank;
pub mod pipeline;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use errors::{LinkRankError, Result};
pub use types::{DanglingPolicy, Page, PageId, RankConfig, RankedPage, SearchHit};

// Re-export main functionality
pub use matrix::adjacency::{
    dangling_columns, validate_no_dangling, AdjacencyBuilder, AdjacencyMatrix,
};
pub use matrix::damping::{DampedMatrix, DampingBlender};
pub use matrix::hyperlink::{HyperlinkMatrix, HyperlinkMatrixBuilder};
pub use matrix::DenseMatrix;
pub use network::generator::{NetworkGenerator, DEFAULT_VOCABULARY};
pub use network::Network;
pub use pagerank::{power::PowerIterationSolver, sort::RankSorter, PageRankResult};
pub use pipeline::{compute_ranking, search, RankedResult, RankingArtifacts, RankingPipeline};
pub use search::KeywordSearchIndex;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
