//! Core types for linkrank
//!
//! This module defines the data entities shared by every stage of the
//! ranking pipeline: pages, ranked entries, search hits, and configuration.

use crate::errors::{LinkRankError, Result};
use serde::{Deserialize, Serialize};

/// 1-based page identifier. Page `id` lives at index `id - 1` in a network.
pub type PageId = u32;

// ============================================================================
// Page
// ============================================================================

/// A node in the link graph.
///
/// Links and keywords keep their insertion order; both are duplicate-free and
/// a page never links to itself. Pages are built once (by the generator or a
/// caller) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    id: PageId,
    links: Vec<PageId>,
    keywords: Vec<String>,
}

impl Page {
    /// Create a page with no links and no keywords
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            links: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Builder method: add outbound links (self links and duplicates are skipped)
    pub fn with_links(mut self, links: impl IntoIterator<Item = PageId>) -> Self {
        for target in links {
            self.insert_link(target);
        }
        self
    }

    /// Builder method: add keywords (duplicates are skipped)
    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        for keyword in keywords {
            self.insert_keyword(keyword.into());
        }
        self
    }

    /// The page id (1-based)
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Position of this page inside its network (`None` for id 0)
    pub fn index(&self) -> Option<usize> {
        (self.id as usize).checked_sub(1)
    }

    /// Outbound link targets, in insertion order
    pub fn links(&self) -> &[PageId] {
        &self.links
    }

    /// Keywords, in declaration order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Check whether this page links to `target`
    pub fn links_to(&self, target: PageId) -> bool {
        self.links.contains(&target)
    }

    /// Check whether this page carries `keyword` (exact, case-preserving)
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Add a link, returning `false` if it is a self link or already present.
    pub(crate) fn insert_link(&mut self, target: PageId) -> bool {
        if target == self.id || self.links_to(target) {
            return false;
        }
        self.links.push(target);
        true
    }

    /// Add a keyword, returning `false` if it is already present.
    pub(crate) fn insert_keyword(&mut self, keyword: String) -> bool {
        if self.has_keyword(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }
}

// ============================================================================
// Ranking output
// ============================================================================

/// A page index paired with its final PageRank score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedPage {
    /// 0-based page index
    pub index: usize,
    /// Final score
    pub score: f64,
}

impl RankedPage {
    /// Create a new ranked page
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }

    /// The 1-based id of the ranked page
    pub fn page_id(&self) -> PageId {
        self.index as PageId + 1
    }
}

/// One keyword match produced by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page carrying the keyword
    pub page_id: PageId,
    /// The keyword as declared on the page
    pub keyword: String,
}

impl SearchHit {
    /// Create a new search hit
    pub fn new(page_id: PageId, keyword: impl Into<String>) -> Self {
        Self {
            page_id,
            keyword: keyword.into(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// What to do when a page has no inbound links.
///
/// With dangling columns the damped matrix loses mass in those columns, so the
/// computed vector is no longer a probability distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Refuse to rank and report the offending columns.
    #[default]
    Reject,
    /// Rank anyway and accept an unnormalized result.
    Accept,
}

impl DanglingPolicy {
    /// Returns `true` when dangling graphs are ranked anyway.
    pub fn accepts_dangling(self) -> bool {
        matches!(self, DanglingPolicy::Accept)
    }
}

/// Configuration for a ranking run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Teleportation weight `m` in `M = (1 - m)H + mS`, in `[0, 1)`
    pub damping: f64,
    /// Maximum per-entry change between iterations to declare convergence
    pub epsilon: f64,
    /// Iteration cap for power iteration
    pub max_iterations: usize,
    /// Handling of pages without inbound links
    pub dangling_policy: DanglingPolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: Self::DEFAULT_DAMPING,
            epsilon: Self::DEFAULT_EPSILON,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            dangling_policy: DanglingPolicy::Reject,
        }
    }
}

impl RankConfig {
    pub const DEFAULT_DAMPING: f64 = 0.15;
    pub const DEFAULT_EPSILON: f64 = 0.001;
    pub const DEFAULT_MAX_ITERATIONS: usize = 50;

    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(LinkRankError::invalid_config(format!(
                "damping must be in [0, 1), got {}",
                self.damping
            )));
        }

        if self.epsilon.is_nan() || self.epsilon <= 0.0 {
            return Err(LinkRankError::invalid_config(format!(
                "epsilon must be > 0, got {}",
                self.epsilon
            )));
        }

        if self.max_iterations == 0 {
            return Err(LinkRankError::invalid_config("max_iterations must be >= 1"));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence epsilon
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set dangling policy
    pub fn with_dangling_policy(mut self, policy: DanglingPolicy) -> Self {
        self.dangling_policy = policy;
        self
    }
}
