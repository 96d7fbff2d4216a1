//! Random network generation
//!
//! Links are placed by rejection sampling: a uniformly random origin and
//! target are drawn and the pair is kept unless it is a self link or already
//! present. Keywords are drawn the same way from a fixed vocabulary.
//!
//! Randomness is always supplied by the caller, so a seeded generator
//! reproduces a network exactly.

use super::Network;
use crate::errors::{LinkRankError, Result};
use crate::types::{Page, PageId};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Vocabulary used when no custom one is supplied
pub const DEFAULT_VOCABULARY: [&str; 14] = [
    "dog", "cat", "horse", "chicken", "fish", "bear", "bird", "shark", "snake", "pig", "lion",
    "turkey", "wolf", "spider",
];

/// Each page gets between 1 and this many keywords
pub const MAX_KEYWORDS_PER_PAGE: usize = 3;

/// Builds random networks of pages with links and keywords
#[derive(Debug, Clone)]
pub struct NetworkGenerator {
    vocabulary: Vec<String>,
}

impl Default for NetworkGenerator {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl NetworkGenerator {
    /// Create a generator using [`DEFAULT_VOCABULARY`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom vocabulary.
    ///
    /// Repeated words are collapsed; at least one word is required.
    pub fn with_vocabulary<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        let vocabulary: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| seen.insert(w.clone()))
            .collect();

        if vocabulary.is_empty() {
            return Err(LinkRankError::invalid_config("vocabulary must not be empty"));
        }

        Ok(Self { vocabulary })
    }

    /// The words keywords are drawn from
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Largest link count a network of `page_count` pages can hold
    pub fn max_links(page_count: usize) -> Option<usize> {
        page_count.checked_mul(page_count.saturating_sub(1))
    }

    /// Generate `page_count` pages holding exactly `link_count` distinct links.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        page_count: usize,
        link_count: usize,
        rng: &mut R,
    ) -> Result<Network> {
        if page_count == 0 {
            return Err(LinkRankError::invalid_config("page_count must be >= 1"));
        }
        if page_count > PageId::MAX as usize {
            return Err(LinkRankError::invalid_config(format!(
                "page_count must be <= {}",
                PageId::MAX
            )));
        }
        match Self::max_links(page_count) {
            Some(max) if link_count <= max => {}
            max => {
                return Err(LinkRankError::invalid_config(format!(
                    "link_count {} exceeds the {} possible links between {} pages",
                    link_count,
                    max.map_or_else(|| "overflowing".to_string(), |m| m.to_string()),
                    page_count
                )));
            }
        }

        let mut pages: Vec<Page> = (1..=page_count).map(|id| Page::new(id as PageId)).collect();

        let mut placed = 0;
        let mut rejected = 0usize;
        while placed < link_count {
            let origin = rng.random_range(0..page_count);
            let target = rng.random_range(1..=page_count) as PageId;
            if pages[origin].insert_link(target) {
                placed += 1;
            } else {
                rejected += 1;
            }
        }

        for page in &mut pages {
            self.assign_keywords(page, rng);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(page_count, link_count, rejected, "generated random network");
        #[cfg(not(feature = "tracing"))]
        let _ = rejected;

        Network::from_pages(pages)
    }

    fn assign_keywords<R: Rng + ?Sized>(&self, page: &mut Page, rng: &mut R) {
        let wanted = rng
            .random_range(1..=MAX_KEYWORDS_PER_PAGE)
            .min(self.vocabulary.len());

        let mut assigned = 0;
        while assigned < wanted {
            let word = &self.vocabulary[rng.random_range(0..self.vocabulary.len())];
            if page.insert_keyword(word.clone()) {
                assigned += 1;
            }
        }
    }
}
