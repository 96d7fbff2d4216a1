//! Keyword search in rank order
//!
//! Pages are visited from the highest score down; within a page keywords are
//! visited in declaration order. A page shows up once per matching keyword.

use crate::network::Network;
use crate::types::{RankedPage, SearchHit};

#[derive(Debug, Clone)]
struct IndexedKeyword {
    original: String,
    folded: String,
}

/// Case-insensitive substring search over page keywords
#[derive(Debug, Clone)]
pub struct KeywordSearchIndex {
    /// Keywords per page index, with a lowercased copy for matching
    keywords: Vec<Vec<IndexedKeyword>>,
}

impl KeywordSearchIndex {
    /// Index the keywords of every page in `network`
    pub fn new(network: &Network) -> Self {
        Self::from_keywords(network.iter().map(|p| p.keywords().to_vec()))
    }

    /// Index keyword lists given per page index
    pub fn from_keywords<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let keywords = pages
            .into_iter()
            .map(|words| {
                words
                    .into_iter()
                    .map(|original| IndexedKeyword {
                        folded: original.to_lowercase(),
                        original,
                    })
                    .collect()
            })
            .collect();
        Self { keywords }
    }

    /// Number of indexed pages
    pub fn page_count(&self) -> usize {
        self.keywords.len()
    }

    /// Find keywords containing `query` (trimmed, case-insensitive), walking
    /// pages in the order given by `ranked`.
    ///
    /// A blank query matches nothing. Ranked entries whose index is not in the
    /// index are skipped.
    pub fn search(&self, ranked: &[RankedPage], query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for entry in ranked {
            let Some(words) = self.keywords.get(entry.index) else {
                continue;
            };
            for keyword in words.iter().filter(|kw| kw.folded.contains(&needle)) {
                hits.push(SearchHit::new(entry.page_id(), keyword.original.clone()));
            }
        }
        hits
    }
}
