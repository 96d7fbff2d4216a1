//! The link network: an ordered collection of pages.
//!
//! A [`Network`] is always valid once constructed: page `id` sits at index
//! `id - 1`, and every link points at another page of the same network.

pub mod generator;

use crate::errors::{LinkRankError, Result};
use crate::types::{Page, PageId};
use serde::{Deserialize, Serialize};

/// A fixed snapshot of the link graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Page>", into = "Vec<Page>")]
pub struct Network {
    pages: Vec<Page>,
}

impl Network {
    /// Build a network from caller-supplied pages.
    ///
    /// Pages must be listed in id order starting at 1, and every link must
    /// target another page in `[1, N]` exactly once.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self> {
        if pages.is_empty() {
            return Err(LinkRankError::invalid_config("a network needs at least one page"));
        }

        let n = pages.len();
        for (index, page) in pages.iter().enumerate() {
            if page.id() as usize != index + 1 {
                return Err(LinkRankError::invalid_config(format!(
                    "page at position {} has id {}, expected {}",
                    index,
                    page.id(),
                    index + 1
                )));
            }

            for (pos, &target) in page.links().iter().enumerate() {
                if target == 0 || target as usize > n {
                    return Err(LinkRankError::invalid_config(format!(
                        "page {} links to {}, outside [1, {}]",
                        page.id(),
                        target,
                        n
                    )));
                }
                if target == page.id() {
                    return Err(LinkRankError::invalid_config(format!(
                        "page {} links to itself",
                        page.id()
                    )));
                }
                if page.links()[..pos].contains(&target) {
                    return Err(LinkRankError::invalid_config(format!(
                        "page {} links to {} more than once",
                        page.id(),
                        target
                    )));
                }
            }
        }

        Ok(Self { pages })
    }

    /// Build a network from a 0/1 adjacency matrix, where `rows[i][j] == 1`
    /// means page `i + 1` links to page `j + 1`. Pages get no keywords.
    pub fn from_adjacency(rows: &[Vec<u8>]) -> Result<Self> {
        let n = rows.len();
        let mut pages = Vec::with_capacity(n);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LinkRankError::invalid_config(format!(
                    "adjacency row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }

            let mut page = Page::new(i as PageId + 1);
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 if i == j => {
                        return Err(LinkRankError::invalid_config(format!(
                            "adjacency diagonal entry ({i}, {i}) must be 0"
                        )));
                    }
                    1 => {
                        page.insert_link(j as PageId + 1);
                    }
                    other => {
                        return Err(LinkRankError::invalid_config(format!(
                            "adjacency entry ({i}, {j}) is {other}, expected 0 or 1"
                        )));
                    }
                }
            }
            pages.push(page);
        }

        Self::from_pages(pages)
    }

    /// Number of pages (N)
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of directed links
    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|p| p.links().len()).sum()
    }

    /// All pages, indexed by `id - 1`
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page by its 1-based id
    pub fn page(&self, id: PageId) -> Option<&Page> {
        (id as usize).checked_sub(1).and_then(|i| self.pages.get(i))
    }

    /// Iterate over the pages in index order
    pub fn iter(&self) -> impl Iterator<Item = &Page> + '_ {
        self.pages.iter()
    }

    /// Number of inbound links per page, indexed by page index
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.pages.len()];
        for page in &self.pages {
            for &target in page.links() {
                degrees[target as usize - 1] += 1;
            }
        }
        degrees
    }
}

impl TryFrom<Vec<Page>> for Network {
    type Error = LinkRankError;

    fn try_from(pages: Vec<Page>) -> Result<Self> {
        Self::from_pages(pages)
    }
}

impl From<Network> for Vec<Page> {
    fn from(network: Network) -> Self {
        network.pages
    }
}
