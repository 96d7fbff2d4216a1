//! Ordering of a rank vector
//!
//! Descending by score; equal scores keep their original index order.

use crate::types::RankedPage;

/// Sorts a rank vector into [`RankedPage`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct RankSorter;

impl RankSorter {
    /// Pair each score with its index and order them highest first
    pub fn sort(&self, scores: &[f64]) -> Vec<RankedPage> {
        let mut ranked: Vec<RankedPage> = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| RankedPage::new(index, score))
            .collect();
        // `sort_by` is stable, which is what keeps ties in index order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let ranked = RankSorter.sort(&[0.1, 0.4, 0.2, 0.3]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_ties_keep_index_order() {
        let ranked = RankSorter.sort(&[0.25, 0.5, 0.25, 0.5, 0.25]);
        let order: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_empty() {
        assert!(RankSorter.sort(&[]).is_empty());
    }
}
