//! Adjacency matrix construction and dangling-page checks

use super::DenseMatrix;
use crate::errors::{LinkRankError, Result};
use crate::network::Network;
use serde::{Deserialize, Serialize};

/// N×N 0/1 matrix: entry `(i, j)` is 1 iff page `i + 1` links to page `j + 1`.
///
/// A snapshot of the network's links at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DenseMatrix", into = "DenseMatrix")]
pub struct AdjacencyMatrix(DenseMatrix);

impl AdjacencyMatrix {
    /// Wrap a square 0/1 matrix with a zero diagonal
    pub fn from_matrix(matrix: DenseMatrix) -> Result<Self> {
        matrix.ensure_square("adjacency matrix")?;
        for i in 0..matrix.rows() {
            for (j, &value) in matrix.row(i).iter().enumerate() {
                if value != 0.0 && value != 1.0 {
                    return Err(LinkRankError::invalid_config(format!(
                        "adjacency entry ({i}, {j}) is {value}, expected 0 or 1"
                    )));
                }
                if i == j && value != 0.0 {
                    return Err(LinkRankError::invalid_config(format!(
                        "adjacency diagonal entry ({i}, {i}) must be 0"
                    )));
                }
            }
        }
        Ok(Self(matrix))
    }

    /// Number of pages
    pub fn size(&self) -> usize {
        self.0.rows()
    }

    /// Check whether page `from + 1` links to page `to + 1` (0-based indices)
    pub fn has_link(&self, from: usize, to: usize) -> bool {
        self.0.get(from, to) != 0.0
    }

    /// Inbound link count per page (column sums)
    pub fn in_degrees(&self) -> Vec<usize> {
        self.0.column_sums().into_iter().map(|s| s as usize).collect()
    }

    /// Borrow the underlying 0/1 matrix
    pub fn as_matrix(&self) -> &DenseMatrix {
        &self.0
    }

    /// Unwrap into the underlying 0/1 matrix
    pub fn into_inner(self) -> DenseMatrix {
        self.0
    }
}

impl TryFrom<DenseMatrix> for AdjacencyMatrix {
    type Error = LinkRankError;

    fn try_from(matrix: DenseMatrix) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<AdjacencyMatrix> for DenseMatrix {
    fn from(adjacency: AdjacencyMatrix) -> Self {
        adjacency.0
    }
}

/// Turns a [`Network`] into its [`AdjacencyMatrix`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyBuilder;

impl AdjacencyBuilder {
    /// Set entry `(i, j)` to 1 for every link from page `i + 1` to page `j + 1`
    pub fn build(&self, network: &Network) -> AdjacencyMatrix {
        let n = network.page_count();
        let mut matrix = DenseMatrix::zeros(n, n);
        // Network pages sit at index `id - 1`.
        for (index, page) in network.iter().enumerate() {
            for &link in page.links() {
                matrix.set(index, link as usize - 1, 1.0);
            }
        }
        AdjacencyMatrix(matrix)
    }
}

/// Indices of columns with no 1-entry, i.e. pages nobody links to
pub fn dangling_columns(adjacency: &AdjacencyMatrix) -> Vec<usize> {
    adjacency
        .0
        .column_sums()
        .iter()
        .enumerate()
        .filter(|(_, &sum)| sum == 0.0)
        .map(|(col, _)| col)
        .collect()
}

/// `true` iff every column has at least one 1-entry.
///
/// The damped matrix is only column-stochastic when this holds.
pub fn validate_no_dangling(adjacency: &AdjacencyMatrix) -> bool {
    dangling_columns(adjacency).is_empty()
}
