//! Hyperlink (transition) matrix
//!
//! Each non-empty column of the adjacency matrix is normalized to sum to 1.
//! Empty columns stay all-zero; they are not redistributed.

use super::adjacency::AdjacencyMatrix;
use super::DenseMatrix;
use crate::errors::{LinkRankError, Result};
use serde::{Deserialize, Serialize};

/// Column-normalized adjacency matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DenseMatrix", into = "DenseMatrix")]
pub struct HyperlinkMatrix(DenseMatrix);

impl HyperlinkMatrix {
    /// Wrap a square matrix of finite, non-negative entries
    pub fn from_matrix(matrix: DenseMatrix) -> Result<Self> {
        matrix.ensure_square("hyperlink matrix")?;
        for i in 0..matrix.rows() {
            if let Some((j, value)) = matrix
                .row(i)
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite() || **v < 0.0)
            {
                return Err(LinkRankError::invalid_config(format!(
                    "hyperlink entry ({i}, {j}) is {value}, expected a finite value >= 0"
                )));
            }
        }
        Ok(Self(matrix))
    }

    /// Number of pages
    pub fn size(&self) -> usize {
        self.0.rows()
    }

    /// Borrow the underlying transition matrix
    pub fn as_matrix(&self) -> &DenseMatrix {
        &self.0
    }

    /// Unwrap into the underlying transition matrix
    pub fn into_inner(self) -> DenseMatrix {
        self.0
    }
}

impl TryFrom<DenseMatrix> for HyperlinkMatrix {
    type Error = LinkRankError;

    fn try_from(matrix: DenseMatrix) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<HyperlinkMatrix> for DenseMatrix {
    fn from(hyperlink: HyperlinkMatrix) -> Self {
        hyperlink.0
    }
}

/// Builds a [`HyperlinkMatrix`] from an [`AdjacencyMatrix`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HyperlinkMatrixBuilder;

impl HyperlinkMatrixBuilder {
    /// Divide each column by its sum, leaving the diagonal and empty columns at 0
    pub fn build(&self, adjacency: &AdjacencyMatrix) -> HyperlinkMatrix {
        let adj = adjacency.as_matrix();
        let n = adj.rows();
        let col_sums = adj.column_sums();
        let mut matrix = DenseMatrix::zeros(n, n);

        for (j, &col_sum) in col_sums.iter().enumerate() {
            if col_sum <= 0.0 {
                continue;
            }
            for i in 0..n {
                // Self links never carry weight.
                if i != j {
                    matrix.set(i, j, adj.get(i, j) / col_sum);
                }
            }
        }

        HyperlinkMatrix(matrix)
    }
}
