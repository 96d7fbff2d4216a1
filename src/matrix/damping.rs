//! Teleportation blend: `M = (1 - m)H + mS`, with `S` the uniform `1/N` matrix.

use super::hyperlink::HyperlinkMatrix;
use super::DenseMatrix;
use crate::errors::{LinkRankError, Result};
use crate::types::RankConfig;
use serde::{Deserialize, Serialize};

/// The blended matrix fed to power iteration.
///
/// Column-stochastic only when the hyperlink matrix had no empty columns;
/// each empty column of `H` sums to `m` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DenseMatrix", into = "DenseMatrix")]
pub struct DampedMatrix(DenseMatrix);

impl DampedMatrix {
    /// Wrap a square matrix computed elsewhere; entries must be finite and >= 0
    pub fn from_matrix(matrix: DenseMatrix) -> Result<Self> {
        matrix.ensure_square("damped matrix")?;
        for i in 0..matrix.rows() {
            if matrix.row(i).iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(LinkRankError::invalid_config(format!(
                    "damped matrix row {i} has a negative or non-finite entry"
                )));
            }
        }
        Ok(Self(matrix))
    }

    /// Number of pages
    pub fn size(&self) -> usize {
        self.0.rows()
    }

    /// Borrow the underlying blended matrix
    pub fn as_matrix(&self) -> &DenseMatrix {
        &self.0
    }

    /// Unwrap into the underlying blended matrix
    pub fn into_inner(self) -> DenseMatrix {
        self.0
    }
}

impl TryFrom<DenseMatrix> for DampedMatrix {
    type Error = LinkRankError;

    fn try_from(matrix: DenseMatrix) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<DampedMatrix> for DenseMatrix {
    fn from(damped: DampedMatrix) -> Self {
        damped.0
    }
}

/// Blends a [`HyperlinkMatrix`] with uniform teleportation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampingBlender {
    damping: f64,
}

impl Default for DampingBlender {
    fn default() -> Self {
        Self {
            damping: RankConfig::DEFAULT_DAMPING,
        }
    }
}

impl DampingBlender {
    /// Create a blender; `damping` must lie in `[0, 1)`
    pub fn new(damping: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&damping) {
            return Err(LinkRankError::invalid_config(format!(
                "damping must be in [0, 1), got {damping}"
            )));
        }
        Ok(Self { damping })
    }

    /// Teleportation weight `m`
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Compute `(1 - m)H + mS` entrywise
    pub fn blend(&self, hyperlink: &HyperlinkMatrix) -> DampedMatrix {
        let n = hyperlink.size();
        let teleport = self.damping * (1.0 / n as f64);

        let mut blended = hyperlink.as_matrix().scaled(1.0 - self.damping);
        for i in 0..n {
            for j in 0..n {
                blended.set(i, j, blended.get(i, j) + teleport);
            }
        }

        DampedMatrix(blended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::adjacency::AdjacencyBuilder;
    use crate::matrix::hyperlink::HyperlinkMatrixBuilder;
    use crate::network::Network;

    fn hyperlink(rows: &[Vec<u8>]) -> HyperlinkMatrix {
        let network = Network::from_adjacency(rows).unwrap();
        HyperlinkMatrixBuilder.build(&AdjacencyBuilder.build(&network))
    }

    #[test]
    fn test_columns_stochastic_without_dangling() {
        let h = hyperlink(&[
            vec![0, 0, 1, 1],
            vec![1, 0, 0, 0],
            vec![1, 1, 0, 1],
            vec![1, 1, 0, 0],
        ]);
        let m = DampingBlender::default().blend(&h);
        for sum in m.as_matrix().column_sums() {
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dangling_column_sums_to_damping() {
        let h = hyperlink(&[vec![0, 1, 1], vec![0, 0, 1], vec![0, 1, 0]]);
        let m = DampingBlender::new(0.15).unwrap().blend(&h);
        let sums = m.as_matrix().column_sums();
        assert!((sums[0] - 0.15).abs() < 1e-12);
        assert!((sums[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_entries() {
        let h = hyperlink(&[vec![0, 1], vec![1, 0]]);
        let m = DampingBlender::new(0.2).unwrap().blend(&h);
        assert!((m.as_matrix().get(0, 0) - 0.1).abs() < 1e-12);
        assert!((m.as_matrix().get(0, 1) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_damping() {
        assert!(DampingBlender::new(1.0).is_err());
        assert!(DampingBlender::new(-0.01).is_err());
        assert!(DampingBlender::new(f64::NAN).is_err());
        assert_eq!(DampingBlender::new(0.0).unwrap().damping(), 0.0);
    }

    #[test]
    fn test_from_matrix_requires_square() {
        assert!(DampedMatrix::from_matrix(DenseMatrix::zeros(2, 3)).is_err());
        assert!(DampedMatrix::from_matrix(DenseMatrix::zeros(0, 0)).is_err());
        assert!(DampedMatrix::from_matrix(DenseMatrix::filled(2, 2, 0.5)).is_ok());
        assert!(DampedMatrix::from_matrix(DenseMatrix::filled(2, 2, -0.5)).is_err());
        assert!(DampedMatrix::from_matrix(DenseMatrix::filled(2, 2, f64::NAN)).is_err());
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        // Too few entries for the declared shape
        let json = r#"{"rows":2,"cols":2,"data":[1.0]}"#;
        assert!(serde_json::from_str::<DampedMatrix>(json).is_err());

        // No pages
        let json = r#"{"rows":0,"cols":0,"data":[]}"#;
        assert!(serde_json::from_str::<DampedMatrix>(json).is_err());

        // Not square
        let json = r#"{"rows":1,"cols":2,"data":[0.5,0.5]}"#;
        assert!(serde_json::from_str::<DampedMatrix>(json).is_err());
    }

    #[test]
    fn test_serialized_blend_solves_the_same() {
        use crate::pagerank::power::PowerIterationSolver;

        let h = hyperlink(&[vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        let m = DampingBlender::default().blend(&h);
        let json = serde_json::to_string(&m).unwrap();
        let back: DampedMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), 3);

        let solver = PowerIterationSolver::new();
        let a = solver.solve(&back).unwrap();
        let b = solver.solve(&m).unwrap();
        assert_eq!(a.converged, b.converged);
        for (x, y) in a.scores.iter().zip(&b.scores) {
            assert!((x - y).abs() < 1e-12);
        }
    }
}
