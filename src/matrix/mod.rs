//! Dense matrices for the ranking pipeline
//!
//! Link networks here are small and the damped matrix is dense by
//! construction (every entry gets the teleport share), so a flat row-major
//! buffer is the natural representation.
//!
//! ## Submodules
//!
//! - [`adjacency`] — network to 0/1 adjacency matrix, dangling checks
//! - [`hyperlink`] — column-normalized transition matrix
//! - [`damping`] — teleportation blend

pub mod adjacency;
pub mod damping;
pub mod hyperlink;

use crate::errors::{LinkRankError, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Matrix–vector products switch to parallel row evaluation at this size.
/// Each output row is still summed sequentially, so results do not depend on
/// thread scheduling.
pub const PARALLEL_ROW_THRESHOLD: usize = 256;

/// A dense, row-major matrix of `f64`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDenseMatrix")]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Wire shape of [`DenseMatrix`], checked before it becomes one
#[derive(Deserialize)]
struct RawDenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawDenseMatrix> for DenseMatrix {
    type Error = LinkRankError;

    fn try_from(raw: RawDenseMatrix) -> Result<Self> {
        match raw.rows.checked_mul(raw.cols) {
            Some(len) if len == raw.data.len() => Ok(Self {
                rows: raw.rows,
                cols: raw.cols,
                data: raw.data,
            }),
            _ => Err(LinkRankError::invalid_config(format!(
                "{}x{} matrix needs {} entries, got {}",
                raw.rows,
                raw.cols,
                raw.rows.saturating_mul(raw.cols),
                raw.data.len()
            ))),
        }
    }
}

impl DenseMatrix {
    /// Create a `rows × cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Create a `rows × cols` matrix with every entry set to `value`
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build a matrix from nested rows; all rows must have the same length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(LinkRankError::invalid_config(format!(
                    "matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        self.data[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Error unless the matrix is square with at least one row
    pub(crate) fn ensure_square(&self, what: &str) -> Result<()> {
        if !self.is_square() || self.rows == 0 {
            return Err(LinkRankError::invalid_config(format!(
                "{} must be square and non-empty, got {}x{}",
                what, self.rows, self.cols
            )));
        }
        Ok(())
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Sum of column `col`
    pub fn column_sum(&self, col: usize) -> f64 {
        (0..self.rows).map(|r| self.get(r, col)).sum()
    }

    /// Sum of every column
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for row in self.data.chunks_exact(self.cols.max(1)) {
            for (sum, &value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        sums
    }

    /// Copy into nested rows, for display layers
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Entrywise `self * factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * factor).collect(),
        }
    }

    /// Compute `out = self · vector`.
    ///
    /// `vector` must have `cols` entries and `out` must have `rows` entries.
    pub fn mul_vec_into(&self, vector: &[f64], out: &mut [f64]) {
        debug_assert_eq!(vector.len(), self.cols);
        debug_assert_eq!(out.len(), self.rows);

        let dot = |row: &[f64]| -> f64 { row.iter().zip(vector).map(|(m, v)| m * v).sum() };

        if self.rows >= PARALLEL_ROW_THRESHOLD {
            out.par_iter_mut()
                .zip(self.data.par_chunks_exact(self.cols.max(1)))
                .for_each(|(slot, row)| *slot = dot(row));
        } else {
            for (slot, row) in out.iter_mut().zip(self.data.chunks_exact(self.cols.max(1))) {
                *slot = dot(row);
            }
        }
    }

    /// Compute `self · vector` into a new vector
    pub fn mul_vec(&self, vector: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.rows];
        self.mul_vec_into(vector, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_access() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert!(m.is_square());
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_column_sums() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.column_sums(), vec![4.0, 6.0]);
        assert_eq!(m.column_sum(1), 6.0);
    }

    #[test]
    fn test_scaled() {
        let a = DenseMatrix::filled(2, 2, 1.0);
        assert_eq!(a.scaled(0.5), DenseMatrix::filled(2, 2, 0.5));
    }

    #[test]
    fn test_deserialize_checks_entry_count() {
        let json = r#"{"rows":1,"cols":2,"data":[0.5,0.5]}"#;
        let m: DenseMatrix = serde_json::from_str(json).unwrap();
        assert_eq!(m.row(0), &[0.5, 0.5]);

        let short = serde_json::from_str::<DenseMatrix>(r#"{"rows":2,"cols":2,"data":[1.0]}"#);
        assert!(short.is_err());

        let long = serde_json::from_str::<DenseMatrix>(r#"{"rows":1,"cols":1,"data":[1.0,2.0]}"#);
        assert!(long.is_err());
    }

    #[test]
    fn test_mul_vec() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.mul_vec(&[1.0, 1.0]), vec![3.0, 7.0]);
    }

    #[test]
    fn test_parallel_mul_vec_matches_sequential() {
        let n = PARALLEL_ROW_THRESHOLD + 3;
        let mut m = DenseMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                m.set(i, j, ((i * 31 + j * 7) % 13) as f64 / 13.0);
            }
        }
        let v: Vec<f64> = (0..n).map(|i| (i % 5) as f64).collect();

        let parallel = m.mul_vec(&v);
        for (i, &value) in parallel.iter().enumerate() {
            let expected: f64 = m.row(i).iter().zip(&v).map(|(a, b)| a * b).sum();
            assert_eq!(value, expected);
        }
    }
}
