//! Sparse integer matrix
//!
//! Matrices read from the text format are typically well over 99% zero, so only
//! non-zero entries are stored. Storage is a `BTreeMap` keyed by [`Coordinate`],
//! which gives:
//!
//! - **Density-proportional cost**: iteration, addition and subtraction only touch
//!   stored entries, never `rows * cols` cells
//! - **Row access**: the row-major key order lets multiplication pull a single row
//!   of the right operand with one range query
//! - **Deterministic output**: entries always iterate sorted by row, then column
//!
//! # Performance Characteristics
//!
//! - `get()`: O(log nnz)
//! - `insert()`: O(log nnz)
//! - `row_entries()`: O(log nnz + k) where k = non-zero entries in the row
//!
//! # Invariants
//!
//! Every stored coordinate lies inside the dimensions, and no stored value is
//! zero. [`SparseMatrix::insert`] is the only way entries change, and it upholds
//! both.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::coordinate::Coordinate;
use crate::error::{Error, Result};

/// Sparse matrix of signed integers that stores only non-zero entries
///
/// # Examples
///
/// ```
/// use sparse_matrix::matrix::SparseMatrix;
///
/// let mut matrix = SparseMatrix::new(100, 100).unwrap();
/// matrix.insert(0, 0, 7).unwrap();
/// matrix.insert(0, 50, -2).unwrap();
/// assert_eq!(matrix.get(0, 0), 7);
/// assert_eq!(matrix.get(0, 1), 0); // Unset entries are implicitly zero
/// assert_eq!(matrix.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    /// Non-zero entries only, ordered row-major
    entries: BTreeMap<Coordinate, i64>,

    num_rows: usize,

    num_cols: usize,
}

/// Summary of a matrix's shape and density
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixStats {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    pub density: f64,
    pub sparsity_percentage: f64,
}

impl SparseMatrix {
    /// Creates an empty sparse matrix with the specified dimensions
    ///
    /// # Arguments
    ///
    /// * `num_rows` - Number of rows, must be positive
    /// * `num_cols` - Number of columns, must be positive
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimensions` if either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(Error::InvalidDimensions {
                rows: num_rows,
                cols: num_cols,
            });
        }

        Ok(SparseMatrix {
            entries: BTreeMap::new(),
            num_rows,
            num_cols,
        })
    }

    /// Builds a matrix from `(row, col, value)` triples, routing each through
    /// [`insert`](Self::insert)
    ///
    /// Later triples overwrite earlier ones at the same coordinate.
    pub fn from_triples<I>(num_rows: usize, num_cols: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = SparseMatrix::new(num_rows, num_cols)?;
        for (row, col, value) in triples {
            matrix.insert(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Gets the value at the specified position
    ///
    /// Returns the stored value, or 0 when nothing is stored. Out-of-range
    /// coordinates are not an error here; they simply read as 0.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries
            .get(&Coordinate::new(row, col))
            .copied()
            .unwrap_or(0)
    }

    /// Sets the value at the specified position
    ///
    /// A non-zero `value` is stored (overwriting any previous value). Zero removes
    /// the entry instead, so the map never holds a zero.
    ///
    /// # Arguments
    ///
    /// * `row` - Row index, must be `< num_rows`
    /// * `col` - Column index, must be `< num_cols`
    /// * `value` - Value to store
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if the coordinate lies outside the matrix.
    /// The matrix is left unchanged in that case.
    pub fn insert(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(Error::OutOfBounds {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }

        let key = Coordinate::new(row, col);
        if value != 0 {
            self.entries.insert(key, value);
        } else {
            self.entries.remove(&key);
        }
        Ok(())
    }

    /// Returns true if a non-zero value is stored at the coordinate
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Iterates all stored entries in row-major order
    pub fn entries(&self) -> impl Iterator<Item = (Coordinate, i64)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Iterates the stored `(col, value)` pairs of one row
    ///
    /// # Performance
    ///
    /// O(log nnz + k) where k = non-zero entries in the row
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.entries
            .range(Coordinate::row_start(row)..=Coordinate::row_end(row))
            .map(|(coord, &value)| (coord.col, value))
    }

    /// Indices of rows holding at least one non-zero entry, ascending
    pub fn nonzero_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.entries.keys().map(|coord| coord.row).collect();
        rows.dedup();
        rows
    }

    /// Number of non-zero entries in the whole matrix
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Number of non-zero entries in a specific row
    pub fn row_nonzero_count(&self, row: usize) -> usize {
        self.row_entries(row).count()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ratio of stored entries to `rows * cols`, between 0.0 and 1.0
    pub fn density(&self) -> f64 {
        self.nnz() as f64 / (self.num_rows as f64 * self.num_cols as f64)
    }

    /// Percentage of entries that are zero (not stored), between 0.0 and 100.0
    pub fn sparsity_percentage(&self) -> f64 {
        (1.0 - self.density()) * 100.0
    }

    pub fn stats(&self) -> MatrixStats {
        MatrixStats {
            rows: self.num_rows,
            cols: self.num_cols,
            nnz: self.nnz(),
            density: self.density(),
            sparsity_percentage: self.sparsity_percentage(),
        }
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimension: {} x {}", self.num_rows, self.num_cols)?;
        writeln!(f, "Sparse Matrix: Row Column Value")?;
        for (coord, value) in self.entries() {
            writeln!(f, "{} {} {}", coord.row, coord.col, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_creation() {
        let matrix = SparseMatrix::new(100, 100).unwrap();
        assert_eq!(matrix.num_rows(), 100);
        assert_eq!(matrix.num_cols(), 100);
        assert_eq!(matrix.nnz(), 0);

        // All entries should be implicitly zero
        for i in 0..100 {
            for j in 0..100 {
                assert_eq!(matrix.get(i, j), 0);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            SparseMatrix::new(0, 5),
            Err(Error::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            SparseMatrix::new(5, 0),
            Err(Error::InvalidDimensions { rows: 5, cols: 0 })
        ));
    }

    #[test]
    fn test_insert_and_get() {
        let mut matrix = SparseMatrix::new(10, 10).unwrap();

        matrix.insert(0, 0, 4).unwrap();
        matrix.insert(5, 7, -9).unwrap();
        matrix.insert(9, 9, 1).unwrap();

        assert_eq!(matrix.get(0, 0), 4);
        assert_eq!(matrix.get(5, 7), -9);
        assert_eq!(matrix.get(9, 9), 1);
        assert_eq!(matrix.get(0, 1), 0);

        // Overwrite
        matrix.insert(5, 7, 3).unwrap();
        assert_eq!(matrix.get(5, 7), 3);
        assert_eq!(matrix.nnz(), 3);
    }

    #[test]
    fn test_insert_zero_removes_entry() {
        let mut matrix = SparseMatrix::new(4, 4).unwrap();
        matrix.insert(2, 3, 8).unwrap();
        assert_eq!(matrix.nnz(), 1);

        matrix.insert(2, 3, 0).unwrap();
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(2, 3), 0);

        // Removing an absent entry is a no-op
        matrix.insert(1, 1, 0).unwrap();
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_insert_out_of_bounds_leaves_matrix_unchanged() {
        let mut matrix = SparseMatrix::new(3, 3).unwrap();
        matrix.insert(1, 1, 2).unwrap();
        let before = matrix.clone();

        let err = matrix.insert(5, 5, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfBounds { row: 5, col: 5, rows: 3, cols: 3 }
        ));
        assert!(matrix.insert(3, 0, 1).is_err());
        assert!(matrix.insert(0, 3, 1).is_err());
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_get_out_of_range_reads_zero() {
        let mut matrix = SparseMatrix::new(2, 2).unwrap();
        matrix.insert(1, 1, 5).unwrap();
        assert_eq!(matrix.get(10, 10), 0);
        assert_eq!(matrix.get(1, 2), 0);
    }

    #[test]
    fn test_row_entries() {
        let matrix =
            SparseMatrix::from_triples(3, 5, vec![(0, 4, 1), (1, 3, 2), (1, 0, 3), (2, 2, 4)])
                .unwrap();

        let row: Vec<(usize, i64)> = matrix.row_entries(1).collect();
        assert_eq!(row, vec![(0, 3), (3, 2)]);
        assert_eq!(matrix.row_nonzero_count(1), 2);
        assert_eq!(matrix.row_nonzero_count(0), 1);
        assert_eq!(matrix.nonzero_rows(), vec![0, 1, 2]);
    }

    #[test]
    fn test_entries_are_row_major() {
        let matrix =
            SparseMatrix::from_triples(3, 3, vec![(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 4)])
                .unwrap();

        let coords: Vec<(usize, usize)> =
            matrix.entries().map(|(c, _)| (c.row, c.col)).collect();
        assert_eq!(coords, vec![(0, 1), (0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_sparsity_metrics() {
        let mut matrix = SparseMatrix::new(100, 100).unwrap();

        // Initially 100% sparse (0 entries)
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_zero());
        assert_eq!(matrix.sparsity_percentage(), 100.0);

        // Add 10 entries (0.1% density, 99.9% sparsity)
        for i in 0..10 {
            matrix.insert(i, i, 1).unwrap();
        }

        assert_eq!(matrix.nnz(), 10);
        assert!((matrix.density() - 0.001).abs() < 1e-12);
        assert!((matrix.sparsity_percentage() - 99.9).abs() < 1e-9);

        let stats = matrix.stats();
        assert_eq!(stats.rows, 100);
        assert_eq!(stats.nnz, 10);
    }

    #[test]
    fn test_display() {
        let matrix = SparseMatrix::from_triples(2, 3, vec![(1, 2, -4), (0, 0, 1)]).unwrap();
        assert_eq!(
            matrix.to_string(),
            "Dimension: 2 x 3\nSparse Matrix: Row Column Value\n0 0 1\n1 2 -4\n"
        );
    }
}
