// src/matrix/operations.rs

//! Addition, subtraction and multiplication over the sparse representation.
//!
//! Every operation reads its operands, writes into a freshly created result and
//! routes each value through [`SparseMatrix::insert`], so results never carry
//! stored zeros. Nothing here ever walks `rows * cols` cells.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use super::sparse_matrix::SparseMatrix;
use crate::error::{Error, Result};

/// The three algebraic operations a driver can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operation '{0}'. Please use add, subtract, or multiply")]
pub struct ParseOperationError(pub String);

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Menu number used by the interactive driver
    pub fn menu_index(&self) -> usize {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    pub fn apply(&self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "1" => Ok(Operation::Add),
            "subtract" | "2" => Ok(Operation::Subtract),
            "multiply" | "3" => Ok(Operation::Multiply),
            _ => Err(ParseOperationError(s.trim().to_string())),
        }
    }
}

impl SparseMatrix {
    /// Entrywise sum; both matrices must have the same shape
    ///
    /// # Performance
    ///
    /// O((nnz(self) + nnz(other)) * log nnz)
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine_entrywise(other, Operation::Add, i64::checked_add)
    }

    /// Entrywise difference `self - other`; both matrices must have the same shape
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine_entrywise(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.num_cols() == other.num_rows()`; the result is
    /// `self.num_rows() x other.num_cols()`.
    ///
    /// # Algorithm
    ///
    /// For each stored `(r, k, v)` of `self`, walk the stored `(k, j, w)` of row `k`
    /// in `other` and accumulate `v * w` into `(r, j)`. Work is proportional to the
    /// number of matched non-zero pairs rather than `rows * cols * inner`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.check_multiply_shape(other)?;

        let mut result = SparseMatrix::new(self.num_rows(), other.num_cols())?;
        for row in self.nonzero_rows() {
            for (col, value) in self.multiply_row(row, other)? {
                result.insert(row, col, value)?;
            }
        }

        debug!(
            "multiply {:?} * {:?} -> {:?} with {} non-zero entries",
            self.shape(),
            other.shape(),
            result.shape(),
            result.nnz()
        );
        Ok(result)
    }

    /// Same result as [`multiply`](Self::multiply), with output rows computed on
    /// the rayon thread pool
    ///
    /// Operands are only read, so each row is independent; the finished rows are
    /// inserted into the result on the calling thread.
    pub fn par_multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.check_multiply_shape(other)?;

        let rows = self.nonzero_rows();
        let products: Vec<(usize, BTreeMap<usize, i64>)> = rows
            .par_iter()
            .map(|&row| self.multiply_row(row, other).map(|acc| (row, acc)))
            .collect::<Result<Vec<_>>>()?;

        let mut result = SparseMatrix::new(self.num_rows(), other.num_cols())?;
        for (row, acc) in products {
            for (col, value) in acc {
                result.insert(row, col, value)?;
            }
        }

        debug!(
            "par_multiply {:?} * {:?} over {} rows on {} threads -> {} non-zero entries",
            self.shape(),
            other.shape(),
            rows.len(),
            rayon::current_num_threads(),
            result.nnz()
        );
        Ok(result)
    }

    fn check_multiply_shape(&self, other: &SparseMatrix) -> Result<()> {
        if self.num_cols() != other.num_rows() {
            return Err(Error::DimensionMismatch {
                op: Operation::Multiply,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Accumulates one output row: column -> sum of products
    ///
    /// Accumulated zeros are left in the map; `insert` drops them.
    fn multiply_row(&self, row: usize, other: &SparseMatrix) -> Result<BTreeMap<usize, i64>> {
        let overflow = |col| Error::Overflow {
            op: Operation::Multiply,
            row,
            col,
        };

        let mut acc: BTreeMap<usize, i64> = BTreeMap::new();
        for (k, v) in self.row_entries(row) {
            for (col, w) in other.row_entries(k) {
                let product = v.checked_mul(w).ok_or_else(|| overflow(col))?;
                let slot = acc.entry(col).or_insert(0);
                *slot = slot.checked_add(product).ok_or_else(|| overflow(col))?;
            }
        }
        Ok(acc)
    }

    /// Shared walk for add/subtract over the union of both entry maps
    fn combine_entrywise<F>(&self, other: &SparseMatrix, op: Operation, f: F) -> Result<SparseMatrix>
    where
        F: Fn(i64, i64) -> Option<i64>,
    {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut result = SparseMatrix::new(self.num_rows(), self.num_cols())?;

        for (coord, value) in self.entries() {
            let combined = f(value, other.get(coord.row, coord.col)).ok_or(Error::Overflow {
                op,
                row: coord.row,
                col: coord.col,
            })?;
            result.insert(coord.row, coord.col, combined)?;
        }

        // Coordinates only present in `other`
        for (coord, value) in other.entries().filter(|(coord, _)| !self.contains(*coord)) {
            let combined = f(0, value).ok_or(Error::Overflow {
                op,
                row: coord.row,
                col: coord.col,
            })?;
            result.insert(coord.row, coord.col, combined)?;
        }

        debug!(
            "{} {:?}: {} + {} operand entries -> {} non-zero entries",
            op,
            self.shape(),
            self.nnz(),
            other.nnz(),
            result.nnz()
        );
        Ok(result)
    }
}
