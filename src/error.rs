// src/error.rs

//! Error types for the sparse matrix toolkit

use std::path::PathBuf;
use thiserror::Error;

use crate::matrix::operations::Operation;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing, building or combining matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed header or data line in the matrix text format
    #[error("Format error on line {line}: {message}")]
    Format {
        /// 1-based line number of the offending line (0 when the input ended early)
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Coordinate outside the matrix dimensions
    #[error("Invalid matrix position: ({row}, {col}). Matrix dimensions are {rows}x{cols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Cannot {op} matrices of shape {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        op: Operation,
        /// (rows, cols) of the left operand
        lhs: (usize, usize),
        /// (rows, cols) of the right operand
        rhs: (usize, usize),
    },

    /// Matrix dimensions must both be positive
    #[error("Invalid matrix dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A sum or product left the i64 range
    #[error("Integer overflow during {op} at ({row}, {col})")]
    Overflow { op: Operation, row: usize, col: usize },

    /// Storage failure, propagated unchanged
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Error::Format {
            line,
            message: message.into(),
        }
    }
}
