// src/matrix/mod.rs

pub mod coordinate;
pub mod operations;
pub mod sparse_matrix;

// Re-export main types for convenience
pub use coordinate::Coordinate;
pub use operations::{Operation, ParseOperationError};
pub use sparse_matrix::{MatrixStats, SparseMatrix};
