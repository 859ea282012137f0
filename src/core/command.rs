// src/core/command.rs

//! Entry points consumed by drivers.
//!
//! `load_matrix`, `apply_operation` and `render_matrix` are the whole command
//! surface; the file helpers below only pair them with a [`TextStorage`].

use std::path::Path;

use log::{debug, info};

use crate::codec::MatrixCodec;
use crate::config::ComputeConfig;
use crate::core::storage::TextStorage;
use crate::error::Result;
use crate::matrix::{Operation, SparseMatrix};

/// Parses matrix text
pub fn load_matrix(text: &str) -> Result<SparseMatrix> {
    MatrixCodec::parse(text)
}

/// Applies `op` to `a` and `b`, returning a new matrix
pub fn apply_operation(op: Operation, a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    op.apply(a, b)
}

/// Renders a matrix in the text format
pub fn render_matrix(matrix: &SparseMatrix) -> String {
    MatrixCodec::serialize(matrix)
}

/// Like [`apply_operation`], but multiplication runs row-parallel when `compute`
/// allows it for the size of `a`
pub fn apply_operation_with(
    op: Operation,
    a: &SparseMatrix,
    b: &SparseMatrix,
    compute: &ComputeConfig,
) -> Result<SparseMatrix> {
    if op == Operation::Multiply && compute.use_parallel(a.nnz()) {
        debug!("Using parallel multiplication ({} left-operand entries)", a.nnz());
        return a.par_multiply(b);
    }
    apply_operation(op, a, b)
}

/// Reads and parses a matrix file
pub fn load_matrix_file<S: TextStorage + ?Sized>(storage: &S, path: &Path) -> Result<SparseMatrix> {
    let text = storage.read_all_text(path)?;
    let matrix = load_matrix(&text)?;
    info!(
        "Loaded {}x{} matrix with {} non-zero entries from {}",
        matrix.num_rows(),
        matrix.num_cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Renders and writes a matrix file
pub fn save_matrix_file<S: TextStorage + ?Sized>(
    storage: &S,
    path: &Path,
    matrix: &SparseMatrix,
) -> Result<()> {
    storage.write_all_text(path, &render_matrix(matrix))?;
    info!("Results saved to {}", path.display());
    Ok(())
}
