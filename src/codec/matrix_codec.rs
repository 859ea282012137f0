// src/codec/matrix_codec.rs

//! Text encoding for sparse matrices.
//!
//! ```text
//! rows=<positive integer>
//! cols=<positive integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Blank lines are ignored anywhere. Parsing is strict: the first malformed line
//! aborts the whole parse and no matrix is returned.

use log::debug;

use super::integer_token::{parse_signed, parse_unsigned, TokenError};
use crate::error::{Error, Result};
use crate::matrix::SparseMatrix;

pub struct MatrixCodec;

impl MatrixCodec {
    /// Parses matrix text into a [`SparseMatrix`]
    ///
    /// Every data triple goes through [`SparseMatrix::insert`], so explicit zero
    /// values store nothing and coordinates outside the declared dimensions fail.
    ///
    /// # Errors
    ///
    /// `Error::Format` with the 1-based line number when a header is missing,
    /// malformed or non-positive, or when a data line is malformed or out of
    /// bounds.
    pub fn parse(text: &str) -> Result<SparseMatrix> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let rows = match lines.next() {
            Some((line_no, line)) => parse_header(line_no, line, "rows")?,
            None => return Err(Error::format(0, "missing 'rows=<integer>' header")),
        };
        let cols = match lines.next() {
            Some((line_no, line)) => parse_header(line_no, line, "cols")?,
            None => return Err(Error::format(0, "missing 'cols=<integer>' header")),
        };

        let mut matrix = SparseMatrix::new(rows, cols)?;
        for (line_no, line) in lines {
            let (row, col, value) = parse_entry(line_no, line)?;
            matrix
                .insert(row, col, value)
                .map_err(|e| Error::format(line_no, format!("{} in '{}'", e, line.trim())))?;
        }

        debug!(
            "Parsed {}x{} matrix with {} non-zero entries",
            rows,
            cols,
            matrix.nnz()
        );
        Ok(matrix)
    }

    /// Renders a matrix in the text format, entries sorted by row then column
    pub fn serialize(matrix: &SparseMatrix) -> String {
        let mut result = String::new();
        result.push_str(&format!("rows={}\n", matrix.num_rows()));
        result.push_str(&format!("cols={}\n", matrix.num_cols()));
        for (coord, value) in matrix.entries() {
            result.push_str(&format!("({}, {}, {})\n", coord.row, coord.col, value));
        }
        result
    }
}

/// `rows=<n>` / `cols=<n>`; whitespace is allowed around the line and the value,
/// never between the key and `=`
fn parse_header(line_no: usize, line: &str, key: &str) -> Result<usize> {
    let trimmed = line.trim();
    let expected = || {
        Error::format(
            line_no,
            format!("expected '{}=<integer>', found '{}'", key, trimmed),
        )
    };

    let (name, value) = trimmed.split_once('=').ok_or_else(expected)?;
    if name != key {
        return Err(expected());
    }

    let value = parse_unsigned(value.trim())
        .map_err(|e| Error::format(line_no, format!("invalid {} value: {}", key, e)))?;
    if value == 0 {
        return Err(Error::format(
            line_no,
            format!("{} must be a positive integer", key),
        ));
    }
    Ok(value)
}

/// `(<row>,<sp>?<col>,<sp>?<value><sp>?)`
///
/// Whitespace may only follow a comma or precede the closing `)`.
fn parse_entry(line_no: usize, line: &str) -> Result<(usize, usize, i64)> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            Error::format(
                line_no,
                format!("expected '(<row>, <col>, <value>)', found '{}'", trimmed),
            )
        })?;

    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::format(
            line_no,
            format!("expected 3 comma-separated values, found {} in '{}'", parts.len(), trimmed),
        ));
    }

    let invalid = |e: TokenError| Error::format(line_no, format!("{} in '{}'", e, trimmed));
    let row = parse_unsigned(parts[0]).map_err(invalid)?;
    let col = parse_unsigned(parts[1].trim_start()).map_err(invalid)?;
    let value = parse_signed(parts[2].trim()).map_err(invalid)?;
    Ok((row, col, value))
}
