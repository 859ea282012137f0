// src/cli/error.rs

use std::path::PathBuf;
use thiserror::Error;

use crate::error::Error;

/// Errors surfaced by the command-line driver
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Matrix(#[from] Error),

    #[error("No matrix files found in {}", .0.display())]
    NoMatrixFiles(PathBuf),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Could not list matrix files: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Could not encode statistics: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 for bad user input, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidSelection(_) | CliError::EndOfInput => 2,
            CliError::Matrix(Error::Format { .. }) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidSelection("7".to_string()).exit_code(), 2);
        assert_eq!(CliError::EndOfInput.exit_code(), 2);
        assert_eq!(
            CliError::Matrix(Error::Format { line: 3, message: "bad".to_string() }).exit_code(),
            2
        );
        assert_eq!(
            CliError::Matrix(Error::InvalidDimensions { rows: 0, cols: 1 }).exit_code(),
            1
        );
        assert_eq!(CliError::NoMatrixFiles(PathBuf::from("x")).exit_code(), 1);
    }

    #[test]
    fn test_matrix_error_is_transparent() {
        let err = CliError::from(Error::InvalidDimensions { rows: 0, cols: 2 });
        assert_eq!(err.to_string(), "Invalid matrix dimensions: 0x2");
    }
}
