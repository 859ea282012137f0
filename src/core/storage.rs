// src/core/storage.rs

//! Whole-buffer text storage used to load and save matrix files.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads and writes whole text files
///
/// Failures come back as `Error::Io` carrying the path; nothing here retries.
pub trait TextStorage {
    fn read_all_text(&self, path: &Path) -> Result<String>;

    fn write_all_text(&self, path: &Path, text: &str) -> Result<()>;
}

/// [`TextStorage`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl TextStorage for FileStorage {
    fn read_all_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_all_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
