// src/cli/directory_location.rs

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, info};

use super::error::CliError;
use crate::error::Error;
use crate::matrix::Operation;

const MATRIX_FILE_PATTERN: &str = "*.txt";

/// Lists the `*.txt` files directly inside `dir`, sorted by path
pub fn list_matrix_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/{}", escaped, MATRIX_FILE_PATTERN);
    debug!("Listing matrix files matching {}", pattern);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Creates the parent directory of `path` if it is missing
///
/// Returns true when a directory was created.
pub fn ensure_parent_dir(path: &Path) -> Result<bool, CliError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(false),
    };
    if directory.exists() {
        return Ok(false);
    }

    fs::create_dir_all(directory).map_err(|source| Error::Io {
        path: directory.to_path_buf(),
        source,
    })?;
    info!("Directory \"{}\" did not exist, so it was created.", directory.display());
    Ok(true)
}

/// Timestamped result path under `output_dir`, e.g. `multiply_result_20240101_120000.txt`
pub fn default_output_path(output_dir: &str, op: Operation) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    Path::new(output_dir).join(format!("{}_result_{}.txt", op, timestamp))
}

/// Final path component for display in menus
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
