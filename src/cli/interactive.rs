// src/cli/interactive.rs

//! Prompt-driven flow: pick a directory, two matrix files, an operation and an
//! output path. Input and output are generic so the flow can be driven from tests.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::directory_location::{default_output_path, display_name, ensure_parent_dir, list_matrix_files};
use super::error::CliError;
use crate::config::MatrixConfig;
use crate::core::command::{apply_operation_with, load_matrix_file, save_matrix_file};
use crate::core::storage::TextStorage;
use crate::matrix::Operation;

/// Runs one interactive session and returns the path the result was written to
///
/// When `dir` is `None` the user is asked for a directory; an empty answer falls
/// back to `config.input_dir`.
pub fn run<R, W, S>(
    input: &mut R,
    output: &mut W,
    storage: &S,
    config: &MatrixConfig,
    dir: Option<&Path>,
) -> Result<PathBuf, CliError>
where
    R: BufRead,
    W: Write,
    S: TextStorage + ?Sized,
{
    writeln!(output, "\n.................... Sparse Matrix Operations ................\n")?;

    let input_dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let answer = prompt(
                input,
                output,
                &format!(
                    "Enter the path of the directory containing matrix files [{}]: ",
                    config.input_dir
                ),
            )?;
            if answer.is_empty() {
                PathBuf::from(&config.input_dir)
            } else {
                PathBuf::from(answer)
            }
        }
    };

    let files = list_matrix_files(&input_dir)?;
    if files.is_empty() {
        return Err(CliError::NoMatrixFiles(input_dir));
    }

    writeln!(output, "\nAvailable matrix files:")?;
    for (index, file) in files.iter().enumerate() {
        writeln!(output, "{}: {}", index + 1, display_name(file))?;
    }

    let first = select_file(&files, &prompt(input, output, "\nSelect the first file (enter the number): ")?)?;
    let second = select_file(&files, &prompt(input, output, "Select the second file (enter the number): ")?)?;

    let lhs = load_matrix_file(storage, first)?;
    let rhs = load_matrix_file(storage, second)?;

    writeln!(output, "Choose an operation:\n")?;
    writeln!(output, "1. Add Matrices")?;
    writeln!(output, "2. Subtract Matrices")?;
    writeln!(output, "3. Multiply Matrices\n")?;
    let choice = prompt(input, output, "Enter your choice: ")?;
    let op: Operation = choice
        .parse()
        .map_err(|_| CliError::InvalidSelection(format!("'{}' is not a menu option", choice)))?;

    let answer = prompt(input, output, "Enter the output file path (blank for default): ")?;
    let output_path = if answer.is_empty() {
        default_output_path(&config.output_dir, op)
    } else {
        PathBuf::from(answer)
    };

    info!(
        "{} {} and {}",
        op,
        display_name(first),
        display_name(second)
    );
    let result = apply_operation_with(op, &lhs, &rhs, &config.compute)?;

    ensure_parent_dir(&output_path)?;
    save_matrix_file(storage, &output_path, &result)?;
    writeln!(output, "Results saved to {}", output_path.display())?;

    Ok(output_path)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, query: &str) -> Result<String, CliError> {
    write!(output, "{}", query)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

/// Maps a 1-based menu answer onto the file list
fn select_file<'a>(files: &'a [PathBuf], answer: &str) -> Result<&'a Path, CliError> {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| files.get(index))
        .map(PathBuf::as_path)
        .ok_or_else(|| {
            CliError::InvalidSelection(format!(
                "'{}' is not between 1 and {}",
                answer,
                files.len()
            ))
        })
}
