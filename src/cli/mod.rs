// src/cli/mod.rs

//! Command-line driver for the `sparse-matrix` binary.
//!
//! # Commands
//!
//! - `apply <op> <lhs> <rhs>`: combine two matrix files
//! - `interactive`: choose files and an operation from prompts
//! - `inspect <file>`: print dimensions and density of a matrix file

pub mod directory_location;
pub mod error;
pub mod interactive;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;

use crate::config::MatrixConfig;
use crate::core::command::{apply_operation_with, load_matrix_file, render_matrix, save_matrix_file};
use crate::core::storage::{FileStorage, TextStorage};
use crate::matrix::Operation;

pub use error::CliError;

/// Sparse matrix operations on `rows=/cols=/(row, col, value)` text files
#[derive(Parser, Debug)]
#[command(name = "sparse-matrix")]
#[command(version)]
#[command(about = "Add, subtract and multiply sparse integer matrices")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./sparse_matrix.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply an operation to two matrix files
    Apply(ApplyArgs),
    /// Pick matrix files and an operation interactively
    Interactive(InteractiveArgs),
    /// Show dimensions and density of a matrix file
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// add, subtract or multiply
    pub operation: Operation,

    /// Left operand file
    pub lhs: PathBuf,

    /// Right operand file
    pub rhs: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Directory to list matrix files from (skips the prompt)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Matrix file
    pub file: PathBuf,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Also list every stored entry
    #[arg(long)]
    pub entries: bool,
}

/// Dispatches a parsed command against the filesystem and stdio
pub fn run(command: Commands, config: &MatrixConfig) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Commands::Apply(args) => handle_apply(&args, config, &FileStorage, &mut out).map(|_| ()),
        Commands::Interactive(args) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            interactive::run(&mut input, &mut out, &FileStorage, config, args.dir.as_deref())
                .map(|_| ())
        }
        Commands::Inspect(args) => handle_inspect(&args, &FileStorage, &mut out),
    }
}

/// Loads both operands, applies the operation and writes the result to
/// `args.output` (creating its directory) or to `out`
///
/// Returns the result's non-zero count.
pub fn handle_apply<S, W>(
    args: &ApplyArgs,
    config: &MatrixConfig,
    storage: &S,
    out: &mut W,
) -> Result<usize, CliError>
where
    S: TextStorage + ?Sized,
    W: Write,
{
    let lhs = load_matrix_file(storage, &args.lhs)?;
    let rhs = load_matrix_file(storage, &args.rhs)?;

    let result = apply_operation_with(args.operation, &lhs, &rhs, &config.compute)?;
    info!(
        "{} produced a {}x{} matrix with {} non-zero entries",
        args.operation,
        result.num_rows(),
        result.num_cols(),
        result.nnz()
    );

    match &args.output {
        Some(path) => {
            directory_location::ensure_parent_dir(path)?;
            save_matrix_file(storage, path, &result)?;
        }
        None => write!(out, "{}", render_matrix(&result))?,
    }
    Ok(result.nnz())
}

pub fn handle_inspect<S, W>(args: &InspectArgs, storage: &S, out: &mut W) -> Result<(), CliError>
where
    S: TextStorage + ?Sized,
    W: Write,
{
    let matrix = load_matrix_file(storage, &args.file)?;
    let stats = matrix.stats();

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        writeln!(out, "File: {}", args.file.display())?;
        writeln!(out, "Dimension: {} x {}", stats.rows, stats.cols)?;
        writeln!(out, "Non-zero entries: {}", stats.nnz)?;
        writeln!(out, "Density: {:.6}%", stats.density * 100.0)?;
    }

    if args.entries {
        write!(out, "{}", matrix)?;
    }
    Ok(())
}
