// src/lib.rs

pub mod cli;
pub mod codec;
pub mod config;
pub mod core;
pub mod error;
pub mod matrix;

pub use codec::MatrixCodec;
pub use error::{Error, Result};
pub use matrix::{Coordinate, Operation, SparseMatrix};
