// src/core/mod.rs

pub mod command;
pub mod storage;

pub use command::{apply_operation, load_matrix, render_matrix};
pub use storage::{FileStorage, TextStorage};
