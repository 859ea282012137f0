// src/config/mod.rs

pub mod matrix_config;

// Re-export main types for convenience
pub use matrix_config::{ComputeConfig, MatrixConfig};
