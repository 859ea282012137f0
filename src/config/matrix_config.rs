// src/config/matrix_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Directory the interactive driver lists matrix files from
    pub input_dir: String,

    /// Directory for result files when no output path is given
    pub output_dir: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Number of threads for parallel multiplication
    pub threads: Option<usize>,

    /// Compute tuning
    pub compute: ComputeConfig,
}

/// Controls when multiplication is sharded across the rayon pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeConfig {
    /// Allow row-parallel multiplication
    pub parallel_multiply: bool,

    /// Minimum non-zero entries in the left operand before going parallel (default: 4096)
    pub parallel_threshold: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            input_dir: "sample_inputs".to_string(),
            output_dir: "sample_outputs".to_string(),
            log_level: "info".to_string(),
            threads: None, // Use Rayon's default
            compute: ComputeConfig::default(),
        }
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        ComputeConfig {
            parallel_multiply: true,
            parallel_threshold: 4096,
        }
    }
}

impl ComputeConfig {
    /// True when a multiplication with this many left-operand entries should run in parallel
    pub fn use_parallel(&self, lhs_nnz: usize) -> bool {
        self.parallel_multiply && lhs_nnz >= self.parallel_threshold
    }
}

impl MatrixConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("sparse_matrix.toml").exists() {
            builder = builder.add_source(File::with_name("sparse_matrix.toml"));
        } else if Path::new("sparse_matrix.yaml").exists() {
            builder = builder.add_source(File::with_name("sparse_matrix.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        } else {
            return Err(ConfigError::NotFound(path.as_ref().display().to_string()));
        }

        Self::finish(builder)
    }

    /// Effective rayon pool size
    pub fn effective_threads(&self) -> usize {
        self.threads.filter(|&t| t > 0).unwrap_or_else(num_cpus::get)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = MatrixConfig::default();
        Config::builder()
            .set_default("input_dir", defaults.input_dir)?
            .set_default("output_dir", defaults.output_dir)?
            .set_default("log_level", defaults.log_level)?
            .set_default("compute.parallel_multiply", defaults.compute.parallel_multiply)?
            .set_default("compute.parallel_threshold", defaults.compute.parallel_threshold as i64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. SPARSE_MATRIX__COMPUTE__PARALLEL_THRESHOLD
        let builder = builder.add_source(
            Environment::with_prefix("SPARSE_MATRIX")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
