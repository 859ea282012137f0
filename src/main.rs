// src/main.rs

use clap::Parser;
use env_logger::Env;
use log::{debug, error, warn};

use sparse_matrix::cli::{self, Cli};
use sparse_matrix::config::MatrixConfig;
use sparse_matrix::Error;

fn main() {
    let cli = Cli::parse();

    // An explicit --config must load; the implicit one falls back to defaults
    let (config, config_warning) = match &cli.config {
        Some(path) => match MatrixConfig::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), Error::from(e));
                std::process::exit(1);
            }
        },
        None => match MatrixConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (MatrixConfig::default(), Some(Error::from(e))),
        },
    };

    // Initialize the logger
    let default_level = match cli.verbose {
        0 => config.log_level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let env = Env::default()
        .filter_or("SPARSE_MATRIX_LOG", default_level)
        .write_style_or("SPARSE_MATRIX_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_warning {
        warn!("{}; using defaults", e);
    }

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_threads())
        .build_global()
    {
        warn!("Could not configure thread pool: {}", e);
    }
    debug!("Rayon threads: {}", rayon::current_num_threads());

    if let Err(e) = cli::run(cli.command, &config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
