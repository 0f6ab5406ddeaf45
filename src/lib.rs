//! Godzinator library root.
//! Exposes the clock arithmetic core, the time-sum sheet, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`).
pub const LOG_ENV: &str = "GODZINATOR_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Sum { .. } => cli::commands::sum::handle(cli, cfg),
        Commands::Vacation { .. } => cli::commands::vacation::handle(cli, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(cli, cfg),
        Commands::Mask { .. } => cli::commands::mask::handle(cli, cfg),
    }
}

/// Diagnostics go to stderr so they never mix with results.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut cfg = Config::load_from(&cli.config_path())?;
    if let Some(lang) = cli.lang {
        cfg.language = lang;
    }

    dispatch(&cli, &cfg)
}
