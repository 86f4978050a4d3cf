//! rxform library root.
//! Exposes the duration selector state machine, the medication form, the
//! demo pages and the CLI shell that drives them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod pages;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Env var that overrides the configured log filter.
pub const LOG_ENV: &str = "RXFORM_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Presets { json } => cli::commands::presets::handle(*json),
        Commands::Format { value, unit } => cli::commands::format::handle(*value, unit),
        Commands::Options => cli::commands::options::handle(),
        Commands::Form { .. } => cli::commands::form::handle(cli, cfg),
        Commands::Prescribe { .. } => cli::commands::prescribe::handle(cli, cfg),
    }
}

/// Diagnostics go to stderr so page output stays clean on stdout.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&path)?;

    init_tracing(&cfg.log_filter);
    tracing::debug!(config = %path.display(), "configuration loaded");

    dispatch(&cli, &cfg)
}
