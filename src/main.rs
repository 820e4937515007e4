//! Contact Book - Main entry point
//!
//! Runs the interactive assistant over stdin/stdout, loading the address
//! book at startup and saving it on exit.

use anyhow::Result;
use contact_book::{run_session, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout carries the conversation)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Using address book at {}",
        config.book_path.display()
    );

    let repo = JsonFileRepository::new(&config.book_path);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_session(
        &repo,
        config.birthday_window_days,
        stdin.lock(),
        stdout.lock(),
    ) {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete");
    Ok(())
}
