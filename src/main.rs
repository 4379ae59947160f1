//! Agenda - Main entry point
//!
//! Command-line frontend for the local contact book.

use anyhow::Result;
use clap::Parser;
use contact_agenda::{Config, ContactStore, FileBackend};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(data_dir = %config.data_dir.display(), "starting agenda");

    let backend = Arc::new(FileBackend::new(&config.data_dir));
    let store = ContactStore::new(backend);

    if let Err(e) = cli::run(args, &store) {
        error!("command failed: {}", e);
        return Err(e);
    }

    Ok(())
}
