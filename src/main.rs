//! Contact Directory - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr so they never
//! mix with the menu output.

use anyhow::Result;
use contact_directory::{Config, Menu};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the menu)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(capacity = ?config.capacity, "Configuration loaded successfully");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());

    let mut directory = menu.create_directory(config.capacity)?;

    if let Err(e) = menu.run(&mut directory) {
        error!("Menu loop failed: {}", e);
        return Err(e);
    }

    info!(contacts = directory.len(), "Contact directory shutdown complete");
    Ok(())
}
