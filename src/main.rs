//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ipgeo_bot` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ipgeo_bot::initialization::init_logger_with;
use ipgeo_bot::{run_bot, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting BOT_TOKEN and MAP_API_KEY in .env without
    // exporting them manually
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_bot(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("ipgeo-bot error: {:#}", e);
            process::exit(1);
        }
    }
}
