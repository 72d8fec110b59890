//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `brace_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use brace_check::initialization::init_logger_with;
use brace_check::{render_report, run_check, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the check using the library
    match run_check(config) {
        Ok(report) => {
            // Finding an unexpected closer is the tool doing its job, so
            // every completed scan exits 0 regardless of what it reports.
            println!("{}", render_report(&report));
            Ok(())
        }
        Err(e) => {
            eprintln!("brace_check error: {:#}", e);
            process::exit(1);
        }
    }
}
