//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_key_names` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! The registry itself lives in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use header_key_names::app::run;
use header_key_names::config::Cli;
use header_key_names::initialization::init_logger_with;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    match run(cli.command) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => {
            eprintln!("header_key_names error: {:#}", e);
            process::exit(1);
        }
    }
}
