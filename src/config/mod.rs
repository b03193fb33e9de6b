//! Application configuration.
//!
//! This module provides the CLI option types and log settings. The registry
//! itself is compiled in and has no runtime configuration.

mod types;

pub use types::{Cli, Command, LogFormat, LogLevel, OutputFormat};
