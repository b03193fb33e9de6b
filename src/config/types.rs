//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, Subcommand, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How registry entries are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Identifier = "value"` lines, or the bare value for `get`
    Plain,
    /// JSON entry objects
    Json,
}

/// Command-line interface of the `header_key_names` binary.
#[derive(Debug, Parser)]
#[command(
    name = "header_key_names",
    version,
    about = "Inspect the registry of HTTP authentication header names and token defaults"
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `header_key_names` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every registry entry in declaration order
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        output: OutputFormat,
    },
    /// Print the value of a single entry
    Get {
        /// Symbolic identifier, e.g. AuthorizationHeaderKey
        identifier: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        output: OutputFormat,
    },
}
