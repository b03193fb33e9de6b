//! Command dispatch and rendering of registry entries for the command-line binary.

use anyhow::{Context, Result};

use crate::config::{Command, OutputFormat};
use crate::header_keys::{entries, HeaderKeyName};

/// Runs one CLI command and returns the text to print.
///
/// # Errors
///
/// Fails if `get` names an unknown identifier or serialization fails.
pub fn run(command: Command) -> Result<String> {
    match command {
        Command::List { output } => render_list(output),
        Command::Get { identifier, output } => {
            let key = HeaderKeyName::from_identifier(&identifier)
                .with_context(|| format!("Cannot look up {:?}", identifier))?;
            render_entry(key, output)
        }
    }
}

/// Renders every registry entry.
///
/// Plain output quotes values so a trailing space (as in `Bearer `) stays visible.
pub fn render_list(output: OutputFormat) -> Result<String> {
    let all = entries();
    match output {
        OutputFormat::Plain => {
            let width = all.iter().map(|e| e.identifier.len()).max().unwrap_or(0);
            let lines: Vec<String> = all
                .iter()
                .map(|e| format!("{:<width$} = {:?}", e.identifier, e.value, width = width))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&all).context("Failed to serialize registry entries")
        }
    }
}

/// Renders a single entry. Plain output is the raw value.
pub fn render_entry(key: HeaderKeyName, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Plain => Ok(key.value().to_string()),
        OutputFormat::Json => serde_json::to_string(&key.entry())
            .with_context(|| format!("Failed to serialize entry {}", key.identifier())),
    }
}
