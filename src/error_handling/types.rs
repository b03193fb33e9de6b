//! Error type definitions.
//!
//! This module defines all error types used throughout the crate.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for registry lookups by string.
///
/// Typed lookups through [`crate::HeaderKeyName`] cannot fail; this only
/// surfaces when an identifier arrives as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identifier names no registry entry.
    #[error("Unknown registry identifier: {0:?}")]
    UnknownIdentifier(String),
}

/// Error types for request inspection.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request URI lies outside the application's context path.
    #[error("Request URI {request_uri:?} does not start with context path {context_path:?}")]
    ContextPathMismatch {
        /// Full request URI
        request_uri: String,
        /// Mount prefix of the application
        context_path: String,
    },

    /// The declared body charset names no known encoding.
    #[error("Unsupported request body charset: {0}")]
    UnsupportedCharset(String),

    /// The body bytes are malformed in the declared encoding.
    #[error("Invalid request body: malformed {charset} byte sequence")]
    InvalidBody {
        /// Canonical name of the encoding the body was decoded with
        charset: String,
    },
}
