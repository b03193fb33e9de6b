//! Error handling.
//!
//! This module provides the error enums for:
//! - Logger initialization
//! - Registry lookups by identifier string
//! - Request inspection helpers

mod types;

// Re-export public API
pub use types::{InitializationError, RegistryError, RequestError};
