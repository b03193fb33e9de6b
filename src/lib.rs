//! header_key_names library: well-known HTTP authentication header names.
//!
//! This library provides a closed, compile-time registry of the header keys and
//! default token parameters an HTTP authentication layer reads, so that call
//! sites never spell those literals themselves. A handful of request-inspection
//! helpers and a small CLI for printing the registry sit next to it.
//!
//! # Example
//!
//! ```
//! use header_key_names::{default_durability, get, HeaderKeyName};
//!
//! assert_eq!(get(HeaderKeyName::AuthorizationHeaderKey), "Authorization");
//! assert_eq!(get(HeaderKeyName::DefaultTokenType), "JWT");
//! assert_eq!(default_durability().as_secs(), 5 * 24 * 60 * 60);
//!
//! // Identifiers that arrive as text are resolved explicitly.
//! let key: HeaderKeyName = "RolesHeaderKey".parse().unwrap();
//! assert_eq!(key.value(), "u-roles");
//! assert!("NoSuchKey".parse::<HeaderKeyName>().is_err());
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
mod header_keys;
pub mod initialization;
pub mod request;

// Re-export public API
pub use error_handling::{InitializationError, RegistryError, RequestError};
pub use header_keys::{
    default_durability, entries, get, Entry, HeaderKeyName, DEFAULT_DURABILITY_MILLIS,
};
