//! Application initialization.
//!
//! The registry needs no setup; the only process-wide resource is the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
