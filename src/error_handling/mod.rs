//! Error handling.
//!
//! This module provides the error types used throughout the application:
//! - **Export errors**: failures opening the store, unexpected schema, output I/O
//! - **Initialization errors**: logger setup failures
//! - **Configuration errors**: invalid CLI/library configuration
//! - **Name list errors**: unreadable or malformed exported lists
//!
//! Every export error is fatal; nothing is retried.

mod types;

// Re-export public API
pub use types::{ConfigValidationError, ExportError, InitializationError, NameListError};
