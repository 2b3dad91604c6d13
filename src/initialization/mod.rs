//! Application initialization.
//!
//! The exporter has a single process-wide resource to set up before a run:
//! the logger. Store connections and output files are scoped to the run
//! itself (see `storage` and `export`).

mod logger;

// Re-export public API
pub use logger::init_logger_with;
