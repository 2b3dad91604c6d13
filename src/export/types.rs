//! Export types.

use std::path::PathBuf;

/// Summary of a completed export.
#[derive(Clone, Debug)]
pub struct ExportReport {
    /// Number of lines written (one per image row)
    pub records: usize,
    /// Database that was read
    pub database_path: PathBuf,
    /// Text file that was written
    pub output_file: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}
