//! Error type definitions.

use std::path::{Path, PathBuf};

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the export run.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum ExportError {
    /// The store does not exist, cannot be opened, or is not an SQLite database.
    #[error("Failed to open database {}: {reason}", .path.display())]
    ConnectionError {
        /// Path that was opened
        path: PathBuf,
        /// Driver or filesystem message
        reason: String,
    },

    /// The `images` table or one of its columns is missing, or holds values of
    /// an unexpected type.
    #[error("Unexpected database schema: {0}")]
    SchemaError(String),

    /// The output file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    IoError {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The driver failed while the rows were being read.
    #[error("SQL error: {0}")]
    QueryError(#[from] sqlx::Error),
}

impl ExportError {
    pub(crate) fn connection(path: &Path, reason: impl ToString) -> Self {
        ExportError::ConnectionError {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ExportError::IoError {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Maps a row-decoding failure to a schema error; other driver errors stay
    /// query errors.
    pub(crate) fn from_row_error(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::ColumnNotFound(column) => {
                ExportError::SchemaError(format!("column `{column}` not found in result row"))
            }
            sqlx::Error::ColumnDecode { index, source } => ExportError::SchemaError(format!(
                "column {index} has an unexpected type: {source}"
            )),
            other => ExportError::QueryError(other),
        }
    }
}

/// Error types for reading an exported image list back.
#[derive(Error, Debug)]
pub enum NameListError {
    /// The list file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    IoError {
        /// List path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line is not `<name> <image_id>`.
    #[error("Malformed line {line}: {content:?} (expected \"<name> <image_id>\")")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },
}

/// A configuration value that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid configuration for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
