//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error_handling::ConfigValidationError;

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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Export configuration.
///
/// Parsed from the command line by the binary, or built directly by library
/// callers.
///
/// # Examples
///
/// ```no_run
/// use colmap_image_list::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     database_path: PathBuf::from("database.db"),
///     output_file: PathBuf::from("image_list.txt"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "colmap_image_list",
    version,
    about = "Writes the name and id of every image in a COLMAP database to a text file"
)]
pub struct Config {
    /// COLMAP database to read (must already exist)
    #[arg(long = "database_path", visible_alias = "database-path")]
    pub database_path: PathBuf,

    /// Text file to write, one "<name> <image_id>" line per image (truncated if present)
    #[arg(long = "output_file", visible_alias = "output-file")]
    pub output_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./database.db"),
            output_file: PathBuf::from("./image_list.txt"),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the configuration for combinations that cannot work.
    ///
    /// The output file is opened with truncation, so pointing it at the
    /// database itself would destroy the store before it is read.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "database_path",
                "database_path must not be empty",
            ));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(ConfigValidationError::new(
                "output_file",
                "output_file must not be empty",
            ));
        }

        let same_file = match (
            std::fs::canonicalize(&self.database_path),
            std::fs::canonicalize(&self.output_file),
        ) {
            (Ok(db), Ok(out)) => db == out,
            _ => self.database_path == self.output_file,
        };
        if same_file {
            return Err(ConfigValidationError::new(
                "output_file",
                format!(
                    "output_file must differ from database_path ({}); writing it would truncate the database",
                    self.database_path.display()
                ),
            ));
        }

        Ok(())
    }
}
