//! colmap_image_list library: export of COLMAP image names and ids
//!
//! Reads the `images` table of a COLMAP SQLite database and writes one
//! `"<name> <image_id>"` line per image to a text file. The database is only
//! ever opened read-only.
//!
//! # Example
//!
//! ```no_run
//! use colmap_image_list::{run_export, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     database_path: PathBuf::from("database.db"),
//!     output_file: PathBuf::from("image_list.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_export(&config).await?;
//! println!("Wrote {} images", report.records);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The database driver is async, so library functions must be called from
//! within a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod name_list;
pub mod pair;
#[allow(missing_docs)]
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ConfigValidationError, ExportError, NameListError};
pub use export::{export_image_list, ExportReport};
pub use name_list::{parse_name_id_list, read_name_id_list};
pub use pair::{image_ids_to_pair_id, pair_id_to_image_ids};
pub use run::run_export;

mod run {
    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::export::{export_image_list, ExportReport};

    /// Validates the configuration and runs the export it describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the export fails.
    /// The underlying [`crate::ExportError`] stays reachable through the
    /// error chain.
    pub async fn run_export(config: &Config) -> Result<ExportReport> {
        config.validate().context("Invalid configuration")?;

        let report = export_image_list(&config.database_path, &config.output_file)
            .await
            .with_context(|| {
                format!(
                    "Failed to export images from {}",
                    config.database_path.display()
                )
            })?;

        Ok(report)
    }
}
