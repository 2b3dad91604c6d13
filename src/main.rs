//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `colmap_image_list` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use colmap_image_list::initialization::init_logger_with;
use colmap_image_list::{run_export, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(&config).await {
        Ok(report) => {
            println!(
                "✅ Exported {} image{} from {} in {:.1}s",
                report.records,
                if report.records == 1 { "" } else { "s" },
                report.database_path.display(),
                report.elapsed_seconds
            );
            println!("Image list saved in {}", report.output_file.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("colmap_image_list error: {:#}", e);
            process::exit(1);
        }
    }
}
