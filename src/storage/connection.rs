//! Store connection management.
//!
//! The exporter never writes to the COLMAP database, so the connection is
//! opened read-only and the file is never created on demand.

use std::path::Path;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

use crate::error_handling::ExportError;

/// Opens a read-only connection to an existing SQLite database.
///
/// A probe query against `sqlite_master` runs immediately, because SQLite
/// only notices that a file is not a database on first access.
///
/// # Errors
///
/// Returns `ExportError::ConnectionError` if the path does not exist, is not a
/// regular file, cannot be opened, or is not an SQLite database.
pub async fn open_read_only(db_path: &Path) -> Result<SqliteConnection, ExportError> {
    let metadata = tokio::fs::metadata(db_path).await.map_err(|e| {
        error!("Cannot access database {}: {e}", db_path.display());
        ExportError::connection(db_path, e)
    })?;
    if !metadata.is_file() {
        return Err(ExportError::connection(db_path, "not a regular file"));
    }

    let mut conn = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false)
        .log_statements(log::LevelFilter::Debug)
        .connect()
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            ExportError::connection(db_path, e)
        })?;

    let objects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master")
        .fetch_one(&mut conn)
        .await
        .map_err(|e| {
            error!("Database probe failed: {e}");
            ExportError::connection(db_path, e)
        })?;
    debug!(
        "Opened {} read-only ({} schema objects)",
        db_path.display(),
        objects
    );

    Ok(conn)
}
