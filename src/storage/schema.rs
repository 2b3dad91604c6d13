//! Verification of the COLMAP `images` table layout.

use log::debug;
use sqlx::sqlite::SqliteConnection;
use sqlx::Row;

use crate::config::{IMAGES_COLUMNS, IMAGES_TABLE};
use crate::error_handling::ExportError;

/// Checks that the `images` table exists and carries every column the export
/// query selects.
///
/// # Errors
///
/// Returns `ExportError::SchemaError` naming the missing table or columns.
pub async fn verify_images_schema(conn: &mut SqliteConnection) -> Result<(), ExportError> {
    let rows = sqlx::query("SELECT name FROM pragma_table_info(?)")
        .bind(IMAGES_TABLE)
        .fetch_all(&mut *conn)
        .await?;

    if rows.is_empty() {
        return Err(ExportError::SchemaError(format!(
            "table `{IMAGES_TABLE}` does not exist"
        )));
    }

    let columns = rows
        .iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect::<Result<Vec<_>, _>>()?;

    let missing: Vec<&str> = IMAGES_COLUMNS
        .iter()
        .copied()
        .filter(|required| !columns.iter().any(|c| c.eq_ignore_ascii_case(required)))
        .collect();
    if !missing.is_empty() {
        return Err(ExportError::SchemaError(format!(
            "table `{IMAGES_TABLE}` is missing column(s): {}",
            missing.join(", ")
        )));
    }

    debug!("Table `{IMAGES_TABLE}` has columns: {}", columns.join(", "));
    Ok(())
}
