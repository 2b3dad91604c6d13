// storage/models.rs
// Database models and types

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::config::FIELD_SEPARATOR;
use crate::error_handling::ExportError;

/// One row of the COLMAP `images` table.
///
/// Only the columns the exporter reads are mapped; pose priors and the other
/// COLMAP columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub image_id: i64,
    /// Decoded with the row but never written to the list.
    pub camera_id: i64,
    pub name: String,
}

impl ImageRecord {
    /// Decodes a row produced by [`crate::config::IMAGES_QUERY`].
    pub fn from_row(row: &SqliteRow) -> Result<Self, ExportError> {
        Ok(Self {
            image_id: row
                .try_get("image_id")
                .map_err(ExportError::from_row_error)?,
            camera_id: row
                .try_get("camera_id")
                .map_err(ExportError::from_row_error)?,
            name: row.try_get("name").map_err(ExportError::from_row_error)?,
        })
    }

    /// The output line for this image: `"<name> <image_id>\n"`.
    ///
    /// The name is written verbatim, embedded spaces included.
    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.name, FIELD_SEPARATOR, self.image_id)
    }
}
