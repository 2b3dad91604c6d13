//! Streaming read of the `images` table.

use futures::{Stream, StreamExt};
use sqlx::sqlite::SqliteConnection;

use crate::config::IMAGES_QUERY;
use crate::error_handling::ExportError;
use crate::storage::models::ImageRecord;

/// Runs the export query and yields one [`ImageRecord`] per row.
///
/// Rows arrive in the store's iteration order and are decoded one at a time.
/// The stream borrows the connection until it is dropped.
pub fn fetch_images(
    conn: &mut SqliteConnection,
) -> impl Stream<Item = Result<ImageRecord, ExportError>> + '_ {
    sqlx::query(IMAGES_QUERY).fetch(conn).map(|row| {
        row.map_err(ExportError::QueryError)
            .and_then(|row| ImageRecord::from_row(&row))
    })
}
