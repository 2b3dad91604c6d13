//! Image list export.
//!
//! One pass over the `images` table, streamed straight into a buffered file
//! writer. At most one row is held in memory.

use std::path::Path;
use std::time::Instant;

use futures::{pin_mut, Stream, StreamExt};
use log::{debug, info};
use sqlx::Connection;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::error_handling::ExportError;
use crate::storage::{fetch_images, open_read_only, verify_images_schema, ImageRecord};

use super::types::ExportReport;

/// Exports the name and id of every image in a COLMAP database.
///
/// The database is opened read-only and its schema is checked before the
/// output file is touched, so a missing or malformed store leaves no output
/// behind. Once writing has started, a failure leaves whatever was already
/// written in place.
///
/// # Arguments
///
/// * `database_path` - Existing COLMAP database
/// * `output_file` - Text file to create or truncate
///
/// # Errors
///
/// - `ExportError::ConnectionError` if the store cannot be opened
/// - `ExportError::SchemaError` if `images` or one of its columns is missing
/// - `ExportError::IoError` if the output cannot be created or written
/// - `ExportError::QueryError` if the driver fails while reading rows
///
/// # Example
///
/// ```no_run
/// use colmap_image_list::export::export_image_list;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = export_image_list(Path::new("database.db"), Path::new("list.txt")).await?;
/// println!("Wrote {} images", report.records);
/// # Ok(())
/// # }
/// ```
pub async fn export_image_list(
    database_path: &Path,
    output_file: &Path,
) -> Result<ExportReport, ExportError> {
    let start_time = Instant::now();
    info!(
        "Exporting image names and ids from {}",
        database_path.display()
    );

    let mut conn = open_read_only(database_path).await?;
    verify_images_schema(&mut conn).await?;

    let file = tokio::fs::File::create(output_file)
        .await
        .map_err(|e| ExportError::io(output_file, e))?;
    debug!("Writing image list to {}", output_file.display());
    let mut writer = BufWriter::new(file);

    let records = write_image_list(fetch_images(&mut conn), &mut writer, output_file).await?;
    drop(writer);

    conn.close().await?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Wrote {} image{} to {} in {:.2}s",
        records,
        if records == 1 { "" } else { "s" },
        output_file.display(),
        elapsed_seconds
    );

    Ok(ExportReport {
        records,
        database_path: database_path.to_path_buf(),
        output_file: output_file.to_path_buf(),
        elapsed_seconds,
    })
}

/// Writes one line per record to `writer` and flushes it.
///
/// Records are written in stream order; nothing is deduplicated, filtered or
/// reordered. The first error, from either side, stops the write.
/// `output_path` is only used to label I/O errors.
///
/// Returns the number of lines written.
pub async fn write_image_list<S, W>(
    records: S,
    writer: &mut W,
    output_path: &Path,
) -> Result<usize, ExportError>
where
    S: Stream<Item = Result<ImageRecord, ExportError>>,
    W: AsyncWrite + Unpin,
{
    pin_mut!(records);

    let mut count = 0usize;
    while let Some(record) = records.next().await {
        let record = record?;
        writer
            .write_all(record.to_line().as_bytes())
            .await
            .map_err(|e| ExportError::io(output_path, e))?;
        count += 1;
    }

    writer
        .flush()
        .await
        .map_err(|e| ExportError::io(output_path, e))?;

    Ok(count)
}
