//! Configuration constants.
//!
//! Names of the COLMAP tables and columns read by the exporter, and the
//! arithmetic constant behind pair identifiers.

/// Table holding one row per registered image.
pub const IMAGES_TABLE: &str = "images";

/// Columns the exporter requires on [`IMAGES_TABLE`].
pub const IMAGES_COLUMNS: &[&str] = &["image_id", "camera_id", "name"];

/// The single read query issued against the store.
///
/// No `ORDER BY`: rows are written in the store's own iteration order.
pub const IMAGES_QUERY: &str = "SELECT image_id, camera_id, name FROM images;";

/// Modulus used by COLMAP to pack two image ids into one pair id.
pub const MAX_NUM_IMAGES: i64 = 2_147_483_647;

/// Separator between the image name and its id in the output list.
pub const FIELD_SEPARATOR: char = ' ';
