//! Export of the COLMAP image list.
//!
//! Reads `(image_id, camera_id, name)` from the `images` table and writes one
//! `"<name> <image_id>"` line per image to a text file.

mod list;
mod types;

pub use list::{export_image_list, write_image_list};
pub use types::ExportReport;
