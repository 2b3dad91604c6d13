// storage/mod.rs
// Read-only access to the COLMAP database

pub mod connection;
pub mod images;
pub mod models;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use connection::open_read_only;
pub use images::fetch_images;
pub use models::ImageRecord;
pub use schema::verify_images_schema;
