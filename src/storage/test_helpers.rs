//! Shared test helpers for storage module tests.
//!
//! Builds throwaway COLMAP-style databases on disk so that the read-only
//! connection code can be exercised against real files.

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

/// The `cameras` and `images` tables as COLMAP creates them.
pub const COLMAP_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS cameras (
        camera_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        model INTEGER NOT NULL,
        width INTEGER NOT NULL,
        height INTEGER NOT NULL,
        params BLOB,
        prior_focal_length INTEGER NOT NULL);
    CREATE TABLE IF NOT EXISTS images (
        image_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL UNIQUE,
        camera_id INTEGER NOT NULL,
        prior_qw REAL, prior_qx REAL, prior_qy REAL, prior_qz REAL,
        prior_tx REAL, prior_ty REAL, prior_tz REAL,
        CONSTRAINT image_id_check CHECK(image_id >= 0 and image_id < 2147483647),
        FOREIGN KEY(camera_id) REFERENCES cameras(camera_id));
";

/// Creates a database at `path` and runs `sql` against it.
pub async fn create_db_with_sql(path: &Path, sql: &str) {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create test database");
    sqlx::raw_sql(sql)
        .execute(&mut conn)
        .await
        .expect("Failed to run test SQL");
    conn.close().await.expect("Failed to close test database");
}

/// Creates a COLMAP database holding the given `(image_id, camera_id, name)` rows.
pub async fn create_colmap_db(path: &Path, images: &[(i64, i64, &str)]) {
    create_db_with_sql(path, COLMAP_SCHEMA).await;

    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .connect()
        .await
        .expect("Failed to open test database");
    for (image_id, camera_id, name) in images {
        // sqlx enables foreign keys, so the camera row has to exist first
        sqlx::query(
            "INSERT OR IGNORE INTO cameras (camera_id, model, width, height, prior_focal_length)
             VALUES (?, 1, 640, 480, 0)",
        )
        .bind(camera_id)
        .execute(&mut conn)
        .await
        .expect("Failed to insert camera");
        sqlx::query("INSERT INTO images (image_id, name, camera_id) VALUES (?, ?, ?)")
            .bind(image_id)
            .bind(name)
            .bind(camera_id)
            .execute(&mut conn)
            .await
            .expect("Failed to insert image");
    }
    conn.close().await.expect("Failed to close test database");
}
