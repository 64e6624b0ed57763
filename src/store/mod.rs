// Storage layer: a single SQLite-backed profile slot.
//
// rusqlite with the "bundled" feature so there's no system SQLite
// dependency. The database file lives wherever ALGOMBTI_DB_PATH points
// (defaults to ./algombti.db).

pub mod schema;
pub mod sqlite;
pub mod traits;

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use self::sqlite::SqliteStore;

/// Open (or create) the database, run schema creation, and wrap the
/// connection in the default store implementation.
pub fn initialize(db_path: &str) -> Result<SqliteStore> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for database: {db_path}"))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {db_path}"))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;

    Ok(SqliteStore::new(conn))
}
