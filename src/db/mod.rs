pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// Open (or create) the thoughts database at the given path with schema
/// initialized and migrations applied.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    // Connections cascade on thought deletion
    conn.pragma_update(None, "foreign_keys", "ON")?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Open an in-memory database with schema and migrations applied.
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    Ok(conn)
}

/// Result of [`check_database_health`].
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub schema_version: u32,
    pub thought_count: u64,
    pub connection_count: u64,
    /// Connections whose endpoints no longer exist.
    pub dangling_connections: u64,
    pub integrity_ok: bool,
    pub integrity_details: String,
}

/// Run `PRAGMA integrity_check` and gather row counts.
pub fn check_database_health(conn: &Connection) -> Result<HealthReport> {
    let schema_version = migrations::get_schema_version(conn)?;

    let thought_count: i64 = conn.query_row("SELECT COUNT(*) FROM thoughts", [], |r| r.get(0))?;
    let connection_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM connections", [], |r| r.get(0))?;
    let dangling: i64 = conn.query_row(
        "SELECT COUNT(*) FROM connections c \
         WHERE NOT EXISTS (SELECT 1 FROM thoughts t WHERE t.id = c.source_id) \
            OR NOT EXISTS (SELECT 1 FROM thoughts t WHERE t.id = c.target_id)",
        [],
        |r| r.get(0),
    )?;

    let integrity: String = conn.query_row("PRAGMA integrity_check", [], |r| r.get(0))?;

    Ok(HealthReport {
        schema_version,
        thought_count: thought_count as u64,
        connection_count: connection_count as u64,
        dangling_connections: dangling as u64,
        integrity_ok: integrity == "ok",
        integrity_details: integrity,
    })
}
