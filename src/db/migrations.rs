//! Forward-only schema migration framework.
//!
//! Tracks the schema version in `schema_meta` and runs sequential migrations
//! to bring the database up to [`CURRENT_SCHEMA_VERSION`].

use anyhow::{bail, Result};
use rusqlite::types::Type;
use rusqlite::Connection;

/// The schema version that the current binary expects.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Get the current schema version from the database. A value that is not an
/// integer is a conversion error.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row(
        "SELECT value FROM schema_meta WHERE key = 'schema_version'",
        [],
        |row| {
            let val: String = row.get(0)?;
            val.parse::<u32>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
        },
    )
}

/// Update the stored schema version.
fn update_schema_version(conn: &Connection, version: u32) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE schema_meta SET value = ?1 WHERE key = 'schema_version'",
        [version.to_string()],
    )?;
    Ok(())
}

/// Run any pending forward-only migrations. Each migration runs in a transaction.
///
/// Fails if the stored version has no path to [`CURRENT_SCHEMA_VERSION`].
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let mut version = get_schema_version(conn)?;
    tracing::debug!(schema_version = version, target = CURRENT_SCHEMA_VERSION, "checking migrations");

    while version < CURRENT_SCHEMA_VERSION {
        let next = version + 1;
        tracing::info!(from = version, to = next, "running migration");

        conn.execute_batch("BEGIN")?;
        let step = match next {
            2 => migrate_v1_to_v2(conn),
            _ => {
                conn.execute_batch("ROLLBACK")?;
                bail!("no migration from schema version {version} to {next}");
            }
        };
        if let Err(e) = step.and_then(|_| update_schema_version(conn, next)) {
            conn.execute_batch("ROLLBACK")?;
            return Err(e.into());
        }
        conn.execute_batch("COMMIT")?;
        version = next;
    }

    Ok(())
}

/// Migration v1 → v2: one connection per unordered pair of thoughts.
///
/// Drops the later row of any A→B / B→A pair, then enforces the rule with a
/// unique index over the sorted endpoints.
fn migrate_v1_to_v2(conn: &Connection) -> rusqlite::Result<()> {
    let removed = conn.execute(
        "DELETE FROM connections WHERE EXISTS ( \
             SELECT 1 FROM connections earlier \
             WHERE earlier.source_id = connections.target_id \
               AND earlier.target_id = connections.source_id \
               AND earlier.id < connections.id)",
        [],
    )?;
    if removed > 0 {
        tracing::warn!(removed, "dropped reverse-duplicate connections");
    }

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_connections_pair \
         ON connections(MIN(source_id, target_id), MAX(source_id, target_id));",
    )?;
    Ok(())
}
