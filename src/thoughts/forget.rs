//! Deleting one thought, or all of them.
//!
//! Connections go with their endpoints: the foreign keys cascade, and the
//! counts reported here are taken inside the same transaction as the delete.

use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::engine::ThoughtId;

/// Result returned from [`delete_thought`].
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub id: ThoughtId,
    /// `false` if no thought had this id.
    pub deleted: bool,
    pub connections_removed: u64,
}

/// Result returned from [`clear_all`].
#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub thoughts_removed: u64,
    pub connections_removed: u64,
}

/// Delete a thought and every connection touching it. Unknown ids are a no-op.
pub fn delete_thought(conn: &mut Connection, id: ThoughtId) -> Result<DeleteResult> {
    let tx = conn.transaction()?;

    let connections: i64 = tx.query_row(
        "SELECT COUNT(*) FROM connections WHERE source_id = ?1 OR target_id = ?1",
        params![id],
        |row| row.get(0),
    )?;

    // Edges first; the cascade only fires when foreign_keys is on
    tx.execute(
        "DELETE FROM connections WHERE source_id = ?1 OR target_id = ?1",
        params![id],
    )?;
    let deleted = tx.execute("DELETE FROM thoughts WHERE id = ?1", params![id])? > 0;

    tx.commit()?;

    if deleted {
        tracing::info!(id, connections, "thought deleted");
    } else {
        tracing::debug!(id, "delete ignored, no such thought");
    }

    Ok(DeleteResult {
        id,
        deleted,
        connections_removed: connections as u64,
    })
}

/// Remove every thought and connection.
pub fn clear_all(conn: &mut Connection) -> Result<ClearResult> {
    let tx = conn.transaction()?;

    // Order matters for FK constraints
    let connections_removed = tx.execute("DELETE FROM connections", [])? as u64;
    let thoughts_removed = tx.execute("DELETE FROM thoughts", [])? as u64;

    tx.commit()?;

    tracing::info!(thoughts_removed, connections_removed, "store cleared");
    Ok(ClearResult {
        thoughts_removed,
        connections_removed,
    })
}
