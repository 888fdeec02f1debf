use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Response from thought_stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_thoughts: u64,
    pub total_connections: u64,
    /// Thought count per cluster label, sorted by label.
    pub by_cluster: BTreeMap<String, u64>,
    /// Mean connection strength, 0 when there are no connections.
    pub mean_strength: f64,
    /// Thoughts with no connection in either direction.
    pub isolated_thoughts: u64,
    pub db_size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_thought: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_thought: Option<String>,
}

/// Compute store statistics.
///
/// `db_path` is used for file size calculation; pass None for in-memory databases.
pub fn thought_stats(conn: &Connection, db_path: Option<&Path>) -> Result<StatsResponse> {
    let total_thoughts = count(conn, "SELECT COUNT(*) FROM thoughts")?;
    let total_connections = count(conn, "SELECT COUNT(*) FROM connections")?;
    let isolated_thoughts = count(
        conn,
        "SELECT COUNT(*) FROM thoughts t WHERE NOT EXISTS ( \
             SELECT 1 FROM connections c WHERE c.source_id = t.id OR c.target_id = t.id)",
    )?;
    let by_cluster = count_by_cluster(conn)?;

    let mean_strength: Option<f64> =
        conn.query_row("SELECT AVG(strength) FROM connections", [], |row| row.get(0))?;

    let (oldest, newest): (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(created_at), MAX(created_at) FROM thoughts",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let db_size_bytes = db_path
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(StatsResponse {
        total_thoughts,
        total_connections,
        by_cluster,
        mean_strength: mean_strength.unwrap_or(0.0),
        isolated_thoughts,
        db_size_bytes,
        oldest_thought: oldest,
        newest_thought: newest,
    })
}

fn count(conn: &Connection, sql: &str) -> Result<u64> {
    let n: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(n as u64)
}

fn count_by_cluster(conn: &Connection) -> Result<BTreeMap<String, u64>> {
    let mut stmt = conn.prepare("SELECT cluster, COUNT(*) FROM thoughts GROUP BY cluster")?;
    let rows = stmt.query_map([], |row| {
        let cluster: String = row.get(0)?;
        let n: i64 = row.get(1)?;
        Ok((cluster, n as u64))
    })?;

    let mut map = BTreeMap::new();
    for row in rows {
        let (cluster, n) = row?;
        map.insert(cluster, n);
    }
    Ok(map)
}
