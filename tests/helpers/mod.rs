#![allow(dead_code)]

use rusqlite::Connection;
use thought_threads::db;
use thought_threads::engine::Engine;
use thought_threads::thoughts::store::{add_thought, AddThoughtResult};

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    db::open_memory_database().unwrap()
}

/// Add a thought through the full write path.
pub fn add(conn: &mut Connection, engine: &Engine, content: &str) -> AddThoughtResult {
    add_thought(conn, engine, content).unwrap()
}

/// Row count of a table.
pub fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

/// Stored connections as (source, target, strength), in insertion order.
pub fn edges(conn: &Connection) -> Vec<(i64, i64, f64)> {
    conn.prepare("SELECT source_id, target_id, strength FROM connections ORDER BY id")
        .unwrap()
        .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}
