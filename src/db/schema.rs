//! SQL DDL for the thoughts store.
//!
//! Defines the `thoughts`, `connections`, and `schema_meta` tables. All DDL
//! uses `IF NOT EXISTS` for idempotent initialization. Later layout changes
//! live in [`super::migrations`].

use rusqlite::Connection;

/// Version-1 schema: thoughts, ordered-pair connections, metadata.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS thoughts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL CHECK(length(trim(content)) > 0),
    keywords TEXT NOT NULL DEFAULT '[]',
    cluster TEXT NOT NULL,
    x REAL NOT NULL DEFAULT 0,
    y REAL NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_thoughts_cluster ON thoughts(cluster);
CREATE INDEX IF NOT EXISTS idx_thoughts_created ON thoughts(created_at);

-- Weighted edges, directed from the thought whose insertion created them
CREATE TABLE IF NOT EXISTS connections (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source_id INTEGER NOT NULL REFERENCES thoughts(id) ON DELETE CASCADE,
    target_id INTEGER NOT NULL REFERENCES thoughts(id) ON DELETE CASCADE,
    strength REAL NOT NULL DEFAULT 0.5 CHECK(strength > 0.0 AND strength <= 1.0),
    UNIQUE(source_id, target_id),
    CHECK(source_id <> target_id)
);

CREATE INDEX IF NOT EXISTS idx_connections_target ON connections(target_id);

CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"thoughts".to_string()));
        assert!(tables.contains(&"connections".to_string()));
        assert!(tables.contains(&"schema_meta".to_string()));
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error
    }

    #[test]
    fn blank_content_and_self_edges_are_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let blank = conn.execute(
            "INSERT INTO thoughts (content, cluster, created_at) VALUES ('   ', 'ideas', 'now')",
            [],
        );
        assert!(blank.is_err());

        conn.execute(
            "INSERT INTO thoughts (content, cluster, created_at) VALUES ('hello', 'ideas', 'now')",
            [],
        )
        .unwrap();
        let id = conn.last_insert_rowid();
        let self_edge = conn.execute(
            "INSERT INTO connections (source_id, target_id, strength) VALUES (?1, ?1, 0.5)",
            [id],
        );
        assert!(self_edge.is_err());
    }
}
