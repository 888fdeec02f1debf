//! Write path: snapshot, plan, then insert the thought and its connections.
//!
//! [`add_thought`] is the single entry point. The snapshot read, the engine
//! plan, and the inserts of the thought row and every planned connection all
//! run inside one `BEGIN IMMEDIATE` transaction. Another connection to the
//! same file cannot commit a thought between the read and the write, and a
//! failure leaves the store as it was.

use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use serde::Serialize;

use super::types::{Thought, THOUGHT_COLUMNS};
use crate::engine::{Engine, Link, ThoughtId, ThoughtSnapshot};

/// Result returned from [`add_thought`].
#[derive(Debug, Serialize)]
pub struct AddThoughtResult {
    pub thought: Thought,
    /// Connections created by this insert, in the order the engine chose them.
    pub connections: Vec<Link>,
}

/// Store a new thought and link it to the existing ones.
pub fn add_thought(conn: &mut Connection, engine: &Engine, content: &str) -> Result<AddThoughtResult> {
    add_thought_at(conn, engine, content, 0.0, 0.0)
}

/// [`add_thought`] with a starting layout position, written in the same transaction.
pub fn add_thought_at(
    conn: &mut Connection,
    engine: &Engine,
    content: &str,
    x: f64,
    y: f64,
) -> Result<AddThoughtResult> {
    let content = content.trim();
    if content.is_empty() {
        bail!("content must not be empty");
    }
    if !x.is_finite() || !y.is_finite() {
        bail!("position must be finite, got ({x}, {y})");
    }

    // Take the write lock before reading so the plan sees the latest commit
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let existing = load_snapshot(&tx)?;
    let plan = engine.plan(content, &existing);

    let id = insert_thought(&tx, content, &plan.keywords, &plan.cluster, (x, y))?;

    let mut connections = Vec::with_capacity(plan.links.len());
    for link in plan.links_from(id) {
        if insert_connection(&tx, &link)? {
            connections.push(link);
        }
    }

    let thought = tx
        .query_row(
            &format!("SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE id = ?1"),
            params![id],
            Thought::from_row,
        )
        .context("failed to read back inserted thought")?;

    tx.commit()?;

    tracing::info!(
        id,
        cluster = %thought.cluster,
        keywords = thought.keywords.len(),
        connections = connections.len(),
        "thought added"
    );

    Ok(AddThoughtResult {
        thought,
        connections,
    })
}

/// What the engine reads of every stored thought, oldest first.
pub fn load_snapshot(conn: &Connection) -> Result<Vec<ThoughtSnapshot>> {
    let mut stmt = conn.prepare("SELECT id, keywords, cluster FROM thoughts ORDER BY id")?;
    let rows: Vec<(ThoughtId, String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(id, keywords, cluster)| {
            let keywords = serde_json::from_str(&keywords)
                .with_context(|| format!("thought {id} has malformed keywords"))?;
            Ok(ThoughtSnapshot {
                id,
                keywords,
                cluster,
            })
        })
        .collect()
}

/// Move a thought in the graph layout. Returns `false` if the id is unknown.
pub fn update_position(conn: &Connection, id: ThoughtId, x: f64, y: f64) -> Result<bool> {
    if !x.is_finite() || !y.is_finite() {
        bail!("position must be finite, got ({x}, {y})");
    }
    let rows = conn.execute(
        "UPDATE thoughts SET x = ?1, y = ?2 WHERE id = ?3",
        params![x, y, id],
    )?;
    Ok(rows > 0)
}

/// Insert a thought row. Returns the new id.
fn insert_thought(
    tx: &Transaction,
    content: &str,
    keywords: &[String],
    cluster: &str,
    (x, y): (f64, f64),
) -> Result<ThoughtId> {
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true);
    let keywords_json = serde_json::to_string(keywords)?;

    tx.execute(
        "INSERT INTO thoughts (content, keywords, cluster, x, y, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![content, keywords_json, cluster, x, y, now],
    )?;

    Ok(tx.last_insert_rowid())
}

/// Insert a connection unless its pair is already connected. Returns whether a row was written.
fn insert_connection(tx: &Transaction, link: &Link) -> Result<bool> {
    let rows = tx.execute(
        "INSERT OR IGNORE INTO connections (source_id, target_id, strength) VALUES (?1, ?2, ?3)",
        params![link.source_id, link.target_id, link.strength],
    )?;
    Ok(rows > 0)
}
