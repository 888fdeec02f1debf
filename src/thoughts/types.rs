//! Stored record types, matching the `thoughts` and `connections` tables.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::engine::{Link, ThoughtId};

/// A thought row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thought {
    pub id: ThoughtId,
    /// Trimmed user text, never empty.
    pub content: String,
    /// Up to ten surface-form keywords, in order of first appearance.
    pub keywords: Vec<String>,
    pub cluster: String,
    /// Layout position owned by the graph UI.
    pub x: f64,
    pub y: f64,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Columns selected for a [`Thought`], in [`Thought::from_row`] order.
pub(crate) const THOUGHT_COLUMNS: &str = "id, content, keywords, cluster, x, y, created_at";

impl Thought {
    /// Decode a row selected with [`THOUGHT_COLUMNS`].
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let keywords_json: String = row.get(2)?;
        let keywords = serde_json::from_str(&keywords_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            keywords,
            cluster: row.get(3)?,
            x: row.get(4)?,
            y: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

/// A connection row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredConnection {
    pub id: i64,
    pub source_id: ThoughtId,
    pub target_id: ThoughtId,
    pub strength: f64,
}

impl StoredConnection {
    pub fn link(&self) -> Link {
        Link {
            source_id: self.source_id,
            target_id: self.target_id,
            strength: self.strength,
        }
    }
}

/// Everything the graph UI needs to draw the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub thoughts: Vec<Thought>,
    pub connections: Vec<StoredConnection>,
}
