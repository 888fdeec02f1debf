//! Read path: thoughts, connections, and the combined graph.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use super::types::{Graph, StoredConnection, Thought, THOUGHT_COLUMNS};
use crate::engine::connect::LinkSet;
use crate::engine::ThoughtId;

/// All thoughts, newest first, optionally restricted to one cluster.
pub fn list_thoughts(conn: &Connection, cluster: Option<&str>) -> Result<Vec<Thought>> {
    let thoughts = match cluster {
        Some(cluster) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE cluster = ?1 \
                 ORDER BY created_at DESC, id DESC"
            ))?;
            let rows = stmt.query_map(params![cluster], Thought::from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {THOUGHT_COLUMNS} FROM thoughts ORDER BY created_at DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], Thought::from_row)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(thoughts)
}

/// A single thought by id.
pub fn get_thought(conn: &Connection, id: ThoughtId) -> Result<Option<Thought>> {
    let thought = conn
        .query_row(
            &format!("SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE id = ?1"),
            params![id],
            Thought::from_row,
        )
        .optional()?;
    Ok(thought)
}

/// All connections in insertion order.
pub fn list_connections(conn: &Connection) -> Result<Vec<StoredConnection>> {
    let mut stmt =
        conn.prepare("SELECT id, source_id, target_id, strength FROM connections ORDER BY id")?;
    let connections = stmt
        .query_map([], |row| {
            Ok(StoredConnection {
                id: row.get(0)?,
                source_id: row.get(1)?,
                target_id: row.get(2)?,
                strength: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(connections)
}

/// Index of every stored connection by unordered endpoint pair.
pub fn load_links(conn: &Connection) -> Result<LinkSet> {
    let connections = list_connections(conn)?;
    let mut links = LinkSet::new();
    links.extend(connections.iter().map(StoredConnection::link));
    Ok(links)
}

/// Thoughts and connections together, as the graph UI consumes them.
pub fn graph(conn: &Connection) -> Result<Graph> {
    Ok(Graph {
        thoughts: list_thoughts(conn, None)?,
        connections: list_connections(conn)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::engine::Engine;
    use crate::thoughts::store::add_thought;

    #[test]
    fn list_filters_by_cluster_newest_first() {
        let mut conn = db::open_memory_database().unwrap();
        let engine = Engine::default();
        let a = add_thought(&mut conn, &engine, "python coding").unwrap().thought;
        add_thought(&mut conn, &engine, "nurse shift at the hospital").unwrap();
        let c = add_thought(&mut conn, &engine, "rust programming").unwrap().thought;

        let all = list_thoughts(&conn, None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, c.id);

        let tech = list_thoughts(&conn, Some("Software Development")).unwrap();
        let ids: Vec<ThoughtId> = tech.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c.id, a.id]);

        assert!(list_thoughts(&conn, Some("nowhere")).unwrap().is_empty());
    }

    #[test]
    fn get_missing_thought_is_none() {
        let conn = db::open_memory_database().unwrap();
        assert!(get_thought(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn graph_includes_connections() {
        let mut conn = db::open_memory_database().unwrap();
        let engine = Engine::default();
        add_thought(&mut conn, &engine, "python coding").unwrap();
        let second = add_thought(&mut conn, &engine, "python coding tips").unwrap();

        let graph = graph(&conn).unwrap();
        assert_eq!(graph.thoughts.len(), 2);
        assert_eq!(graph.connections.len(), second.connections.len());

        let links = load_links(&conn).unwrap();
        assert!(links.contains(1, 2));
        assert!(links.contains(2, 1));
    }
}
