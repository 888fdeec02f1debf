//! CLI `add` command: store a thought through the full engine.

use anyhow::{ensure, Result};

use thought_threads::config::ThreadsConfig;
use thought_threads::engine::Engine;
use thought_threads::thoughts::store;

/// Add a thought and print where it landed.
pub fn add(config: &ThreadsConfig, text: &str) -> Result<()> {
    ensure!(!text.trim().is_empty(), "content is required");

    let mut conn = thought_threads::db::open_database(config.resolved_db_path())?;
    let engine = Engine::new(config.engine.clone());

    let result = store::add_thought(&mut conn, &engine, text)?;
    let thought = &result.thought;

    println!("Thought #{} added", thought.id);
    println!("  Cluster:     {}", thought.cluster);
    println!("  Keywords:    {}", thought.keywords.join(", "));
    println!("  Connections: {}", result.connections.len());
    for link in &result.connections {
        println!("    -> #{} ({:.3})", link.target_id, link.strength);
    }

    Ok(())
}
