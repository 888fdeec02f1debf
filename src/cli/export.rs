use anyhow::Result;

use thought_threads::config::ThreadsConfig;
use thought_threads::thoughts::graph;
use thought_threads::thoughts::types::Graph;

/// Export all thoughts (oldest first) and connections as JSON to stdout.
pub fn export(config: &ThreadsConfig) -> Result<()> {
    let conn = thought_threads::db::open_database(config.resolved_db_path())?;

    let mut data: Graph = graph::graph(&conn)?;
    data.thoughts.reverse();

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} thoughts and {} connections.",
        data.thoughts.len(),
        data.connections.len()
    );

    Ok(())
}
