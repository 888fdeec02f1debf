use anyhow::{bail, Result};

use thought_threads::config::ThreadsConfig;
use thought_threads::engine::ThoughtId;
use thought_threads::thoughts::forget;

/// Delete one thought and its connections.
pub fn delete(config: &ThreadsConfig, id: ThoughtId) -> Result<()> {
    let mut conn = thought_threads::db::open_database(config.resolved_db_path())?;
    let result = forget::delete_thought(&mut conn, id)?;

    if !result.deleted {
        bail!("no thought with id {id}");
    }

    println!(
        "Deleted thought #{} and {} connection(s).",
        result.id, result.connections_removed
    );
    Ok(())
}
