//! CLI `reset` command: delete every thought after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use thought_threads::config::ThreadsConfig;
use thought_threads::thoughts::forget;

/// Delete all thoughts and connections after user confirmation.
pub fn reset(config: &ThreadsConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL thoughts and connections.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let mut conn = thought_threads::db::open_database(&db_path)?;
    let result = forget::clear_all(&mut conn)?;

    println!(
        "Removed {} thoughts and {} connections. Database reset complete.",
        result.thoughts_removed, result.connections_removed
    );
    Ok(())
}
