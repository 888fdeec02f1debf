use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::params;
use std::path::Path;

use thought_threads::config::ThreadsConfig;
use thought_threads::engine::Engine;
use thought_threads::thoughts::store;
use thought_threads::thoughts::types::Graph;

/// Import thoughts from a JSON file written by `export`.
///
/// Each thought is re-added through the full engine in creation order, so
/// keywords, clusters, and connections are recomputed against the current
/// store. Exported connections are not copied. Thoughts whose content is
/// already stored are skipped; layout positions are kept.
///
/// Each thought commits on its own, together with its position and links. A
/// failed import keeps the thoughts before the failure, and running it again
/// skips them.
pub fn import(config: &ThreadsConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let mut data: Graph = serde_json::from_str(&json).context("failed to parse import JSON")?;
    data.thoughts
        .sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let mut conn = thought_threads::db::open_database(config.resolved_db_path())?;
    let engine = Engine::new(config.engine.clone());

    println!("Importing {} thoughts...", data.thoughts.len());

    let pb = ProgressBar::new(data.thoughts.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .context("invalid progress template")?
            .progress_chars("##-"),
    );

    let mut imported = 0u64;
    let mut skipped = 0u64;
    let mut connections = 0u64;

    for thought in &data.thoughts {
        pb.inc(1);

        let content = thought.content.trim();
        let exists: bool = conn.query_row(
            "SELECT COUNT(*) > 0 FROM thoughts WHERE content = ?1",
            params![content],
            |row| row.get(0),
        )?;
        if content.is_empty() || exists {
            skipped += 1;
            continue;
        }

        let result = store::add_thought_at(&mut conn, &engine, content, thought.x, thought.y)
            .with_context(|| format!("failed to import thought {}", thought.id))?;

        imported += 1;
        connections += result.connections.len() as u64;
    }

    pb.finish_and_clear();

    println!("Import complete:");
    println!("  Thoughts imported:   {imported}");
    println!("  Thoughts skipped:    {skipped} (blank or already stored)");
    println!("  Connections created: {connections}");

    Ok(())
}
