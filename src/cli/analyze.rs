//! CLI `analyze` command: show what the engine would decide, without writing.

use anyhow::{ensure, Result};
use std::collections::HashMap;

use thought_threads::config::ThreadsConfig;
use thought_threads::engine::Engine;
use thought_threads::thoughts::{graph, store};

/// Dry-run the engine for `text` against the current store.
pub fn analyze(config: &ThreadsConfig, text: &str) -> Result<()> {
    let text = text.trim();
    ensure!(!text.is_empty(), "content is required");

    let conn = thought_threads::db::open_database(config.resolved_db_path())?;
    let engine = Engine::new(config.engine.clone());

    let existing = store::load_snapshot(&conn)?;
    let plan = engine.plan(text, &existing);

    println!("Analysis (nothing stored)");
    println!("{}", "=".repeat(40));
    println!("Keywords:");
    if plan.keywords.is_empty() {
        println!("  (none)");
    }
    for keyword in &plan.keywords {
        match engine.category_of(keyword) {
            Some(category) => println!("  {keyword:<20} {category}"),
            None => println!("  {keyword:<20} -"),
        }
    }
    println!();
    println!("Cluster:  {} ({})", plan.cluster, plan.basis);
    println!();

    if plan.links.is_empty() {
        println!("No connections to {} existing thoughts.", existing.len());
        return Ok(());
    }

    let contents: HashMap<_, _> = graph::list_thoughts(&conn, None)?
        .into_iter()
        .map(|t| (t.id, t.content))
        .collect();

    println!("Would connect to:");
    for link in &plan.links {
        let content = contents.get(&link.target_id).map(String::as_str).unwrap_or("");
        println!(
            "  #{:<5} {:.3}  {}",
            link.target_id,
            link.strength,
            super::preview(content, 60)
        );
    }

    Ok(())
}
