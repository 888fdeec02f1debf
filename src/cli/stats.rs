use anyhow::Result;

use thought_threads::config::ThreadsConfig;

/// Display store statistics in the terminal.
pub fn stats(config: &ThreadsConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = thought_threads::db::open_database(&db_path)?;

    let response = thought_threads::thoughts::stats::thought_stats(&conn, Some(&db_path))?;

    println!("Thought Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total thoughts:      {}", response.total_thoughts);
    println!("  Connections:         {}", response.total_connections);
    println!("  Isolated thoughts:   {}", response.isolated_thoughts);
    println!("  Mean strength:       {:.3}", response.mean_strength);
    println!();

    if !response.by_cluster.is_empty() {
        let mut clusters: Vec<_> = response.by_cluster.iter().collect();
        // Largest first, ties alphabetical
        clusters.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        println!("By Cluster:");
        for (cluster, count) in clusters {
            println!("  {:<28} {}", cluster, count);
        }
        println!();
    }

    println!("Database size:         {}", super::format_bytes(response.db_size_bytes));

    if let Some(ref oldest) = response.oldest_thought {
        println!("Oldest thought:        {oldest}");
    }
    if let Some(ref newest) = response.newest_thought {
        println!("Newest thought:        {newest}");
    }

    Ok(())
}
