use anyhow::Result;

use thought_threads::config::ThreadsConfig;
use thought_threads::thoughts::graph;

/// List stored thoughts, newest first.
pub fn list(config: &ThreadsConfig, cluster: Option<&str>) -> Result<()> {
    let conn = thought_threads::db::open_database(config.resolved_db_path())?;
    let thoughts = graph::list_thoughts(&conn, cluster)?;

    if thoughts.is_empty() {
        match cluster {
            Some(c) => println!("No thoughts in cluster \"{c}\"."),
            None => println!("No thoughts yet."),
        }
        return Ok(());
    }

    for t in &thoughts {
        println!(
            "#{:<5} {:<28} {}",
            t.id,
            super::preview(&t.cluster, 26),
            super::preview(&t.content, 70)
        );
    }
    println!();
    println!("{} thought(s)", thoughts.len());

    Ok(())
}
