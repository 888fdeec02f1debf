//! CLI `doctor` command: run database diagnostics and print a health report.

use anyhow::{Context, Result};

use thought_threads::config::ThreadsConfig;
use thought_threads::db::{self, migrations::CURRENT_SCHEMA_VERSION};

/// Run database diagnostics and print a health report.
pub fn doctor(config: &ThreadsConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `threads serve` or `threads add` to initialize.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    let conn = db::open_database(&db_path).context("failed to open database (may be corrupt)")?;

    let report = db::check_database_health(&conn).context("failed to run health check")?;

    println!("Thought Threads Health Report");
    println!("=============================");
    println!();
    println!("Database:          {}", db_path.display());
    println!("File size:         {}", super::format_bytes(file_size));
    println!(
        "Schema version:    {} (expected {CURRENT_SCHEMA_VERSION})",
        report.schema_version
    );
    println!();
    println!("Row counts:");
    println!("  Thoughts:        {}", report.thought_count);
    println!("  Connections:     {}", report.connection_count);
    if report.dangling_connections > 0 {
        println!(
            "  WARNING: {} connection(s) point at missing thoughts.",
            report.dangling_connections
        );
    }
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery steps:");
        println!("  1. Export what is still readable: threads export > backup.json");
        println!("  2. Move the damaged file aside: mv {} {}.bad", db_path.display(), db_path.display());
        println!("  3. Re-import: threads import backup.json");
    }

    Ok(())
}
