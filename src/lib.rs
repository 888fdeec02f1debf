//! Thought Threads: capture short free-text thoughts and watch them organize
//! themselves into a graph.
//!
//! Each new thought gets a keyword list, a cluster label, and weighted links
//! to the thoughts already stored. All of that is decided by a deterministic
//! engine over a fixed semantic dictionary; no model or network call is
//! involved.
//!
//! # Pipeline
//!
//! | Step | Rule |
//! |------|------|
//! | **Keywords** | lowercase, strip punctuation, drop stop words and short tokens, dedupe by stem, keep 10 |
//! | **Similarity** | `0.6 * jaccard(stems) + 0.4 * category overlap` |
//! | **Cluster** | dictionary category vote, else most similar existing cluster, else `ideas` |
//! | **Links** | similarity above 0.15, plus a 0.1 link to every same-cluster thought |
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`db`]: SQLite database initialization, schema, migrations, and health checks
//! - [`engine`]: Keyword extraction, similarity, clustering, and linking
//! - [`thoughts`]: Store operations: add, list, delete, position, stats
//! - [`api`]: JSON routes for the graph UI
//! - [`server`]: HTTP server setup

pub mod api;
pub mod config;
pub mod db;
pub mod engine;
pub mod server;
pub mod thoughts;
