use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ThreadsConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Directory holding the built graph UI. Served for any non-API path.
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

/// Thresholds and limits for keyword extraction, clustering, and linking.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Keywords kept per thought.
    pub max_keywords: usize,
    /// Similarity a pair must exceed to get a direct edge.
    pub link_threshold: f64,
    /// Similarity an existing thought must exceed to vote for its cluster.
    pub cluster_vote_threshold: f64,
    /// Strength of the edge between otherwise unlinked thoughts in one cluster.
    pub same_cluster_strength: f64,
    /// Cluster for thoughts no category or neighbour claims.
    pub default_cluster: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3001,
            log_level: "info".into(),
            static_dir: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_threads_dir()
            .join("threads.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_keywords: crate::engine::keywords::MAX_KEYWORDS,
            link_threshold: 0.15,
            cluster_vote_threshold: 0.1,
            same_cluster_strength: 0.1,
            default_cluster: "ideas".into(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_keywords > 0, "engine.max_keywords must be at least 1");
        ensure!(
            !self.default_cluster.trim().is_empty(),
            "engine.default_cluster must not be empty"
        );
        ensure!(
            (0.0..=1.0).contains(&self.link_threshold),
            "engine.link_threshold must be between 0.0 and 1.0"
        );
        ensure!(
            (0.0..=1.0).contains(&self.cluster_vote_threshold),
            "engine.cluster_vote_threshold must be between 0.0 and 1.0"
        );
        ensure!(
            self.same_cluster_strength > 0.0 && self.same_cluster_strength <= 1.0,
            "engine.same_cluster_strength must be in (0.0, 1.0]"
        );
        Ok(())
    }
}

/// Returns `~/.thought-threads/`
pub fn default_threads_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".thought-threads")
}

/// Returns the default config file path: `~/.thought-threads/config.toml`
pub fn default_config_path() -> PathBuf {
    default_threads_dir().join("config.toml")
}

impl ThreadsConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            ThreadsConfig::default()
        };

        config.apply_env_overrides()?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides (THREADS_DB, THREADS_HOST, THREADS_PORT, THREADS_LOG_LEVEL).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("THREADS_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("THREADS_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("THREADS_PORT") {
            self.server.port = val
                .parse()
                .with_context(|| format!("THREADS_PORT is not a valid port: {val}"))?;
        }
        if let Ok(val) = std::env::var("THREADS_LOG_LEVEL") {
            self.server.log_level = val;
        }
        Ok(())
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// `host:port` for the HTTP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
