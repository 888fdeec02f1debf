mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use thought_threads::config::ThreadsConfig;
use thought_threads::server;

#[derive(Parser)]
#[command(
    name = "threads",
    version,
    about = "Capture thoughts and let them cluster and connect themselves"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Store a thought
    Add {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show keywords, cluster, and connections for a thought without storing it
    Analyze {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List stored thoughts, newest first
    List {
        /// Only thoughts in this cluster
        #[arg(long)]
        cluster: Option<String>,
    },
    /// Delete a thought and its connections
    Delete { id: i64 },
    /// Delete every thought (asks for confirmation)
    Reset,
    /// Show store statistics
    Stats,
    /// Export all thoughts as JSON to stdout
    Export,
    /// Re-add thoughts from an exported JSON file
    Import { file: PathBuf },
    /// Check database health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ThreadsConfig::load()?;

    // Log to stderr so stdout stays clean for `export`.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }
        Command::Add { text } => cli::add::add(&config, &text.join(" "))?,
        Command::Analyze { text } => cli::analyze::analyze(&config, &text.join(" "))?,
        Command::List { cluster } => cli::list::list(&config, cluster.as_deref())?,
        Command::Delete { id } => cli::delete::delete(&config, id)?,
        Command::Reset => cli::reset::reset(&config)?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Export => cli::export::export(&config)?,
        Command::Import { file } => cli::import::import(&config, &file)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
    }

    Ok(())
}
