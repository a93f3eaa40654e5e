mod client;
mod commands;

use anyhow::{Context, Result};
use bosun_core::config::BosunConfig;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{client::HttpStore, commands::build_list};

#[derive(Parser)]
#[command(name = "bosun")]
#[command(about = "Inspect builds run by an orchestrator agent")]
struct Cli {
    /// Agent API URL [default: http://localhost:7080]
    #[arg(long, env = "BOSUN_AGENT_URL")]
    agent_url: Option<String>,

    /// Path to a bosun.yaml config file
    #[arg(long, env = "BOSUN_CONFIG")]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage builds
    Build {
        #[command(subcommand)]
        command: BuildCommands,
    },
}

#[derive(Subcommand)]
enum BuildCommands {
    /// List builds, optionally only those of one project
    List(build_list::BuildListArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BosunConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BosunConfig::default(),
    };
    let agent_url = config.resolve_agent_url(cli.agent_url.as_deref())?;
    debug!(agent_url = %agent_url, "Resolved agent");
    let store = HttpStore::new(agent_url)?;

    match &cli.command {
        Commands::Build { command } => match command {
            BuildCommands::List(args) => {
                build_list::execute(&store, args).await?;
            }
        },
    }

    Ok(())
}
