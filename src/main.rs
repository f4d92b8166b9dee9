use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jotboard::config::JotboardConfig;
use jotboard::server;

#[derive(Parser)]
#[command(name = "jotboard", version, about = "Capped in-memory note board")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Maximum number of notes held at once (overrides config)
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = JotboardConfig::load()?;

    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve {
            host,
            port,
            capacity,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(capacity) = capacity {
                config.store.capacity = capacity;
            }
            server::serve(config).await?;
        }
        Command::Config => {
            let rendered =
                toml::to_string_pretty(&config).context("failed to render config")?;
            print!("{rendered}");
        }
    }

    Ok(())
}
