//! Bifrost connector command line.
//!
//! ```text
//! bifrost-connector [--config connector.toml] info
//! bifrost-connector [--config connector.toml] submit 48656c6c6f
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use bifrost_connector::config::load_from_env;
use bifrost_connector::observability::{logging, metrics};
use bifrost_connector::Connector;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bifrost-connector")]
#[command(about = "Put encoded messages on a Topl Bifrost ledger", long_about = None)]
struct Cli {
    /// Configuration file (defaults to $BIFROST_CONNECTOR_CONFIG or config/connector.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the node and print its chain metadata
    Info,
    /// Submit an already encoded payload
    Submit {
        /// Encoded payload, carried verbatim as transaction data
        payload: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_from_env(cli.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("bifrost-connector v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let connector = Connector::new(&config.ledger)?;
    connector.initialize().await?;

    match cli.command {
        Commands::Info => {
            let info = connector.chain_info().unwrap_or_default();
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Submit { payload } => {
            let result = connector.submit(&payload).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
