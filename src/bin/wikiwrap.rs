//! Service binary for wikiwrap.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wikiwrap::{ContentServer, ServiceConfig};

/// wikiwrap: cleaned Wikipedia article text for a search term.
#[derive(Parser)]
#[command(name = "wikiwrap", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Override `server.port`.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Users can override with RUST_LOG=debug to see search terms.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wikiwrap=info,wikiwrap_fetch=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let server = ContentServer::start(&config).await.map_err(|e| {
        tracing::error!(error = %e, "wikiwrap failed to start");
        anyhow::anyhow!("wikiwrap failed to start: {e}")
    })?;

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    info!("wikiwrap shut down cleanly");
    Ok(())
}

/// Explicit paths must exist; the default path is optional.
fn load_config(explicit: Option<&std::path::Path>) -> anyhow::Result<ServiceConfig> {
    if let Some(path) = explicit {
        info!("loading config from {}", path.display());
        return Ok(ServiceConfig::from_file(path)?);
    }

    let default_path = ServiceConfig::default_config_path();
    if default_path.exists() {
        info!("loading config from {}", default_path.display());
        Ok(ServiceConfig::from_file(&default_path)?)
    } else {
        Ok(ServiceConfig::default())
    }
}
