use anyhow::Context;
use clap::Parser;
use pricedb::config::Config;
use pricedb::logging::init_logging;
use pricedb::server::Server;
use tracing::info;

/// Concurrent in-memory price store served over HTTP
#[derive(Debug, Parser)]
#[command(name = "pricedb", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides `server_addr` from the config file
    #[arg(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(addr) = args.addr {
        config.server_addr = addr;
    }

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(&config.log)?;

    info!("Starting PriceDB - concurrent price store");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let server = Server::bind(&config)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    // Serve until the process is terminated
    server.run().await?;

    Ok(())
}
