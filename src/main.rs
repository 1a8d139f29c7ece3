//! Client address service.
//!
//! Serves `GET /ip`, which reports the address each request is attributed
//! to after applying the configured trusted forwarding headers.
//!
//! ```text
//!     Client ──▶ [trusted proxy] ──▶ listener ──▶ client_ip middleware ──▶ /ip
//!                                                   │
//!                                                   └─ trusted headers (config)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_utils::config::{check_config, load_config, ServiceConfig};
use edge_utils::observability::init_logging;
use edge_utils::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "edge-utils")]
#[command(about = "Reports the client address of each request", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    // CLI overrides follow the same rules as the file.
    let server = HttpServer::new(check_config(config)?);
    let config = server.config();

    init_logging(&config.observability.log_level)?;

    tracing::info!("edge-utils v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        trusted_headers = ?config.client_ip.trusted_headers,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shutdown.trigger(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                // Dropping `shutdown` here would stop the server.
                std::future::pending::<()>().await;
            }
        }
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
