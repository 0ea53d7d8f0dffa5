//! Card relay server.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                  CARD RELAY                  │
//!   Browser             │                                              │
//!   POST/OPTIONS ───────┼─▶ http::server ──▶ http::handler             │
//!                       │    (trace, id,      │  OPTIONS → 200, empty  │
//!                       │     timeout,        ▼                        │
//!                       │     CORS)      relay::request (validate)     │
//!                       │                     │                        │
//!                       │                     ▼                        │
//!                       │                relay::target (build URL)     │
//!                       │                     │                        │
//!                       │                     ▼                        │
//!                       │                relay::upstream ──────────────┼──▶ Upstream
//!                       │                     │             GET        │     API
//!   Envelope JSON       │                     ▼                        │
//!   ◀───────────────────┼──────────── relay::envelope                  │
//!                       └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use card_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use card_relay::http::HttpServer;
use card_relay::lifecycle::{wait_for_signal, Shutdown};
use card_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "card-relay")]
#[command(about = "Relay browser card requests to the upstream API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!("card-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        path = %config.listener.path,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        verify_tls = config.upstream.verify_tls,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
