//! Factor Service
//!
//! Accepts a list of integers and a divisor in a SOAP-style envelope and
//! answers with the numbers evenly divisible by it.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /factorservice         ┌─────────┐   ┌──────────┐   ┌────────┐
//!     ───────────────────────────▶│  http   │──▶│ envelope │──▶│ factor │
//!                                 │ handler │   │  decode  │   │ filter │
//!     ◀───────────────────────────│         │◀──│  encode  │◀──│        │
//!     text/xml (result | fault)   └─────────┘   └──────────┘   └────────┘
//!
//!     GET /factorservice  → descriptor document (rendered once at startup)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use factor_service::config::{load_config, ServiceConfig};
use factor_service::lifecycle::{signals, Shutdown};
use factor_service::observability::{logging, metrics};
use factor_service::HttpServer;

#[derive(Parser)]
#[command(name = "factor-service")]
#[command(about = "SOAP-style XML service that filters numbers by a divisor", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability);
    tracing::info!("factor-service v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        path = %config.service.path,
        public_url = %config.service.public_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Descriptor available at {}?wsdl",
        config.service.public_url
    );

    let shutdown = Shutdown::new();
    signals::spawn_listener(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
