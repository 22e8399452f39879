//! Traced service chain entry point.
//!
//! # Architecture Overview
//!
//! ```text
//!  caller          service A (relay)       service B (relay)       service C (terminal)
//!    │ GET /api/data   │                       │                       │
//!    ├─────────────────▶ server span           │                       │
//!    │                 │ client span ─────────▶ server span            │
//!    │                 │  traceparent/baggage │ client span ──────────▶ server span
//!    │                 │                      │                       │ db span ──▶ Postgres
//!    │  bytes ◀────────┴── body relay ◀───────┴── body relay ◀────────┴── payload
//! ```
//!
//! Every hop runs this same binary; configuration decides whether it relays
//! to a downstream peer or queries the store. Spans export over OTLP; the
//! exporter is initialized once at startup (the only process-fatal error)
//! and flushed once on shutdown.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain_service::config;
use chain_service::http::HttpServer;
use chain_service::observability::{init_tracer_provider, Telemetry};

/// One hop of a traced service chain.
#[derive(Parser, Debug)]
#[command(name = "chain-service", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chain_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config(&args.config)?;

    tracing::info!(
        service = %config.service.name,
        bind_address = %config.service.bind_address,
        otlp_endpoint = %config.telemetry.otlp_endpoint,
        "Configuration loaded"
    );

    // Span export is the only process-wide state: initialized once here,
    // flushed once on the way out.
    let provider = init_tracer_provider(&config)?;
    let telemetry = Arc::new(Telemetry::new(provider.clone()));

    let server = HttpServer::new(&config, telemetry)?;

    let listener = TcpListener::bind(&config.service.bind_address).await?;
    tracing::info!(
        service = %config.service.name,
        address = %listener.local_addr()?,
        "Service is running"
    );

    server.run(listener).await?;

    if let Err(err) = provider.shutdown() {
        tracing::warn!(error = %err, "Error shutting down tracer provider");
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
