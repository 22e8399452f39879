//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the data and health handlers
//! - Build shared state (role, telemetry handle, outbound client)
//! - Serve with graceful shutdown

use std::sync::Arc;

use axum::{routing::get, Router};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{ServiceConfig, ValidationError};
use crate::http::handlers::{data_handler, health_handler};
use crate::observability::Telemetry;
use crate::pipeline::{forward::HttpClient, Role};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub role: Arc<Role>,
    pub telemetry: Arc<Telemetry>,
    pub client: HttpClient,
}

/// HTTP server for one chain hop.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server from configuration.
    ///
    /// Fails when the configuration names no usable role (neither a
    /// downstream peer nor a database).
    pub fn new(config: &ServiceConfig, telemetry: Arc<Telemetry>) -> Result<Self, ValidationError> {
        let role = Role::from_config(config)?;

        // One client per service; each outbound request is still built fresh.
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            service_name: config.service.name.clone(),
            role: Arc::new(role),
            telemetry,
            client,
        };

        let router = Router::new()
            .route("/api/data", get(data_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
