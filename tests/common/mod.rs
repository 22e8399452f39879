//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use chain_service::config::{DatabaseConfig, DownstreamConfig, ServiceConfig};
use chain_service::http::HttpServer;
use chain_service::observability::Telemetry;
use http_body_util::BodyExt;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracerProvider};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Telemetry over an in-memory exporter; spans finish synchronously, so
/// tests can read them as soon as the response arrives.
pub fn test_telemetry() -> (Arc<Telemetry>, InMemorySpanExporter) {
    let exporter = InMemorySpanExporter::default();
    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(exporter.clone())
        .build();
    (Arc::new(Telemetry::new(provider)), exporter)
}

/// Spawn a relay hop on an ephemeral port, forwarding to `downstream`.
pub async fn spawn_relay(name: &str, downstream: &str, telemetry: Arc<Telemetry>) -> SocketAddr {
    let mut config = ServiceConfig::default();
    config.service.name = name.to_string();
    config.downstream = Some(DownstreamConfig {
        url: downstream.to_string(),
    });
    spawn_service(config, telemetry).await
}

/// Spawn a terminal hop on an ephemeral port, querying `database`.
pub async fn spawn_terminal(
    name: &str,
    database: DatabaseConfig,
    telemetry: Arc<Telemetry>,
) -> SocketAddr {
    let mut config = ServiceConfig::default();
    config.service.name = name.to_string();
    config.database = Some(database);
    spawn_service(config, telemetry).await
}

async fn spawn_service(config: ServiceConfig, telemetry: Arc<Telemetry>) -> SocketAddr {
    let server = HttpServer::new(&config, telemetry).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

/// Bind and immediately release an ephemeral port, leaving it vacant.
pub async fn vacant_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Start a mock downstream that returns a fixed JSON body.
pub async fn start_mock_downstream(body: &'static str) -> SocketAddr {
    start_programmable_downstream(move || async move { (200, body.to_string()) }).await
}

/// Start a programmable mock downstream with async support.
pub async fn start_programmable_downstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 8192];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock downstream that records each request head it receives.
pub async fn start_capturing_downstream(
    body: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let sink = sink.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        sink.lock()
                            .unwrap()
                            .push(String::from_utf8_lossy(&buf[..n]).to_string());

                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, captured)
}

/// Issue one GET against a spawned service.
pub async fn get(addr: SocketAddr, path: &str) -> (StatusCode, HeaderMap, Bytes) {
    let client: Client<HttpConnector, Body> =
        Client::builder(TokioExecutor::new()).build(HttpConnector::new());
    let uri = format!("http://{addr}{path}");

    let response = client
        .request(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    (parts.status, parts.headers, bytes)
}
