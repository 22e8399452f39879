//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for one chain
//! hop. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for one service in the chain.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service identity and listener settings.
    pub service: ServiceSection,

    /// Trace export settings.
    pub telemetry: TelemetryConfig,

    /// Downstream peer to forward to (relay hops only).
    pub downstream: Option<DownstreamConfig>,

    /// Relational store to query (terminal hop only).
    pub database: Option<DatabaseConfig>,
}

/// Service identity and listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceSection {
    /// Service name reported in health responses and trace resources.
    pub name: String,

    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            name: "chain-service".to_string(),
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Trace export settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// OTLP/HTTP collector endpoint receiving span batches.
    pub otlp_endpoint: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: "http://localhost:4318/v1/traces".to_string(),
        }
    }
}

/// Downstream peer configuration for relay hops.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownstreamConfig {
    /// Full URL of the peer's data endpoint
    /// (e.g., "http://api-service-2:8080/api/data").
    pub url: String,
}

/// Relational store configuration for the terminal hop.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,

    /// Database port.
    pub port: u16,

    /// Database user.
    pub user: String,

    /// Database password.
    pub password: String,

    /// Database name.
    pub dbname: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "database".to_string(),
            port: 5432,
            user: "testuser".to_string(),
            password: "testpass".to_string(),
            dbname: "testdb".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Render the connection string understood by the Postgres client.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.dbname
        )
    }
}
