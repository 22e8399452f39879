//! Bounded, ordered read of the `users` table.

use chrono::{Local, NaiveDateTime};
use opentelemetry::trace::{SpanKind, Status, TraceContextExt};
use opentelemetry::Context;
use serde::Serialize;
use tokio_postgres::{NoTls, Row};

use crate::config::DatabaseConfig;
use crate::error::ChainError;
use crate::observability::Telemetry;

/// Textual timestamp pattern used throughout the response payload.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// At most ten rows leave the store, ascending by id.
const USERS_QUERY: &str = "SELECT id, name, email, created_at FROM users ORDER BY id LIMIT 10";

/// One shaped record from the store.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created: String,
}

impl UserRecord {
    fn from_row(row: &Row) -> Result<Self, ChainError> {
        let created: NaiveDateTime = row.try_get("created_at").map_err(ChainError::Scan)?;
        Ok(Self {
            id: row.try_get("id").map_err(ChainError::Scan)?,
            name: row.try_get("name").map_err(ChainError::Scan)?,
            email: row.try_get("email").map_err(ChainError::Scan)?,
            created: created.format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}

/// Terminal hop response payload.
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub service: String,
    pub timestamp: String,
    pub users: Vec<UserRecord>,
}

impl DataResponse {
    /// Wrap shaped records with the service identity and the current time.
    pub fn new(service: &str, users: Vec<UserRecord>) -> Self {
        Self {
            service: service.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            users,
        }
    }
}

/// Fetch the bounded user set inside a `database-query-users` span.
///
/// The span nests one level under the caller's server span. Connect, query,
/// and scan each fail with their own variant so the classes stay
/// distinguishable in logs even though they share a status code.
pub async fn fetch_users(
    telemetry: &Telemetry,
    database: &DatabaseConfig,
    parent_cx: &Context,
) -> Result<Vec<UserRecord>, ChainError> {
    let cx = telemetry.start_span("database-query-users", SpanKind::Internal, parent_cx);

    let result = query_users(database).await;

    if let Err(err) = &result {
        cx.span().set_status(Status::error(err.to_string()));
    }
    cx.span().end();

    result
}

async fn query_users(database: &DatabaseConfig) -> Result<Vec<UserRecord>, ChainError> {
    let (client, connection) = tokio_postgres::connect(&database.connection_string(), NoTls)
        .await
        .map_err(ChainError::Connect)?;

    // The connection task drains itself once `client` drops at the end of
    // the request; no pooling, no reuse.
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            tracing::warn!(error = %err, "Database connection error");
        }
    });

    let rows = client
        .query(USERS_QUERY, &[])
        .await
        .map_err(ChainError::Query)?;

    rows.iter().map(UserRecord::from_row).collect()
}
