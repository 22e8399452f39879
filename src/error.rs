//! Request-scoped error taxonomy for the forwarding pipeline.
//!
//! Every error here is terminal for its request: the `Display` message
//! becomes the entire plain-text response body and the variant decides the
//! status code. Nothing escalates to process-level failure; the process
//! keeps serving subsequent requests.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while handling one chain request.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The outbound call to the downstream peer could not be created or
    /// completed.
    #[error("failed to call next hop")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The admission gate refused the read; no data is available.
    #[error("no data available from downstream")]
    EndOfStream,

    /// The downstream response body could not be read to completion.
    #[error("failed to read downstream response")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The database connection could not be established.
    #[error("failed to connect to database")]
    Connect(#[source] tokio_postgres::Error),

    /// The database rejected or failed the query.
    #[error("failed to query database")]
    Query(#[source] tokio_postgres::Error),

    /// A result row could not be decoded.
    #[error("failed to scan database row")]
    Scan(#[source] tokio_postgres::Error),
}

impl ChainError {
    /// HTTP status written with the failure response.
    ///
    /// Transport failure is the caller-visible 502 class; everything else
    /// (relay and store failures) is a 500. The classes stay distinguishable
    /// through their messages, not their statuses.
    pub fn status(&self) -> StatusCode {
        match self {
            ChainError::Transport(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
