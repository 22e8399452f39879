//! Request correlation ids.
//!
//! # Responsibilities
//! - Reuse the caller's `x-request-id` when present
//! - Mint a fresh id otherwise
//!
//! # Design Decisions
//! - The id is observability-only: it decorates logs and flows downstream,
//!   but never influences dispatch

use axum::http::HeaderMap;
use uuid::Uuid;

/// Correlation header shared across the chain.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Resolve the request id for an inbound request.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
