//! Endpoint handlers for one chain hop.
//!
//! `data_handler` is the per-service state machine: extract the inherited
//! trace context, open the server span, perform the role's single
//! downstream action, and write the result (or the error's fixed plain-text
//! message) back to the caller. `health_handler` is deliberately boring:
//! no tracing, no downstream calls, unaffected by data-path failures.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use opentelemetry::trace::{SpanKind, Status, TraceContextExt};
use serde::Serialize;

use crate::http::request::{self, X_REQUEST_ID};
use crate::http::server::AppState;
use crate::pipeline::{forward, Role};
use crate::store;

/// Fixed health payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// `GET /health`: always healthy, independent of peers and store.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.service_name.clone(),
    })
}

/// `GET /api/data`: the forwarding pipeline.
pub async fn data_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = request::request_id(&headers);

    // Received: reconstruct the caller's context; a hop called without
    // trace headers starts a new root.
    let parent_cx = state.telemetry.extract(&headers);
    let cx = state
        .telemetry
        .start_span("api-data", SpanKind::Server, &parent_cx);

    tracing::debug!(request_id = %request_id, "Handling data request");

    // Dispatching: exactly one downstream action, fixed per instance.
    let result = match state.role.as_ref() {
        Role::Relay { downstream } => forward::call_next_hop(
            &state.telemetry,
            &state.client,
            downstream,
            &request_id,
            &cx,
        )
        .await
        .map(|body| {
            // Pass the downstream bytes through untouched; no re-encoding,
            // no inspection of their shape.
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }),
        Role::Terminal { database } => {
            store::users::fetch_users(&state.telemetry, database, &cx)
                .await
                .map(|users| {
                    Json(store::users::DataResponse::new(&state.service_name, users))
                        .into_response()
                })
        }
    };

    // Responding: the server span closes on both paths before the handler
    // returns.
    match result {
        Ok(mut response) => {
            cx.span().end();
            if let Ok(value) = header::HeaderValue::from_str(&request_id) {
                response.headers_mut().insert(X_REQUEST_ID, value);
            }
            response
        }
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "Data request failed");
            cx.span().set_status(Status::error(err.to_string()));
            cx.span().end();
            (err.status(), err.to_string()).into_response()
        }
    }
}
