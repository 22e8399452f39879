//! Outbound forwarding to the downstream peer.
//!
//! Builds a fresh request per inbound request, wraps the exchange in a
//! client span, and injects the active trace context into the outbound
//! headers so the peer's server span parents under this one. The span is
//! purely an observability layer around the call: no retries, no timeout
//! injection.

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use opentelemetry::trace::{SpanKind, Status, TraceContextExt};
use opentelemetry::Context;

use crate::error::ChainError;
use crate::http::request::X_REQUEST_ID;
use crate::observability::Telemetry;
use crate::pipeline::relay;

/// Outbound HTTP client shared by all relay calls of one service.
pub type HttpClient = Client<HttpConnector, Body>;

/// Call the downstream peer and relay its response body.
///
/// A completed exchange is the success path regardless of the peer's status
/// code; its bytes pass through verbatim. Transport failure (the call could
/// not be created or completed) and relay failure (the body could not be
/// read) stay distinct for the caller's status mapping.
pub async fn call_next_hop(
    telemetry: &Telemetry,
    client: &HttpClient,
    downstream: &Uri,
    request_id: &str,
    parent_cx: &Context,
) -> Result<Bytes, ChainError> {
    let mut request = Request::builder()
        .method(Method::GET)
        .uri(downstream.clone())
        .body(Body::empty())
        .map_err(|err| ChainError::Transport(err.into()))?;

    let span_name = match downstream.host() {
        Some(host) => format!("call {host}"),
        None => "call next hop".to_string(),
    };
    let cx = telemetry.start_span(span_name, SpanKind::Client, parent_cx);
    telemetry.inject(&cx, request.headers_mut());
    if let Ok(value) = header::HeaderValue::from_str(request_id) {
        request.headers_mut().insert(X_REQUEST_ID, value);
    }

    let result = match client.request(request).await {
        Ok(response) => relay::read_to_end(response.into_body()).await,
        Err(err) => Err(ChainError::Transport(err.into())),
    };

    if let Err(err) = &result {
        cx.span().set_status(Status::error(err.to_string()));
    }
    cx.span().end();

    result
}
