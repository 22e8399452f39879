//! Trace context propagation between hops.
//!
//! # Responsibilities
//! - Extract trace context from inbound request headers
//! - Start spans as children of the active context
//! - Inject the active context into outbound request headers
//!
//! # Design Decisions
//! - W3C `traceparent` plus `baggage` headers, matching the propagator the
//!   downstream peer registers, so each hop's root span becomes a child of
//!   its caller's span instead of a new root
//! - Spans wrap calls transparently; they never alter call semantics

use std::borrow::Cow;

use axum::http::HeaderMap;
use opentelemetry::propagation::{TextMapCompositePropagator, TextMapPropagator};
use opentelemetry::trace::{SpanKind, TraceContextExt, Tracer, TracerProvider};
use opentelemetry::Context;
use opentelemetry_http::{HeaderExtractor, HeaderInjector};
use opentelemetry_sdk::propagation::{BaggagePropagator, TraceContextPropagator};
use opentelemetry_sdk::trace::SdkTracerProvider;

/// Instrumentation scope reported on every span.
const SCOPE: &str = "chain-service";

/// Process-wide tracing handle, threaded explicitly through handlers.
///
/// Owns the tracer provider and the propagation contract between hops.
/// Handlers never reach for process globals; tests construct the same
/// handle over an in-memory or no-op provider.
pub struct Telemetry {
    provider: SdkTracerProvider,
    propagator: TextMapCompositePropagator,
}

impl Telemetry {
    /// Wrap a tracer provider in the propagation contract.
    pub fn new(provider: SdkTracerProvider) -> Self {
        let propagator = TextMapCompositePropagator::new(vec![
            Box::new(TraceContextPropagator::new()),
            Box::new(BaggagePropagator::new()),
        ]);
        Self {
            provider,
            propagator,
        }
    }

    /// Reconstruct the caller's context from inbound headers.
    ///
    /// Absent or unparsable headers yield a context with no active span, so
    /// the next span starts a new root.
    pub fn extract(&self, headers: &HeaderMap) -> Context {
        self.propagator.extract(&HeaderExtractor(headers))
    }

    /// Serialize the active span of `cx` (and its baggage) into outbound
    /// headers for the downstream peer.
    pub fn inject(&self, cx: &Context, headers: &mut HeaderMap) {
        self.propagator
            .inject_context(cx, &mut HeaderInjector(headers));
    }

    /// Start a span as a child of `parent` and return the context carrying
    /// it.
    ///
    /// With no span active on `parent`, the new span is a root. The caller
    /// must end the span exactly once, on every exit path.
    pub fn start_span(
        &self,
        name: impl Into<Cow<'static, str>>,
        kind: SpanKind,
        parent: &Context,
    ) -> Context {
        let tracer = self.provider.tracer(SCOPE);
        let span = tracer
            .span_builder(name)
            .with_kind(kind)
            .start_with_context(&tracer, parent);
        parent.with_span(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_telemetry() -> Telemetry {
        Telemetry::new(SdkTracerProvider::builder().build())
    }

    #[test]
    fn inject_writes_traceparent() {
        let telemetry = test_telemetry();
        let cx = telemetry.start_span("outbound", SpanKind::Client, &Context::new());

        let mut headers = HeaderMap::new();
        telemetry.inject(&cx, &mut headers);

        assert!(headers.contains_key("traceparent"));
    }

    #[test]
    fn extract_preserves_the_caller_trace() {
        let telemetry = test_telemetry();
        let cx = telemetry.start_span("outbound", SpanKind::Client, &Context::new());
        let trace_id = cx.span().span_context().trace_id();
        let span_id = cx.span().span_context().span_id();

        let mut headers = HeaderMap::new();
        telemetry.inject(&cx, &mut headers);
        let remote = telemetry.extract(&headers);

        assert_eq!(remote.span().span_context().trace_id(), trace_id);
        assert_eq!(remote.span().span_context().span_id(), span_id);

        // A span started under the extracted context stays in the same trace.
        let child = telemetry.start_span("inbound", SpanKind::Server, &remote);
        assert_eq!(child.span().span_context().trace_id(), trace_id);
    }

    #[test]
    fn absent_headers_start_a_new_root() {
        let telemetry = test_telemetry();
        let remote = telemetry.extract(&HeaderMap::new());
        assert!(!remote.span().span_context().is_valid());
    }
}
