//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! inbound headers
//!     → propagation.rs (extract → parent Context)
//!     → handler spans (server, client, database sub-operations)
//!     → provider.rs (batch export over OTLP to the collector)
//!
//! outbound headers
//!     ← propagation.rs (inject ← active Context)
//! ```
//!
//! # Design Decisions
//! - The tracer handle is threaded explicitly through construction rather
//!   than looked up from a process global, so tests run without an exporter
//! - W3C TraceContext plus Baggage is the propagation contract between hops
//! - Span export is the only process-wide state: initialized once, flushed
//!   once on shutdown

pub mod propagation;
pub mod provider;

pub use propagation::Telemetry;
pub use provider::init_tracer_provider;
