//! One hop of a traced service chain.
//!
//! Each instance receives `GET /api/data`, reconstructs the caller's trace
//! context from the inbound headers, and performs exactly one downstream
//! action: relay hops forward the request to a fixed peer and pass the
//! response body through untouched; the terminal hop queries the relational
//! store and shapes the rows into the response payload. The spans emitted by
//! all hops of one external request form a single linear parent chain.

// Core pipeline
pub mod error;
pub mod pipeline;
pub mod store;

// HTTP surface
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::ServiceConfig;
pub use error::ChainError;
pub use http::HttpServer;
pub use observability::Telemetry;
