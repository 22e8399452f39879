//! HTTP surface of one chain hop.
//!
//! # Data Flow
//! ```text
//! GET /api/data
//!     → server.rs (Axum setup, state injection)
//!     → handlers.rs (trace extraction, dispatch by role, response)
//!
//! GET /health
//!     → handlers.rs (fixed healthy body; no tracing, no downstream calls)
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use server::{AppState, HttpServer};
