//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to the server at construction time
//! ```
//!
//! # Design Decisions
//! - All fields have defaults except the role sections; exactly one of
//!   [downstream] / [database] must be present
//! - Config is immutable once loaded; topology changes require a restart

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{DatabaseConfig, DownstreamConfig, ServiceConfig, TelemetryConfig};
pub use validation::{validate_config, ValidationError};
