//! Request-forwarding pipeline.
//!
//! # Data Flow
//! ```text
//! GET /api/data
//!     → http::handlers (extract trace context, open server span)
//!     → Role decides the single downstream action
//!         Relay    → forward.rs (client span, header injection, one GET)
//!                    → relay.rs (gate, then read body to completion)
//!         Terminal → store::users (connect, query, row shaping)
//!     → response written: pass-through bytes or serialized payload
//! ```
//!
//! # Design Decisions
//! - The topology is fixed and linear: every hop performs exactly one
//!   downstream action, decided once at startup from config
//! - No retries, no caching, no load balancing; a failed action fails the
//!   request

pub mod forward;
pub mod gate;
pub mod relay;

use axum::http::Uri;

use crate::config::schema::{DatabaseConfig, ServiceConfig};
use crate::config::validation::ValidationError;

/// The single downstream action a hop performs.
#[derive(Debug, Clone)]
pub enum Role {
    /// Forward to a fixed downstream peer (hops A and B).
    Relay { downstream: Uri },

    /// Query the relational store (terminal hop).
    Terminal { database: DatabaseConfig },
}

impl Role {
    /// Derive the role from configuration.
    ///
    /// Exactly one of the role sections must be present, and a downstream
    /// URL must be absolute so the outbound client can dial it.
    pub fn from_config(config: &ServiceConfig) -> Result<Role, ValidationError> {
        match (&config.downstream, &config.database) {
            (Some(_), Some(_)) => Err(ValidationError::ConflictingRoles),
            (None, None) => Err(ValidationError::MissingRole),
            (Some(downstream), None) => {
                let uri: Uri = downstream
                    .url
                    .parse()
                    .map_err(|_| ValidationError::InvalidDownstreamUrl(downstream.url.clone()))?;
                if uri.scheme().is_none() || uri.host().is_none() {
                    return Err(ValidationError::InvalidDownstreamUrl(downstream.url.clone()));
                }
                Ok(Role::Relay { downstream: uri })
            }
            (None, Some(database)) => Ok(Role::Terminal {
                database: database.clone(),
            }),
        }
    }
}
