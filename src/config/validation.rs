//! Semantic configuration checks.
//!
//! Serde handles syntax; this module checks what serde cannot: the service
//! must carry a name, the bind address must parse, and exactly one
//! downstream action must be configured.

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;
use crate::pipeline::Role;

/// A single semantic violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `service.name` is empty.
    EmptyServiceName,
    /// `service.bind_address` is not a socket address.
    InvalidBindAddress(String),
    /// Neither `[downstream]` nor `[database]` is configured.
    MissingRole,
    /// Both `[downstream]` and `[database]` are configured.
    ConflictingRoles,
    /// `downstream.url` is not an absolute http URL.
    InvalidDownstreamUrl(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyServiceName => {
                write!(f, "service.name must not be empty")
            }
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address: {}", addr)
            }
            ValidationError::MissingRole => {
                write!(f, "configure exactly one of [downstream] or [database]")
            }
            ValidationError::ConflictingRoles => {
                write!(f, "[downstream] and [database] are mutually exclusive")
            }
            ValidationError::InvalidDownstreamUrl(url) => {
                write!(f, "invalid downstream url: {}", url)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a parsed configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if config.service.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.service.bind_address.clone(),
        ));
    }

    if let Err(err) = Role::from_config(config) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
