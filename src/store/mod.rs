//! Data-source access for the terminal hop.
//!
//! # Design Decisions
//! - One connection per request, released when the request ends
//! - The query is fixed, parameter-free, bounded, and ordered
//! - Connect, query, and scan failures stay distinguishable in logs

pub mod users;

pub use users::{fetch_users, DataResponse, UserRecord};
