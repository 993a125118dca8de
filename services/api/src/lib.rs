//! Hostel API service
//!
//! Exposed as a library so the integration tests under `tests/` can drive
//! the repositories against a live database; `main.rs` wires the same
//! modules into the running service.

pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
