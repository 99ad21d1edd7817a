//! HTTP adapter for diagnostics endpoints.
//!
//! - `GET /api/health` - Liveness plus configuration presence
//! - `GET /api/db-ping` - Datastore reachability
//! - `GET /api/diag` - Both, with a timestamp
//!
//! These endpoints always answer 200; failures are reported in the body.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::diagnostics_routes;
