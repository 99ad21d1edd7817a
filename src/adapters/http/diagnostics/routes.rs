//! Axum router configuration for diagnostics endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{db_ping, diag, health};

/// Create the diagnostics router, mounted under `/api`.
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/db-ping", get(db_ping))
        .route("/diag", get(diag))
}
