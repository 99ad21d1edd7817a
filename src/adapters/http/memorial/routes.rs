//! Axum router configuration for memorial endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{get_memorial, list_memorials};

/// Create the memorial API router, mounted under `/api/memorials`.
pub fn memorial_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_memorials))
        .route("/:slug", get(get_memorial))
}
