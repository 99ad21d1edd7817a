//! Axum router configuration for pages.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{landing, memorial, memorial_live, pay};

/// Create the page router, mounted at the root.
///
/// # Routes
/// - `GET /` - Landing page with recent burials
/// - `GET /pay` - Payment page
/// - `GET /m/:slug` - Memorial, rendered on the server
/// - `GET /m/:slug/live` - Memorial, rendered in the browser
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing))
        .route("/pay", get(pay))
        .route("/m/:slug", get(memorial))
        .route("/m/:slug/live", get(memorial_live))
}
