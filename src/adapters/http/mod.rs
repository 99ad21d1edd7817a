//! HTTP adapters - REST API and pages.
//!
//! Each area has its own adapter; [`app_router`] mounts them all:
//! - `payment` - checkout, webhook and after-pay endpoints under `/api`
//! - `memorial` - public memorial API under `/api/memorials`
//! - `diagnostics` - health, db-ping and diag under `/api`
//! - `pages` - landing, payment and memorial pages

pub mod diagnostics;
pub mod error;
pub mod memorial;
pub mod pages;
pub mod payment;
pub mod state;

use axum::Router;

// Re-export key types for convenience
pub use error::{method_not_allowed, ErrorBody, MemorialApiError, OrderApiError, PlainTextError};
pub use state::{AppState, ConfigPresence, SiteSettings};

/// Create the complete application router.
///
/// Middleware (tracing, CORS) is layered on by the caller.
pub fn app_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(payment::payment_routes())
        .merge(diagnostics::diagnostics_routes())
        .nest("/memorials", memorial::memorial_routes());

    Router::new()
        .nest("/api", api)
        .merge(pages::page_routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::paypal::MockPaymentGateway;
    use crate::adapters::supabase::InMemoryRecordStore;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(MockPaymentGateway::new()),
            Arc::new(InMemoryRecordStore::new()),
            SiteSettings::default(),
        )
    }

    #[tokio::test]
    async fn mounts_every_area() {
        for (uri, expected) in [
            ("/", StatusCode::OK),
            ("/pay", StatusCode::OK),
            ("/api/health", StatusCode::OK),
            ("/api/diag", StatusCode::OK),
            ("/api/memorials", StatusCode::OK),
            ("/api/memorials/ghost", StatusCode::NOT_FOUND),
            ("/api/checkout/start", StatusCode::METHOD_NOT_ALLOWED),
            ("/api/after-pay", StatusCode::METHOD_NOT_ALLOWED),
            ("/nowhere", StatusCode::NOT_FOUND),
        ] {
            let response = app_router(test_state())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{}", uri);
        }
    }
}
