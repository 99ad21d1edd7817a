//! HTTP handlers for pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::adapters::http::state::AppState;
use crate::application::handlers::memorial::{GetMemorialQuery, ListMemorialsQuery};
use crate::domain::memorial::MemorialError;

use super::detail::{render_live_shell, render_memorial, render_not_found};
use super::landing::{render_landing, sample_graves, Tombstone};
use super::payment_page::render_payment_page;

/// GET / - Landing page
pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let graves = match state
        .list_memorials_handler()
        .handle(ListMemorialsQuery::default())
        .await
    {
        Ok(memorials) if !memorials.is_empty() => {
            memorials.iter().map(Tombstone::from_memorial).collect()
        }
        Ok(_) => sample_graves(),
        Err(e) => {
            tracing::warn!(error = %e, "Landing page falling back to sample graves");
            sample_graves()
        }
    };

    Html(render_landing(&graves))
}

/// GET /pay - Payment page
pub async fn pay(State(state): State<AppState>) -> Html<String> {
    Html(render_payment_page(state.settings.browser_client_id.as_deref()))
}

/// GET /m/:slug - Server-rendered memorial
pub async fn memorial(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state
        .get_memorial_handler()
        .handle(GetMemorialQuery { slug })
        .await
    {
        Ok(memorial) => Html(render_memorial(&memorial)).into_response(),
        Err(MemorialError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
        }
        Err(e) => {
            // Lookup failures render as a missing page.
            tracing::error!(error = %e, "Memorial page lookup failed");
            (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
        }
    }
}

/// GET /m/:slug/live - Client-rendered memorial
pub async fn memorial_live(Path(slug): Path<String>) -> Html<String> {
    Html(render_live_shell(&slug))
}
