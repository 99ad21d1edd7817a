//! HTTP handlers for memorial endpoints.

use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;

use crate::adapters::http::error::MemorialApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::memorial::{GetMemorialQuery, ListMemorialsQuery};
use crate::domain::memorial::Memorial;

/// Query string for the listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMemorialsParams {
    pub limit: Option<usize>,
}

/// GET /api/memorials - Recent memorials
pub async fn list_memorials(
    State(state): State<AppState>,
    Query(params): Query<ListMemorialsParams>,
) -> Result<Json<Vec<Memorial>>, MemorialApiError> {
    let query = ListMemorialsQuery {
        limit: params.limit,
    };
    let memorials = state.list_memorials_handler().handle(query).await?;
    Ok(Json(memorials))
}

/// GET /api/memorials/:slug - One memorial
pub async fn get_memorial(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Memorial>, MemorialApiError> {
    let memorial = state
        .get_memorial_handler()
        .handle(GetMemorialQuery { slug })
        .await?;
    Ok(Json(memorial))
}
