//! HTTP handlers for diagnostics endpoints.

use axum::extract::{Json, State};

use crate::adapters::http::state::AppState;
use crate::domain::foundation::Timestamp;

use super::dto::{DbPingResponse, DiagResponse, HealthResponse, SupabaseDiag, DATASTORE_NAME};

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        envs: state.settings.presence,
    })
}

/// GET /api/db-ping
pub async fn db_ping(State(state): State<AppState>) -> Json<DbPingResponse> {
    let response = match state.record_store.ping().await {
        Ok(ping) => DbPingResponse {
            ok: true,
            db: DATASTORE_NAME,
            memorials_count: ping.memorials_count,
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Datastore ping failed");
            DbPingResponse {
                ok: false,
                db: DATASTORE_NAME,
                memorials_count: None,
                error: Some(e.message),
            }
        }
    };
    Json(response)
}

/// GET /api/diag
pub async fn diag(State(state): State<AppState>) -> Json<DiagResponse> {
    let presence = state.settings.presence;
    let can_init = presence.supabase_can_init();

    let supabase = if can_init {
        match state.record_store.ping().await {
            Ok(ping) => SupabaseDiag {
                can_init,
                memorials_count: ping.memorials_count,
                error: None,
            },
            Err(e) => SupabaseDiag {
                can_init,
                memorials_count: None,
                error: Some(e.message),
            },
        }
    } else {
        SupabaseDiag {
            can_init,
            memorials_count: None,
            error: Some("Supabase URL or anon key is not set".to_string()),
        }
    };

    Json(DiagResponse {
        ok: supabase.error.is_none(),
        runtime: presence,
        supabase,
        now: Timestamp::now().as_datetime().to_rfc3339(),
    })
}
