//! Response DTOs for diagnostics endpoints.

use serde::Serialize;

use crate::adapters::http::state::ConfigPresence;

pub const DATASTORE_NAME: &str = "supabase";

/// Response for `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub envs: ConfigPresence,
}

/// Response for `GET /api/db-ping`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbPingResponse {
    pub ok: bool,
    pub db: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memorials_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Datastore section of `GET /api/diag`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupabaseDiag {
    pub can_init: bool,
    pub memorials_count: Option<u64>,
    pub error: Option<String>,
}

/// Response for `GET /api/diag`.
#[derive(Debug, Clone, Serialize)]
pub struct DiagResponse {
    pub ok: bool,
    pub runtime: ConfigPresence,
    pub supabase: SupabaseDiag,
    /// Server time, RFC 3339.
    pub now: String,
}
