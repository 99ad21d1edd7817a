//! Supabase configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Hosted datastore configuration (Supabase PostgREST)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`
    #[serde(default)]
    pub url: String,

    /// Public anon key, used for read-only queries
    #[serde(default)]
    pub anon_key: String,

    /// Service-role key, used for server-side writes
    #[serde(default)]
    pub service_role_key: String,
}

impl SupabaseConfig {
    /// Base URL of the PostgREST interface
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Whether reads can be served
    pub fn can_read(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Validate datastore configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_URL"));
        }
        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return Err(ValidationError::InvalidUrl("SUPABASE_URL"));
        }
        if self.anon_key.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"));
        }
        if self.service_role_key.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_SERVICE_ROLE_KEY"));
        }
        Ok(())
    }
}
