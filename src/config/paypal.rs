//! PayPal configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Sandbox REST API base, used when no base URL is configured.
pub const PAYPAL_SANDBOX_API_BASE: &str = "https://api-m.sandbox.paypal.com";

/// Payment processor configuration (PayPal REST API)
#[derive(Debug, Clone, Deserialize)]
pub struct PayPalConfig {
    /// REST app client ID (server side)
    #[serde(default)]
    pub client_id: String,

    /// REST app client secret
    #[serde(default)]
    pub client_secret: String,

    /// REST API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Webhook ID registered with PayPal, required for signature verification
    #[serde(default)]
    pub webhook_id: String,

    /// Client ID handed to the browser SDK on the payment page.
    /// Falls back to `client_id` when unset.
    pub public_client_id: Option<String>,
}

impl PayPalConfig {
    /// Check if pointed at the PayPal sandbox
    pub fn is_sandbox(&self) -> bool {
        self.api_base.contains("sandbox")
    }

    /// Client ID to embed in pages, if any is configured
    pub fn browser_client_id(&self) -> Option<&str> {
        self.public_client_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or(Some(self.client_id.as_str()).filter(|id| !id.is_empty()))
    }

    /// Validate PayPal configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_ID"));
        }
        if self.client_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_SECRET"));
        }
        if self.webhook_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_WEBHOOK_ID"));
        }
        if !self.api_base.starts_with("https://") && !self.api_base.starts_with("http://") {
            return Err(ValidationError::InvalidUrl("PAYPAL_API_BASE"));
        }
        Ok(())
    }
}

impl Default for PayPalConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            api_base: default_api_base(),
            webhook_id: String::new(),
            public_client_id: None,
        }
    }
}

fn default_api_base() -> String {
    PAYPAL_SANDBOX_API_BASE.to_string()
}
