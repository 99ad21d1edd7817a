//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use serde::Serialize;

use crate::application::handlers::memorial::{GetMemorialHandler, ListMemorialsHandler};
use crate::application::handlers::order::{
    HandlePayPalWebhookHandler, PublishAfterPaymentHandler, StartCheckoutHandler,
};
use crate::config::AppConfig;
use crate::ports::{PaymentGateway, RecordStore};

/// Which settings are present, reported by the diagnostics endpoints.
///
/// Values are never exposed, only whether they are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPresence {
    pub paypal_client_id: bool,
    pub paypal_client_secret: bool,
    pub paypal_webhook_id: bool,
    pub paypal_public_client_id: bool,
    pub supabase_url: bool,
    pub supabase_anon_key: bool,
    pub supabase_service_role_key: bool,
}

impl ConfigPresence {
    pub fn from_config(config: &AppConfig) -> Self {
        let set = |value: &str| !value.trim().is_empty();
        Self {
            paypal_client_id: set(&config.paypal.client_id),
            paypal_client_secret: set(&config.paypal.client_secret),
            paypal_webhook_id: set(&config.paypal.webhook_id),
            paypal_public_client_id: config.paypal.public_client_id.as_deref().is_some_and(set),
            supabase_url: set(&config.supabase.url),
            supabase_anon_key: set(&config.supabase.anon_key),
            supabase_service_role_key: set(&config.supabase.service_role_key),
        }
    }

    /// Whether the datastore client has what it needs for public reads.
    pub fn supabase_can_init(&self) -> bool {
        self.supabase_url && self.supabase_anon_key
    }
}

/// Settings the pages and diagnostics read.
#[derive(Debug, Clone, Default)]
pub struct SiteSettings {
    /// Client id handed to the browser SDK on the payment page.
    pub browser_client_id: Option<String>,
    pub presence: ConfigPresence,
}

impl SiteSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            browser_client_id: config.paypal.browser_client_id().map(str::to_string),
            presence: ConfigPresence::from_config(config),
        }
    }
}

/// Shared application state containing all dependencies.
///
/// Built once at startup and cloned per request; clients are `Arc`-shared.
#[derive(Clone)]
pub struct AppState {
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub record_store: Arc<dyn RecordStore>,
    pub settings: Arc<SiteSettings>,
}

impl AppState {
    pub fn new(
        payment_gateway: Arc<dyn PaymentGateway>,
        record_store: Arc<dyn RecordStore>,
        settings: SiteSettings,
    ) -> Self {
        Self {
            payment_gateway,
            record_store,
            settings: Arc::new(settings),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn start_checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(self.payment_gateway.clone(), self.record_store.clone())
    }

    pub fn webhook_handler(&self) -> HandlePayPalWebhookHandler {
        HandlePayPalWebhookHandler::new(self.payment_gateway.clone(), self.record_store.clone())
    }

    pub fn publish_after_payment_handler(&self) -> PublishAfterPaymentHandler {
        PublishAfterPaymentHandler::new(self.payment_gateway.clone(), self.record_store.clone())
    }

    pub fn get_memorial_handler(&self) -> GetMemorialHandler {
        GetMemorialHandler::new(self.record_store.clone())
    }

    pub fn list_memorials_handler(&self) -> ListMemorialsHandler {
        ListMemorialsHandler::new(self.record_store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PayPalConfig, SupabaseConfig};

    #[test]
    fn presence_reflects_configuration() {
        let config = AppConfig {
            paypal: PayPalConfig {
                client_id: "id".to_string(),
                client_secret: "  ".to_string(),
                ..Default::default()
            },
            supabase: SupabaseConfig {
                url: "https://demo.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                service_role_key: String::new(),
            },
            ..Default::default()
        };

        let presence = ConfigPresence::from_config(&config);

        assert!(presence.paypal_client_id);
        assert!(!presence.paypal_client_secret);
        assert!(!presence.paypal_public_client_id);
        assert!(presence.supabase_can_init());
        assert!(!presence.supabase_service_role_key);
    }

    #[test]
    fn presence_serializes_camel_case() {
        let json = serde_json::to_value(ConfigPresence::default()).unwrap();
        assert_eq!(json["supabaseServiceRoleKey"], false);
        assert_eq!(json["paypalClientId"], false);
    }

    #[test]
    fn settings_use_browser_client_id() {
        let config = AppConfig {
            paypal: PayPalConfig {
                client_id: "server-id".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            SiteSettings::from_config(&config).browser_client_id.as_deref(),
            Some("server-id")
        );
        assert_eq!(SiteSettings::from_config(&AppConfig::default()).browser_client_id, None);
    }
}
