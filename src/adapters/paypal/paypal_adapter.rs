//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait over the PayPal REST API using the
//! client-credentials flow. Every operation fetches its own access token.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PayPalGatewayConfig::from_app_config(&app_config.paypal);
//! let gateway = PayPalGateway::new(config, http_client);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::{PayPalConfig, PAYPAL_SANDBOX_API_BASE};
use crate::domain::foundation::ExternalOrderId;
use crate::ports::{
    AccessToken, CreateOrderRequest, CreatedOrder, GatewayError, GatewayErrorCode, GatewayOrder,
    PaymentGateway, WebhookHeaders,
};

use super::api_types::{
    CreateOrderBody, OrderResponse, TokenResponse, VerifySignatureBody, VerifySignatureResponse,
};

/// PayPal API configuration. Absent credentials are reported per call.
#[derive(Clone)]
pub struct PayPalGatewayConfig {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    webhook_id: Option<String>,
    api_base_url: String,
}

impl PayPalGatewayConfig {
    /// Create a configuration pointed at the sandbox.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: non_empty(client_id.into()),
            client_secret: non_empty(client_secret.into()).map(SecretString::new),
            webhook_id: None,
            api_base_url: PAYPAL_SANDBOX_API_BASE.to_string(),
        }
    }

    /// Create configuration from the loaded application settings.
    pub fn from_app_config(config: &PayPalConfig) -> Self {
        Self::new(config.client_id.clone(), config.client_secret.clone())
            .with_webhook_id(config.webhook_id.clone())
            .with_base_url(config.api_base.clone())
    }

    /// Set the webhook id used for signature verification.
    pub fn with_webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = non_empty(webhook_id.into());
        self
    }

    /// Set a custom API base URL (live API or a test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        self
    }
}

/// PayPal payment gateway adapter.
pub struct PayPalGateway {
    config: PayPalGatewayConfig,
    http_client: reqwest::Client,
}

impl PayPalGateway {
    /// Create an adapter sharing the given HTTP client.
    pub fn new(config: PayPalGatewayConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, GatewayError> {
        let mut url = reqwest::Url::parse(&self.config.api_base_url)
            .map_err(|_| GatewayError::missing_configuration("PAYPAL_API_BASE"))?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::missing_configuration("PAYPAL_API_BASE"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn credentials(&self) -> Result<(&str, &SecretString), GatewayError> {
        let client_id = self
            .config
            .client_id
            .as_deref()
            .ok_or_else(|| GatewayError::missing_configuration("PAYPAL_CLIENT_ID"))?;
        let secret = self
            .config
            .client_secret
            .as_ref()
            .ok_or_else(|| GatewayError::missing_configuration("PAYPAL_CLIENT_SECRET"))?;
        Ok((client_id, secret))
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    async fn access_token(&self) -> Result<AccessToken, GatewayError> {
        let (client_id, secret) = self.credentials()?;
        let url = self.endpoint(&["v1", "oauth2", "token"])?;

        let response = self
            .http_client
            .post(url)
            .basic_auth(client_id, Some(secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), error = %error_text, "PayPal token request failed");
            return Err(GatewayError::authentication("PayPal token error")
                .with_details(error_text)
                .with_upstream_status(status.as_u16()));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse PayPal token response: {}", e))
        })?;

        Ok(AccessToken::new(token.access_token))
    }

    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<CreatedOrder, GatewayError> {
        let token = self.access_token().await?;
        let url = self.endpoint(&["v2", "checkout", "orders"])?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(token.expose())
            .json(&CreateOrderBody::capture(&request))
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                amount = %request.amount,
                currency = %request.currency,
                error = %error_text,
                "PayPal create_order failed"
            );
            return Err(GatewayError::rejected("Create order error")
                .with_details(error_text)
                .with_upstream_status(status.as_u16()));
        }

        let order: OrderResponse = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse PayPal order: {}", e))
        })?;

        tracing::info!(order_id = %order.id, amount = %request.amount, currency = %request.currency, "PayPal order created");

        Ok(CreatedOrder {
            id: order.id,
            status: order.status,
        })
    }

    async fn get_order(&self, order_id: &ExternalOrderId) -> Result<GatewayOrder, GatewayError> {
        let token = self.access_token().await?;
        let url = self.endpoint(&["v2", "checkout", "orders", order_id.as_str()])?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(order_id = %order_id, status = status.as_u16(), "PayPal order fetch failed");
            return Err(GatewayError::rejected("PayPal order fetch error")
                .with_details(error_text)
                .with_upstream_status(status.as_u16()));
        }

        let order: OrderResponse = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse PayPal order: {}", e))
        })?;

        Ok(GatewayOrder {
            id: order.id,
            status: order.status.unwrap_or_default(),
        })
    }

    async fn verify_event(
        &self,
        headers: &WebhookHeaders,
        event: &Value,
    ) -> Result<bool, GatewayError> {
        let webhook_id = self
            .config
            .webhook_id
            .as_deref()
            .ok_or_else(|| GatewayError::missing_configuration("PAYPAL_WEBHOOK_ID"))?;

        if headers.transmission_id.is_none() || headers.transmission_sig.is_none() {
            tracing::warn!("Webhook delivery without PayPal transmission headers");
            return Ok(false);
        }

        let token = self.access_token().await?;
        let url = self.endpoint(&["v1", "notifications", "verify-webhook-signature"])?;

        let response = self
            .http_client
            .post(url)
            .bearer_auth(token.expose())
            .json(&VerifySignatureBody::new(headers, webhook_id, event))
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::new(
                GatewayErrorCode::Rejected,
                "PayPal signature verification unavailable",
            )
            .with_details(error_text)
            .with_upstream_status(status.as_u16()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), error = %error_text, "PayPal refused to verify webhook");
            return Ok(false);
        }

        let verification: VerifySignatureResponse = response.json().await.map_err(|e| {
            GatewayError::invalid_response(format!("Failed to parse verification response: {}", e))
        })?;

        if !verification.is_success() {
            tracing::warn!(
                transmission_id = headers.transmission_id.as_deref().unwrap_or_default(),
                verification_status = verification.verification_status.as_deref().unwrap_or_default(),
                "Webhook signature verification failed"
            );
        }

        Ok(verification.is_success())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
