//! Payment gateway port for the external payment processor.
//!
//! Defines the contract for the PayPal REST integration: service
//! credentials, order creation, order lookup and webhook verification.
//!
//! # Design
//!
//! - **No local crypto**: webhook authenticity is decided by the processor
//! - **No retries**: every failure surfaces to the caller once
//! - **Stateless**: each operation obtains its own access credential

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DomainError, ErrorCode, ExternalOrderId, ValidationError};
use crate::domain::order::OrderError;

/// Processor order statuses that allow publishing a memorial.
pub const PUBLISHABLE_ORDER_STATUSES: [&str; 2] = ["APPROVED", "COMPLETED"];

/// Description attached to every purchase unit.
pub const PURCHASE_DESCRIPTION: &str = "RIPGAMERTAGS burial";

/// Port for payment processor integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Obtain a short-lived service credential.
    async fn access_token(&self) -> Result<AccessToken, GatewayError>;

    /// Create a capture-intent order for a single purchase unit.
    ///
    /// Returns the processor-assigned order id.
    async fn create_order(&self, request: CreateOrderRequest)
        -> Result<CreatedOrder, GatewayError>;

    /// Fetch an order's current status.
    async fn get_order(&self, order_id: &ExternalOrderId) -> Result<GatewayOrder, GatewayError>;

    /// Ask the processor whether a webhook delivery is authentic.
    ///
    /// Returns `Ok(false)` for any verification status other than success.
    /// Callers must drop events for which this is not `Ok(true)`.
    async fn verify_event(
        &self,
        headers: &WebhookHeaders,
        event: &Value,
    ) -> Result<bool, GatewayError>;
}

/// Bearer credential for processor API calls.
#[derive(Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Amount and currency of an order to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Decimal string, e.g. `"1.00"`.
    pub amount: String,

    /// ISO 4217 code, e.g. `"USD"`.
    pub currency: String,
}

impl CreateOrderRequest {
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Result<Self, ValidationError> {
        let amount = amount.into().trim().to_string();
        let currency = currency.into().trim().to_uppercase();

        if amount.is_empty() {
            return Err(ValidationError::empty_field("amount"));
        }
        if currency.is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }

        Ok(Self { amount, currency })
    }
}

/// Result of creating an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// An order as reported by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,

    /// `CREATED`, `APPROVED`, `COMPLETED`, ...
    pub status: String,
}

impl GatewayOrder {
    /// True once the buyer has approved or the payment was captured.
    pub fn is_publishable(&self) -> bool {
        PUBLISHABLE_ORDER_STATUSES.contains(&self.status.as_str())
    }
}

/// Transmission headers of a webhook delivery (`paypal-*`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeaders {
    pub auth_algo: Option<String>,
    pub cert_url: Option<String>,
    pub transmission_id: Option<String>,
    pub transmission_sig: Option<String>,
    pub transmission_time: Option<String>,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Processor response body, when there was one.
    pub details: Option<String>,

    /// Processor HTTP status, when there was one.
    pub upstream_status: Option<u16>,
}

impl GatewayError {
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            upstream_status: None,
        }
    }

    /// A required setting is absent. The message is the setting name.
    pub fn missing_configuration(setting: &str) -> Self {
        Self::new(GatewayErrorCode::MissingConfiguration, setting)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::AuthenticationFailed, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::Rejected, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::InvalidResponse, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_upstream_status(mut self, status: u16) -> Self {
        self.upstream_status = Some(status);
        self
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for OrderError {
    fn from(err: GatewayError) -> Self {
        match err.code {
            GatewayErrorCode::MissingConfiguration => OrderError::ConfigurationMissing(err.message),
            GatewayErrorCode::AuthenticationFailed | GatewayErrorCode::Rejected => {
                OrderError::UpstreamRejected {
                    message: err.message,
                    details: err.details,
                }
            }
            GatewayErrorCode::NetworkError | GatewayErrorCode::InvalidResponse => {
                OrderError::Infrastructure(err.to_string())
            }
        }
    }
}

impl From<GatewayError> for DomainError {
    fn from(err: GatewayError) -> Self {
        match err.code {
            GatewayErrorCode::MissingConfiguration => DomainError::configuration_missing(&err.message),
            _ => DomainError::new(ErrorCode::ExternalServiceError, err.to_string()),
        }
    }
}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Client id, secret or webhook id not configured.
    MissingConfiguration,

    /// Credential exchange refused.
    AuthenticationFailed,

    /// Processor answered with a non-success status.
    Rejected,

    /// Transport failure or timeout.
    NetworkError,

    /// Success response that could not be decoded.
    InvalidResponse,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::MissingConfiguration => "missing_configuration",
            GatewayErrorCode::AuthenticationFailed => "authentication_failed",
            GatewayErrorCode::Rejected => "rejected",
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
