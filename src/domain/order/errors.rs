//! Order-specific error types.
//!
//! Errors raised while starting checkout, confirming payment or publishing
//! a memorial after payment.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ConfigurationMissing | 500 |
//! | InvalidWebhookSignature | 400 |
//! | ValidationFailed | 400 |
//! | NotApproved | 400 |
//! | UpstreamRejected | 400 or 500, per endpoint |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Order-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A required setting is absent.
    ConfigurationMissing(String),

    /// Webhook signature verification did not succeed.
    InvalidWebhookSignature,

    /// Request field missing or malformed.
    ValidationFailed { field: String, message: String },

    /// Processor reports the order in a status that does not allow publishing.
    NotApproved { status: String },

    /// The payment processor answered with a non-success response.
    UpstreamRejected {
        message: String,
        details: Option<String>,
    },

    /// Datastore or transport failure.
    Infrastructure(String),
}

impl OrderError {
    pub fn configuration_missing(setting: impl Into<String>) -> Self {
        OrderError::ConfigurationMissing(setting.into())
    }

    pub fn invalid_webhook_signature() -> Self {
        OrderError::InvalidWebhookSignature
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        OrderError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_approved(status: impl Into<String>) -> Self {
        OrderError::NotApproved {
            status: status.into(),
        }
    }

    pub fn upstream_rejected(message: impl Into<String>, details: Option<String>) -> Self {
        OrderError::UpstreamRejected {
            message: message.into(),
            details,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        OrderError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::ConfigurationMissing(_) => ErrorCode::ConfigurationMissing,
            OrderError::InvalidWebhookSignature | OrderError::ValidationFailed { .. } => {
                ErrorCode::ValidationFailed
            }
            OrderError::NotApproved { .. } => ErrorCode::InvalidStateTransition,
            OrderError::UpstreamRejected { .. } => ErrorCode::ExternalServiceError,
            OrderError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns the message surfaced in response bodies.
    pub fn message(&self) -> String {
        match self {
            OrderError::ConfigurationMissing(setting) => {
                format!("Missing configuration: {}", setting)
            }
            OrderError::InvalidWebhookSignature => "Invalid webhook signature".to_string(),
            OrderError::ValidationFailed { message, .. } => message.clone(),
            OrderError::NotApproved { .. } => "Order not approved".to_string(),
            OrderError::UpstreamRejected { message, .. } => message.clone(),
            OrderError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OrderError {}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ConfigurationMissing => {
                let setting = err
                    .details
                    .get("setting")
                    .cloned()
                    .unwrap_or_else(|| err.message.clone());
                OrderError::ConfigurationMissing(setting)
            }
            ErrorCode::ValidationFailed => OrderError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => OrderError::Infrastructure(err.message),
        }
    }
}

impl From<ValidationError> for OrderError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<OrderError> for DomainError {
    fn from(err: OrderError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
