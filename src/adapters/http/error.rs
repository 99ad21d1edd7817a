//! Error responses shared by the HTTP adapters.
//!
//! Every failure is reported in the response body as `{error, ...}`; nothing
//! is retried or queued.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::memorial::MemorialError;
use crate::domain::order::OrderError;

/// JSON error body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Processor order status, for "not approved" rejections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            status: None,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Order errors
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts order workflow errors to HTTP responses.
///
/// Endpoints differ in how they report upstream and datastore failures, so
/// both are adjustable per call site.
#[derive(Debug)]
pub struct OrderApiError {
    error: OrderError,
    rejected_status: StatusCode,
    infrastructure_label: Option<&'static str>,
}

impl OrderApiError {
    /// Status used when the processor rejects a request (default 500).
    pub fn rejected_as(mut self, status: StatusCode) -> Self {
        self.rejected_status = status;
        self
    }

    /// Report datastore failures as `{error: label, details}`.
    pub fn infrastructure_as(mut self, label: &'static str) -> Self {
        self.infrastructure_label = Some(label);
        self
    }

    pub fn error(&self) -> &OrderError {
        &self.error
    }

    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match &self.error {
            OrderError::ValidationFailed { message, .. } => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(message.clone()))
            }
            OrderError::InvalidWebhookSignature => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(self.error.message()))
            }
            OrderError::NotApproved { status } => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(self.error.message()).with_status(status.clone()),
            ),
            OrderError::UpstreamRejected { message, details } => (
                self.rejected_status,
                ErrorBody::new(message.clone()).with_details(details.clone()),
            ),
            OrderError::ConfigurationMissing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(self.error.message()),
            ),
            OrderError::Infrastructure(message) => {
                let body = match self.infrastructure_label {
                    Some(label) => ErrorBody::new(label).with_details(Some(message.clone())),
                    None => ErrorBody::new(message.clone()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        }
    }
}

impl From<OrderError> for OrderApiError {
    fn from(error: OrderError) -> Self {
        Self {
            error,
            rejected_status: StatusCode::INTERNAL_SERVER_ERROR,
            infrastructure_label: None,
        }
    }
}

impl IntoResponse for OrderApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            tracing::warn!(code = ?self.error.code(), error = %self.error, "Order request failed");
        }
        (status, Json(body)).into_response()
    }
}

/// Order error reported as a bare text body: 400 for bad input, else 500.
#[derive(Debug)]
pub struct PlainTextError(pub OrderError);

impl From<OrderError> for PlainTextError {
    fn from(err: OrderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PlainTextError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            OrderError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::warn!(code = ?self.0.code(), error = %self.0, "Checkout failed");
        }
        let text = match &self.0 {
            OrderError::UpstreamRejected {
                message,
                details: Some(details),
            } => format!("{}: {}", message, details),
            other => other.message(),
        };
        (status, text).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Memorial errors
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts memorial lookup errors to HTTP responses.
#[derive(Debug)]
pub struct MemorialApiError(MemorialError);

impl From<MemorialError> for MemorialApiError {
    fn from(err: MemorialError) -> Self {
        Self(err)
    }
}

impl IntoResponse for MemorialApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MemorialError::NotFound(_) => StatusCode::NOT_FOUND,
            MemorialError::ConfigurationMissing(_) | MemorialError::Infrastructure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody::new(self.0.message()))).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Method guard
// ════════════════════════════════════════════════════════════════════════════════

/// Fallback for POST-only routes.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(ErrorBody::new("Method Not Allowed")),
    )
        .into_response()
}
