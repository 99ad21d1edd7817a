//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to the order command handlers.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::application::handlers::order::{
    HandlePayPalWebhookCommand, HandlePayPalWebhookResult, PublishAfterPaymentCommand,
    StartCheckoutCommand, CHECKOUT_DEFAULT_AMOUNT, CREATE_ORDER_DEFAULT_AMOUNT,
};
use crate::domain::foundation::{DraftId, UserId};
use crate::domain::order::OrderError;
use crate::ports::WebhookHeaders;

use crate::adapters::http::error::{OrderApiError, PlainTextError};
use crate::adapters::http::state::AppState;
use super::dto::{AckResponse, AfterPayRequest, AfterPayResponse, CheckoutRequest, OrderCreatedResponse};

/// Label for datastore failures on the after-pay path.
const INSERT_ERROR: &str = "Supabase insert error";

// ════════════════════════════════════════════════════════════════════════════════
// Order creation
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/checkout/start - Create an order for the payment page
pub async fn start_checkout(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OrderCreatedResponse>, PlainTextError> {
    let request: CheckoutRequest = decode_body(&body)?;
    let cmd = StartCheckoutCommand::with_defaults(request.amount, request.currency, CHECKOUT_DEFAULT_AMOUNT)
        .for_draft(
            parse_user_id(request.user_id)?,
            parse_draft_id(request.draft_id)?,
        );

    let result = state.start_checkout_handler().handle(cmd).await?;

    Ok(Json(OrderCreatedResponse { id: result.order_id }))
}

/// POST /api/paypal/create-order - Create an order (standalone)
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OrderCreatedResponse>, OrderApiError> {
    let request: CheckoutRequest = decode_body(&body)?;
    let cmd = StartCheckoutCommand::with_defaults(
        request.amount,
        request.currency,
        CREATE_ORDER_DEFAULT_AMOUNT,
    );

    let result = state
        .start_checkout_handler()
        .handle(cmd)
        .await
        .map_err(|e| OrderApiError::from(e).rejected_as(StatusCode::BAD_REQUEST))?;

    Ok(Json(OrderCreatedResponse { id: result.order_id }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhooks
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/paypal/webhook - Handle PayPal webhooks
pub async fn paypal_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AckResponse>, OrderApiError> {
    let event = serde_json::from_slice(&body)
        .map_err(|_| OrderError::validation("body", "Webhook body is not valid JSON"))?;

    let cmd = HandlePayPalWebhookCommand {
        headers: webhook_headers(&headers),
        event,
    };

    match state.webhook_handler().handle(cmd).await? {
        HandlePayPalWebhookResult::Confirmed(result) => {
            tracing::debug!(?result, "Webhook processed");
        }
        HandlePayPalWebhookResult::Ignored { event_type } => {
            tracing::debug!(event_type = %event_type, "Webhook acknowledged without action");
        }
    }

    Ok(Json(AckResponse::ok()))
}

/// Transmission headers PayPal signs each delivery with.
pub fn webhook_headers(headers: &HeaderMap) -> WebhookHeaders {
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    WebhookHeaders {
        auth_algo: get("paypal-auth-algo"),
        cert_url: get("paypal-cert-url"),
        transmission_id: get("paypal-transmission-id"),
        transmission_sig: get("paypal-transmission-sig"),
        transmission_time: get("paypal-transmission-time"),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// After payment
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/after-pay - Publish a memorial once the order is approved
pub async fn after_pay(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AfterPayResponse>, OrderApiError> {
    let request: AfterPayRequest = decode_body(&body)?;
    let cmd = PublishAfterPaymentCommand {
        name: request.name,
        game: request.game,
        years: request.years,
        order_id: request.order_id,
    };

    let result = state
        .publish_after_payment_handler()
        .handle(cmd)
        .await
        .map_err(|e| OrderApiError::from(e).infrastructure_as(INSERT_ERROR))?;

    Ok(Json(AfterPayResponse {
        ok: true,
        memorial: result.memorial,
    }))
}

/// An empty body stands for "all defaults"; anything else must decode as
/// the request shape.
fn decode_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, OrderError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| OrderError::validation("body", format!("Invalid JSON body: {}", e)))
}

fn parse_user_id(value: Option<String>) -> Result<Option<UserId>, OrderError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => Ok(Some(UserId::new(v)?)),
        None => Ok(None),
    }
}

fn parse_draft_id(value: Option<String>) -> Result<Option<DraftId>, OrderError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| OrderError::validation("draftId", "draftId must be a UUID")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn webhook_headers_reads_paypal_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("paypal-auth-algo", HeaderValue::from_static("SHA256withRSA"));
        headers.insert("paypal-cert-url", HeaderValue::from_static("https://api.paypal.com/cert"));
        headers.insert("paypal-transmission-id", HeaderValue::from_static("tx-1"));
        headers.insert("paypal-transmission-sig", HeaderValue::from_static("sig"));
        headers.insert("paypal-transmission-time", HeaderValue::from_static("2025-01-01T00:00:00Z"));

        let parsed = webhook_headers(&headers);

        assert_eq!(parsed.auth_algo.as_deref(), Some("SHA256withRSA"));
        assert_eq!(parsed.transmission_id.as_deref(), Some("tx-1"));
        assert_eq!(parsed.transmission_time.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn webhook_headers_missing_are_none() {
        assert_eq!(webhook_headers(&HeaderMap::new()), WebhookHeaders::default());
    }

    #[test]
    fn draft_id_must_be_uuid() {
        assert!(parse_draft_id(None).unwrap().is_none());
        assert!(parse_draft_id(Some(" ".to_string())).unwrap().is_none());
        assert!(parse_draft_id(Some("not-a-uuid".to_string())).is_err());

        let id = DraftId::new();
        assert_eq!(parse_draft_id(Some(id.to_string())).unwrap(), Some(id));
    }

    #[test]
    fn empty_body_decodes_to_defaults() {
        let request: CheckoutRequest = decode_body(&Bytes::from_static(b"  \n")).unwrap();
        assert!(request.amount.is_none());
        assert!(request.draft_id.is_none());
    }

    #[test]
    fn wrong_typed_fields_are_rejected() {
        let err = decode_body::<CheckoutRequest>(&Bytes::from_static(
            br#"{"amount":5,"currency":"EUR","draftId":7}"#,
        ))
        .unwrap_err();

        assert!(matches!(err, OrderError::ValidationFailed { .. }));
        assert!(err.message().starts_with("Invalid JSON body"));
    }

    #[test]
    fn blank_user_id_is_absent() {
        assert!(parse_user_id(Some("".to_string())).unwrap().is_none());
        assert!(parse_user_id(Some("user-1".to_string())).unwrap().is_some());
    }
}
