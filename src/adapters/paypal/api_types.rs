//! PayPal REST API request and response bodies.
//!
//! Only the fields this service reads or writes are modelled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::{CreateOrderRequest, WebhookHeaders, PURCHASE_DESCRIPTION};

/// `POST /v1/oauth2/token` response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// `POST /v2/checkout/orders` body.
#[derive(Debug, Serialize)]
pub struct CreateOrderBody<'a> {
    pub intent: &'static str,
    pub purchase_units: Vec<PurchaseUnit<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PurchaseUnit<'a> {
    pub amount: Amount<'a>,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Amount<'a> {
    pub currency_code: &'a str,
    pub value: &'a str,
}

impl<'a> CreateOrderBody<'a> {
    /// Capture-intent order with a single purchase unit.
    pub fn capture(request: &'a CreateOrderRequest) -> Self {
        Self {
            intent: "CAPTURE",
            purchase_units: vec![PurchaseUnit {
                amount: Amount {
                    currency_code: &request.currency,
                    value: &request.amount,
                },
                description: PURCHASE_DESCRIPTION,
            }],
        }
    }
}

/// Order resource as returned by create and get.
#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,
}

/// `POST /v1/notifications/verify-webhook-signature` body.
#[derive(Debug, Serialize)]
pub struct VerifySignatureBody<'a> {
    pub auth_algo: Option<&'a str>,
    pub cert_url: Option<&'a str>,
    pub transmission_id: Option<&'a str>,
    pub transmission_sig: Option<&'a str>,
    pub transmission_time: Option<&'a str>,
    pub webhook_id: &'a str,
    pub webhook_event: &'a Value,
}

impl<'a> VerifySignatureBody<'a> {
    pub fn new(headers: &'a WebhookHeaders, webhook_id: &'a str, event: &'a Value) -> Self {
        Self {
            auth_algo: headers.auth_algo.as_deref(),
            cert_url: headers.cert_url.as_deref(),
            transmission_id: headers.transmission_id.as_deref(),
            transmission_sig: headers.transmission_sig.as_deref(),
            transmission_time: headers.transmission_time.as_deref(),
            webhook_id,
            webhook_event: event,
        }
    }
}

/// Verification outcome reported by the processor.
#[derive(Debug, Deserialize)]
pub struct VerifySignatureResponse {
    #[serde(default)]
    pub verification_status: Option<String>,
}

impl VerifySignatureResponse {
    pub fn is_success(&self) -> bool {
        self.verification_status.as_deref() == Some("SUCCESS")
    }
}
