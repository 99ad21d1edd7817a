//! HTTP DTOs for payment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::memorial::Memorial;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a processor order. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub amount: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    /// Owner of the draft being paid for.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Draft to publish once the webhook confirms payment.
    #[serde(default)]
    pub draft_id: Option<String>,
}

/// Payment page form, posted after the buyer approves the order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfterPayRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub game: Option<String>,

    #[serde(default)]
    pub years: Option<String>,

    #[serde(default)]
    pub order_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Processor order id handed to the browser SDK.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderCreatedResponse {
    pub id: String,
}

/// Acknowledgement body for processed requests.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AckResponse {
    pub ok: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Response for a memorial published after payment.
#[derive(Debug, Clone, Serialize)]
pub struct AfterPayResponse {
    pub ok: bool,
    pub memorial: Memorial,
}
