//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` port over the PayPal REST API:
//! - OAuth client-credentials token exchange
//! - Capture-intent order creation and lookup
//! - Webhook verification through PayPal's verify-webhook-signature API
//!
//! # Configuration
//!
//! Environment variables (prefix `RIP_GAMERTAGS__PAYPAL__`):
//! - `CLIENT_ID`, `CLIENT_SECRET`: REST app credentials
//! - `WEBHOOK_ID`: id of the registered webhook
//! - `API_BASE`: defaults to the sandbox

mod api_types;
mod mock_gateway;
mod paypal_adapter;

pub use mock_gateway::{MethodCall, MockPaymentGateway};
pub use paypal_adapter::{PayPalGateway, PayPalGatewayConfig};
