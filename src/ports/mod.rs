//! Ports - interfaces to the external collaborators.
//!
//! - `PaymentGateway`: the payment processor (PayPal)
//! - `RecordStore`: the hosted datastore (Supabase)

mod payment_gateway;
mod record_store;

pub use payment_gateway::{
    AccessToken, CreateOrderRequest, CreatedOrder, GatewayError, GatewayErrorCode, GatewayOrder,
    PaymentGateway, WebhookHeaders, PUBLISHABLE_ORDER_STATUSES, PURCHASE_DESCRIPTION,
};
pub use record_store::{RecordStore, StorePing, DEFAULT_LISTING_LIMIT};
