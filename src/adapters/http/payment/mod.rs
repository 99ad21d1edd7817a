//! HTTP adapter for payment endpoints.
//!
//! - `POST /api/checkout/start` - Create an order for the payment page
//! - `POST /api/paypal/create-order` - Create an order (standalone)
//! - `POST /api/paypal/webhook` - Handle PayPal webhooks
//! - `POST /api/after-pay` - Publish a memorial once the order is approved
//!
//! Every route answers other methods with 405 and `Allow: POST`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::payment_routes;
