//! Order handlers.
//!
//! ## Commands
//! - Starting a checkout with the processor
//! - Handling processor webhooks (verify, then confirm)
//! - Confirming payment for an order (idempotent `pending → paid`, then publish)
//! - Publishing a memorial from the payment page after approval

mod confirm_payment;
mod handle_paypal_webhook;
mod publish_after_payment;
mod start_checkout;

pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult};
pub use handle_paypal_webhook::{
    HandlePayPalWebhookCommand, HandlePayPalWebhookHandler, HandlePayPalWebhookResult,
};
pub use publish_after_payment::{
    PublishAfterPaymentCommand, PublishAfterPaymentHandler, PublishAfterPaymentResult,
    MISSING_FIELDS_MESSAGE,
};
pub use start_checkout::{
    StartCheckoutCommand, StartCheckoutHandler, StartCheckoutResult, CHECKOUT_DEFAULT_AMOUNT,
    CREATE_ORDER_DEFAULT_AMOUNT, DEFAULT_CURRENCY,
};
