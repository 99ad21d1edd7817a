//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod memorial;
pub mod order;

pub use memorial::{
    GetMemorialHandler, GetMemorialQuery, GetMemorialResult, ListMemorialsHandler,
    ListMemorialsQuery, ListMemorialsResult,
};
pub use order::{
    ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult,
    HandlePayPalWebhookCommand, HandlePayPalWebhookHandler, HandlePayPalWebhookResult,
    PublishAfterPaymentCommand, PublishAfterPaymentHandler, PublishAfterPaymentResult,
    StartCheckoutCommand, StartCheckoutHandler, StartCheckoutResult,
};
