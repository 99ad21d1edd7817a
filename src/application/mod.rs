//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (checkout, webhook, after-pay) write; query handlers
//! (memorial lookup and listing) only read.

pub mod handlers;

pub use handlers::{
    // Order handlers
    ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult,
    HandlePayPalWebhookCommand, HandlePayPalWebhookHandler, HandlePayPalWebhookResult,
    PublishAfterPaymentCommand, PublishAfterPaymentHandler, PublishAfterPaymentResult,
    StartCheckoutCommand, StartCheckoutHandler, StartCheckoutResult,
    // Memorial handlers
    GetMemorialHandler, GetMemorialQuery, GetMemorialResult,
    ListMemorialsHandler, ListMemorialsQuery, ListMemorialsResult,
};
