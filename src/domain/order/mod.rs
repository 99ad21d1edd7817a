//! Order module - payment state of a memorial purchase.
//!
//! # Lifecycle
//!
//! ```text
//! (checkout) ──► pending ──confirmation──► paid ──► memorial published
//!                                           ▲
//! (confirmation with no local row) ─────────┘  recovery, nothing published
//! ```

mod aggregate;
mod errors;
mod event;
mod status;

pub use aggregate::{NewOrder, Order, PaymentTransition};
pub use errors::OrderError;
pub use event::{
    PaymentEvent, PaymentEventEnvelope, PaymentEventKind, CHECKOUT_ORDER_APPROVED,
    PAYMENT_CAPTURE_COMPLETED,
};
pub use status::OrderStatus;
