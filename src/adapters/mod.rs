//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes, pages and error responses
//! - `paypal` - `PaymentGateway` over the PayPal REST API (plus a mock)
//! - `supabase` - `RecordStore` over Supabase PostgREST (plus an in-memory store)

pub mod http;
pub mod paypal;
pub mod supabase;

pub use http::{app_router, AppState, SiteSettings};
pub use paypal::{MockPaymentGateway, PayPalGateway, PayPalGatewayConfig};
pub use supabase::{InMemoryRecordStore, SupabaseRecordStore, SupabaseStoreConfig};
