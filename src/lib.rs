//! RIP Gamertags - an online gamer cemetery.
//!
//! Visitors pay a nominal fee through PayPal to publish a memorial page for a
//! retired game character. Memorials live in Supabase, reached over its
//! PostgREST interface.
//!
//! Layout follows ports and adapters:
//! - [`domain`] - orders, the payment state machine, drafts and memorials
//! - [`ports`] - `PaymentGateway` and `RecordStore`
//! - [`application`] - checkout, webhook, after-pay and memorial queries
//! - [`adapters`] - PayPal, Supabase and the axum HTTP layer
//! - [`config`] - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
