//! Domain layer - memorial purchase and publication.
//!
//! - `foundation`: identifiers, errors, timestamps and the state machine trait
//! - `order`: payment status of a purchase and the webhook events that move it
//! - `memorial`: drafts, published memorials and their display profile

pub mod foundation;
pub mod memorial;
pub mod order;
