//! Record store port for the hosted datastore.
//!
//! Thin row-level pass-through over the `orders`, `burial_drafts` and
//! `memorials` tables. No retries and no cross-table transactions: each
//! call is one independent request.
//!
//! # Example
//!
//! ```ignore
//! async fn publish(store: &dyn RecordStore, order: &Order, draft_id: DraftId)
//!     -> Result<Option<Memorial>, DomainError>
//! {
//!     let Some(draft) = store.find_draft(&draft_id).await? else {
//!         return Ok(None);
//!     };
//!     let new = NewMemorial::from_draft(&order.external_id, user_id, &draft)?;
//!     store.insert_memorial(&new).await.map(Some)
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{DomainError, DraftId, ExternalOrderId, OrderRecordId};
use crate::domain::memorial::{Draft, Memorial, NewMemorial, Slug};
use crate::domain::order::{NewOrder, Order};

/// Default page size of memorial listings.
pub const DEFAULT_LISTING_LIMIT: usize = 24;

/// Repository port over the memorial datastore.
///
/// # Errors
///
/// - `ConfigurationMissing` if the datastore URL or the key the
///   operation needs is absent
/// - `DatabaseError` on transport failure or non-success response
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Find an order by the processor's order id.
    async fn find_order_by_external_id(
        &self,
        external_id: &ExternalOrderId,
    ) -> Result<Option<Order>, DomainError>;

    /// Insert an order row and return it as stored.
    async fn insert_order(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Set an order's status to `paid`.
    async fn mark_order_paid(&self, id: &OrderRecordId) -> Result<(), DomainError>;

    /// Find a draft by row id.
    async fn find_draft(&self, id: &DraftId) -> Result<Option<Draft>, DomainError>;

    /// Insert a memorial row and return it as stored.
    async fn insert_memorial(&self, memorial: &NewMemorial) -> Result<Memorial, DomainError>;

    /// Find a memorial by slug.
    async fn find_memorial_by_slug(&self, slug: &Slug) -> Result<Option<Memorial>, DomainError>;

    /// Most recent memorials first, at most `limit`.
    async fn list_memorials(&self, limit: usize) -> Result<Vec<Memorial>, DomainError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<StorePing, DomainError>;
}

/// Outcome of a reachability check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorePing {
    /// Total memorial rows, when the datastore reports a count.
    pub memorials_count: Option<u64>,
}
