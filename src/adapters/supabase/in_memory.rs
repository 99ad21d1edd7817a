//! In-memory record store for testing.
//!
//! Mirrors the PostgREST adapter's row semantics (generated ids, insert
//! returns the stored row, no uniqueness constraints) without a network.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It keeps every row in process
//! memory and offers error injection hooks.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::{
    DomainError, DraftId, ExternalOrderId, MemorialId, OrderRecordId, Timestamp,
};
use crate::domain::memorial::{Draft, Memorial, NewMemorial, Slug};
use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::ports::{RecordStore, StorePing};

/// In-memory record store.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryRecordStore::new();
/// store.seed_draft(draft);
/// store.seed_order(order);
///
/// // Assert in tests
/// assert_eq!(store.memorials().len(), 1);
/// ```
#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    orders: Vec<Order>,
    drafts: HashMap<DraftId, Draft>,
    memorials: Vec<Memorial>,
    method_errors: HashMap<String, DomainError>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Insert an order row as-is.
    pub fn seed_order(&self, order: Order) {
        self.tables().orders.push(order);
    }

    /// Insert a draft row as-is.
    pub fn seed_draft(&self, draft: Draft) {
        self.tables().drafts.insert(draft.id, draft);
    }

    /// Insert a memorial row as-is.
    pub fn seed_memorial(&self, memorial: Memorial) {
        self.tables().memorials.push(memorial);
    }

    /// Fail every call to `method` with `error`.
    pub fn fail_method(&self, method: &str, error: DomainError) {
        self.tables()
            .method_errors
            .insert(method.to_string(), error);
    }

    /// All order rows.
    pub fn orders(&self) -> Vec<Order> {
        self.tables().orders.clone()
    }

    /// All memorial rows, in insertion order.
    pub fn memorials(&self) -> Vec<Memorial> {
        self.tables().memorials.clone()
    }

    /// Order rows for one processor order id.
    pub fn orders_for(&self, external_id: &str) -> Vec<Order> {
        self.tables()
            .orders
            .iter()
            .filter(|o| o.external_id.as_str() == external_id)
            .cloned()
            .collect()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self, method: &str) -> Result<(), DomainError> {
        match self.tables().method_errors.get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_order_by_external_id(
        &self,
        external_id: &ExternalOrderId,
    ) -> Result<Option<Order>, DomainError> {
        self.check("find_order_by_external_id")?;
        Ok(self
            .tables()
            .orders
            .iter()
            .find(|o| &o.external_id == external_id)
            .cloned())
    }

    async fn insert_order(&self, order: &NewOrder) -> Result<Order, DomainError> {
        self.check("insert_order")?;
        let stored = Order {
            id: OrderRecordId::new(),
            external_id: order.external_id.clone(),
            status: order.status,
            user_id: order.user_id.clone(),
            draft_id: order.draft_id,
        };
        self.tables().orders.push(stored.clone());
        Ok(stored)
    }

    async fn mark_order_paid(&self, id: &OrderRecordId) -> Result<(), DomainError> {
        self.check("mark_order_paid")?;
        for order in self.tables().orders.iter_mut().filter(|o| &o.id == id) {
            order.status = OrderStatus::Paid;
        }
        Ok(())
    }

    async fn find_draft(&self, id: &DraftId) -> Result<Option<Draft>, DomainError> {
        self.check("find_draft")?;
        Ok(self.tables().drafts.get(id).cloned())
    }

    async fn insert_memorial(&self, memorial: &NewMemorial) -> Result<Memorial, DomainError> {
        self.check("insert_memorial")?;

        let mut row = serde_json::to_value(memorial)
            .map_err(|e| DomainError::database(format!("Failed to encode memorial: {}", e)))?;
        if let Value::Object(columns) = &mut row {
            columns.insert("id".to_string(), serde_json::to_value(MemorialId::new()).unwrap_or_default());
            columns.insert(
                "created_at".to_string(),
                serde_json::to_value(Timestamp::now()).unwrap_or_default(),
            );
        }
        let stored: Memorial = serde_json::from_value(row)
            .map_err(|e| DomainError::database(format!("Failed to decode memorial: {}", e)))?;

        self.tables().memorials.push(stored.clone());
        Ok(stored)
    }

    async fn find_memorial_by_slug(&self, slug: &Slug) -> Result<Option<Memorial>, DomainError> {
        self.check("find_memorial_by_slug")?;
        Ok(self
            .tables()
            .memorials
            .iter()
            .find(|m| m.slug.as_deref() == Some(slug.as_str()))
            .cloned())
    }

    async fn list_memorials(&self, limit: usize) -> Result<Vec<Memorial>, DomainError> {
        self.check("list_memorials")?;
        Ok(self
            .tables()
            .memorials
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<StorePing, DomainError> {
        self.check("ping")?;
        Ok(StorePing {
            memorials_count: Some(self.tables().memorials.len() as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn inserted_order_can_be_found_and_marked_paid() {
        let store = InMemoryRecordStore::new();
        let external_id = ExternalOrderId::new("ORDER-1").unwrap();
        let order = store
            .insert_order(&NewOrder::pending(external_id.clone(), None, None))
            .await
            .unwrap();

        store.mark_order_paid(&order.id).await.unwrap();

        let found = store
            .find_order_by_external_id(&external_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn inserted_memorial_gets_id_and_creation_time() {
        let store = InMemoryRecordStore::new();
        let draft = Draft {
            id: DraftId::new(),
            title: None,
            slug: Some("ghost".to_string()),
            data: None,
        };
        let new = NewMemorial::from_draft(
            &ExternalOrderId::new("ORDER-1").unwrap(),
            UserId::new("user-1").unwrap(),
            &draft,
        )
        .unwrap();

        let stored = store.insert_memorial(&new).await.unwrap();

        assert_eq!(stored.slug.as_deref(), Some("ghost"));
        assert!(stored.created_at.is_some());
        let found = store
            .find_memorial_by_slug(&Slug::new("ghost").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn list_returns_newest_first_up_to_limit() {
        let store = InMemoryRecordStore::new();
        for name in ["a", "b", "c"] {
            let new = NewMemorial::from_payment_form(
                ExternalOrderId::new(format!("ORDER-{}", name)).unwrap(),
                name,
                "Game",
                None,
            )
            .unwrap();
            store.insert_memorial(&new).await.unwrap();
        }

        let listed = store.list_memorials(2).await.unwrap();
        let names: Vec<_> = listed.iter().filter_map(|m| m.name.as_deref()).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[tokio::test]
    async fn injected_error_is_returned() {
        let store = InMemoryRecordStore::new();
        store.fail_method("ping", DomainError::database("unreachable"));
        assert!(store.ping().await.is_err());
    }
}
