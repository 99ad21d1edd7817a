//! GetMemorialHandler - Query handler for one published memorial.

use std::sync::Arc;

use crate::domain::memorial::{Memorial, MemorialError, Slug};
use crate::ports::RecordStore;

/// Query for a memorial by its public slug.
#[derive(Debug, Clone)]
pub struct GetMemorialQuery {
    /// Raw path segment; validated by the handler.
    pub slug: String,
}

pub type GetMemorialResult = Memorial;

/// Handler for memorial lookups.
///
/// A slug that could never have been stored is reported as not found
/// without touching the datastore.
pub struct GetMemorialHandler {
    store: Arc<dyn RecordStore>,
}

impl GetMemorialHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetMemorialQuery) -> Result<GetMemorialResult, MemorialError> {
        let slug = Slug::new(query.slug.as_str())
            .map_err(|_| MemorialError::not_found(query.slug.trim()))?;

        self.store
            .find_memorial_by_slug(&slug)
            .await?
            .ok_or_else(|| MemorialError::not_found(slug.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        DomainError, DraftId, ExternalOrderId, OrderRecordId,
    };
    use crate::domain::memorial::{Draft, NewMemorial};
    use crate::domain::order::{NewOrder, Order};
    use crate::ports::StorePing;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockRecordStore {
        memorials: Vec<Memorial>,
        fail_read: bool,
        lookups: Mutex<Vec<String>>,
    }

    impl MockRecordStore {
        fn new() -> Self {
            Self {
                memorials: Vec::new(),
                fail_read: false,
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn with_memorial(memorial: Memorial) -> Self {
            Self {
                memorials: vec![memorial],
                ..Self::new()
            }
        }

        fn failing() -> Self {
            Self {
                fail_read: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl RecordStore for MockRecordStore {
        async fn find_order_by_external_id(
            &self,
            _external_id: &ExternalOrderId,
        ) -> Result<Option<Order>, DomainError> {
            unimplemented!()
        }

        async fn insert_order(&self, _order: &NewOrder) -> Result<Order, DomainError> {
            unimplemented!()
        }

        async fn mark_order_paid(&self, _id: &OrderRecordId) -> Result<(), DomainError> {
            unimplemented!()
        }

        async fn find_draft(&self, _id: &DraftId) -> Result<Option<Draft>, DomainError> {
            unimplemented!()
        }

        async fn insert_memorial(&self, _memorial: &NewMemorial) -> Result<Memorial, DomainError> {
            unimplemented!()
        }

        async fn find_memorial_by_slug(&self, slug: &Slug) -> Result<Option<Memorial>, DomainError> {
            self.lookups.lock().unwrap().push(slug.to_string());
            if self.fail_read {
                return Err(DomainError::database("Supabase memorials error"));
            }
            Ok(self
                .memorials
                .iter()
                .find(|m| m.slug.as_deref() == Some(slug.as_str()))
                .cloned())
        }

        async fn list_memorials(&self, _limit: usize) -> Result<Vec<Memorial>, DomainError> {
            unimplemented!()
        }

        async fn ping(&self) -> Result<StorePing, DomainError> {
            unimplemented!()
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn memorial(slug: &str) -> Memorial {
        serde_json::from_value(serde_json::json!({
            "id": "0b4e7c2e-6a5d-4f0f-8d7b-3c1a2e9f4b10",
            "slug": slug,
            "title": "ShadowReaper"
        }))
        .unwrap()
    }

    fn query(slug: &str) -> GetMemorialQuery {
        GetMemorialQuery {
            slug: slug.to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn returns_memorial_for_known_slug() {
        let handler = GetMemorialHandler::new(Arc::new(MockRecordStore::with_memorial(memorial("shadow"))));

        let result = handler.handle(query("shadow")).await.unwrap();

        assert_eq!(result.title.as_deref(), Some("ShadowReaper"));
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let handler = GetMemorialHandler::new(Arc::new(MockRecordStore::new()));

        let err = handler.handle(query("ghost")).await.unwrap_err();

        assert_eq!(err, MemorialError::not_found("ghost"));
    }

    #[tokio::test]
    async fn malformed_slug_skips_datastore() {
        let store = Arc::new(MockRecordStore::new());
        let handler = GetMemorialHandler::new(store.clone());

        let err = handler.handle(query("a/b")).await.unwrap_err();

        assert!(matches!(err, MemorialError::NotFound(_)));
        assert!(store.lookups.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn datastore_failure_is_infrastructure_error() {
        let handler = GetMemorialHandler::new(Arc::new(MockRecordStore::failing()));

        let err = handler.handle(query("shadow")).await.unwrap_err();

        assert_eq!(err, MemorialError::Infrastructure("Supabase memorials error".to_string()));
    }
}
