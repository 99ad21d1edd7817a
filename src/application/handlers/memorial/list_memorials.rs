//! ListMemorialsHandler - Query handler for the recent memorials listing.

use std::sync::Arc;

use crate::domain::memorial::{Memorial, MemorialError};
use crate::ports::{RecordStore, DEFAULT_LISTING_LIMIT};

/// Largest page a caller may request.
pub const MAX_LISTING_LIMIT: usize = 100;

/// Query for recent memorials.
#[derive(Debug, Clone, Default)]
pub struct ListMemorialsQuery {
    /// Requested page size; clamped to `1..=MAX_LISTING_LIMIT`.
    pub limit: Option<usize>,
}

impl ListMemorialsQuery {
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_LISTING_LIMIT)
            .clamp(1, MAX_LISTING_LIMIT)
    }
}

pub type ListMemorialsResult = Vec<Memorial>;

pub struct ListMemorialsHandler {
    store: Arc<dyn RecordStore>,
}

impl ListMemorialsHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListMemorialsQuery) -> Result<ListMemorialsResult, MemorialError> {
        Ok(self.store.list_memorials(query.effective_limit()).await?)
    }
}
