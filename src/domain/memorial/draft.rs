//! Pre-payment memorial drafts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DraftId, ExternalOrderId};

use super::Slug;

/// Title used when a draft does not provide one.
pub const DEFAULT_TITLE: &str = "Memorial";

/// A user-authored memorial awaiting publication.
///
/// Read-only from the payment workflow's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub id: DraftId,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    /// Free-form content payload.
    #[serde(default)]
    pub data: Option<Value>,
}

impl Draft {
    /// Slug to publish under: the draft's own when valid, otherwise the order id.
    pub fn publish_slug(&self, order_id: &ExternalOrderId) -> Option<Slug> {
        self.slug
            .as_deref()
            .and_then(|s| Slug::new(s).ok())
            .or_else(|| Slug::from_order_id(order_id).ok())
    }

    pub fn publish_title(&self) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    pub fn publish_content(&self) -> Value {
        match &self.data {
            Some(Value::Null) | None => Value::Object(Default::default()),
            Some(data) => data.clone(),
        }
    }
}
