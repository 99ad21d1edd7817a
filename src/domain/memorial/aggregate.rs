//! Published memorials.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{
    DraftId, ExternalOrderId, MemorialId, Timestamp, UserId, ValidationError,
};

use super::{Draft, Slug};

/// `status` column value written for memorials published after payment.
pub const PUBLISHED: &str = "published";

/// A memorial row as stored.
///
/// Two writers fill different columns: the webhook path writes
/// `slug`/`title`/`content`/`user_id`/`draft_id`, the after-pay path writes
/// `name`/`game`/`years`/`order_id`/`status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memorial {
    /// Key column, integer or UUID depending on the table.
    #[serde(default)]
    pub id: Option<MemorialId>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<Value>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub draft_id: Option<DraftId>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub game: Option<String>,

    #[serde(default)]
    pub years: Option<String>,

    #[serde(default)]
    pub order_id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub published_at: Option<Timestamp>,

    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl Memorial {
    /// Field from the content payload, as a non-blank string.
    pub fn content_str(&self, key: &str) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|c| c.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// When the memorial went public, falling back to row creation.
    pub fn shown_at(&self) -> Option<Timestamp> {
        self.published_at.or(self.created_at)
    }
}

/// A memorial row to insert. Absent fields are omitted from the insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMemorial {
    pub slug: Slug,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<DraftId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,

    /// Written as `null` when absent, like the other after-pay columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<ExternalOrderId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
}

impl NewMemorial {
    /// Memorial published from a paid order's draft.
    pub fn from_draft(
        order_id: &ExternalOrderId,
        user_id: UserId,
        draft: &Draft,
    ) -> Result<Self, ValidationError> {
        let slug = draft
            .publish_slug(order_id)
            .ok_or_else(|| ValidationError::invalid_format("slug", "no usable slug for order"))?;

        Ok(Self {
            slug,
            title: Some(draft.publish_title()),
            content: Some(draft.publish_content()),
            user_id: Some(user_id),
            draft_id: Some(draft.id),
            name: None,
            game: None,
            years: None,
            order_id: None,
            status: None,
        })
    }

    /// Memorial published directly from the payment page form.
    ///
    /// The order id doubles as slug and the character name as title, so the
    /// memorial is reachable at `/m/{order id}`.
    pub fn from_payment_form(
        order_id: ExternalOrderId,
        name: &str,
        game: &str,
        years: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = required(name, "name")?;
        let game = required(game, "game")?;
        let years = years
            .map(str::trim)
            .filter(|y| !y.is_empty())
            .map(String::from);

        Ok(Self {
            slug: Slug::from_order_id(&order_id)?,
            title: Some(name.clone()),
            content: None,
            user_id: None,
            draft_id: None,
            name: Some(name),
            game: Some(game),
            years: Some(years),
            order_id: Some(order_id),
            status: Some(PUBLISHED),
        })
    }
}

fn required(value: &str, field: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(trimmed.to_string())
    }
}
