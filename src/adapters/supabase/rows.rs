//! PostgREST row shapes for the `orders` table.
//!
//! Drafts and memorials deserialize straight into their domain types;
//! orders need the column names and a lenient status mapping.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, DraftId, ExternalOrderId, OrderRecordId, UserId};
use crate::domain::order::{NewOrder, Order, OrderStatus};

/// Columns selected when reading orders.
pub const ORDER_COLUMNS: &str = "id,paypal_order_id,status,user_id,draft_id";

/// Columns selected when reading drafts.
pub const DRAFT_COLUMNS: &str = "id,title,slug,data";

#[derive(Debug, Deserialize)]
pub struct OrderRow {
    pub id: OrderRecordId,
    pub paypal_order_id: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub draft_id: Option<DraftId>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_column(row.status.as_deref().unwrap_or_default());
        if status == OrderStatus::Unrecognized {
            tracing::warn!(
                order_row = %row.id,
                status = row.status.as_deref().unwrap_or_default(),
                "Order row has a status this service does not manage"
            );
        }

        Ok(Order {
            id: row.id,
            external_id: ExternalOrderId::new(row.paypal_order_id)?,
            status,
            user_id: row.user_id.and_then(|id| UserId::new(id).ok()),
            draft_id: row.draft_id,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct NewOrderRow<'a> {
    pub paypal_order_id: &'a str,
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<DraftId>,
}

impl<'a> From<&'a NewOrder> for NewOrderRow<'a> {
    fn from(order: &'a NewOrder) -> Self {
        Self {
            paypal_order_id: order.external_id.as_str(),
            status: order.status.as_str(),
            user_id: order.user_id.as_ref().map(UserId::as_str),
            draft_id: order.draft_id,
        }
    }
}

/// Parses the total from a `Content-Range` header such as `0-0/42` or `*/0`.
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    header.rsplit_once('/').and_then(|(_, total)| total.parse().ok())
}
