//! Order aggregate.
//!
//! # Invariants
//!
//! - `external_id` is the processor's order id and never changes
//! - `status` only moves along the `OrderStatus` state machine
//! - A memorial is published only from the pending → paid edge

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DraftId, ExternalOrderId, OrderRecordId, StateMachine, UserId};

use super::OrderStatus;

/// An order row as read from the datastore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Datastore row id.
    pub id: OrderRecordId,

    /// Processor-assigned order id.
    pub external_id: ExternalOrderId,

    /// Current status.
    pub status: OrderStatus,

    /// Owner, when checkout was started by a signed-in user.
    pub user_id: Option<UserId>,

    /// Draft to publish once paid.
    pub draft_id: Option<DraftId>,
}

/// Outcome of applying a payment confirmation to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentTransition {
    /// Order moved from pending to paid.
    Applied,

    /// Order was already paid; nothing changed.
    AlreadyApplied,

    /// Order is in a status the workflow does not own; nothing changed.
    Rejected { status: OrderStatus },
}

impl Order {
    /// Applies a payment confirmation in memory.
    ///
    /// Only `Applied` mutates the order; callers persist the new status and
    /// publish the draft in that case only.
    pub fn confirm_payment(&mut self) -> PaymentTransition {
        match self.status.transition_to(OrderStatus::Paid) {
            Ok(next) => {
                self.status = next;
                PaymentTransition::Applied
            }
            Err(_) if self.status == OrderStatus::Paid => PaymentTransition::AlreadyApplied,
            Err(_) => PaymentTransition::Rejected {
                status: self.status,
            },
        }
    }

    /// Draft to publish, present only when the order has both an owner and a draft.
    pub fn publishable_draft(&self) -> Option<(&UserId, DraftId)> {
        match (&self.user_id, self.draft_id) {
            (Some(user_id), Some(draft_id)) => Some((user_id, draft_id)),
            _ => None,
        }
    }
}

/// An order row to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub external_id: ExternalOrderId,
    pub status: OrderStatus,
    pub user_id: Option<UserId>,
    pub draft_id: Option<DraftId>,
}

impl NewOrder {
    /// Minimal row for a confirmation that arrived before any local record.
    pub fn recovered_paid(external_id: ExternalOrderId) -> Self {
        Self {
            external_id,
            status: OrderStatus::Paid,
            user_id: None,
            draft_id: None,
        }
    }

    /// Row written when a signed-in user starts checkout for a draft.
    pub fn pending(
        external_id: ExternalOrderId,
        user_id: Option<UserId>,
        draft_id: Option<DraftId>,
    ) -> Self {
        Self {
            external_id,
            status: OrderStatus::Pending,
            user_id,
            draft_id,
        }
    }
}
