//! ConfirmPaymentHandler - applies a verified payment confirmation to an order.
//!
//! The transition is idempotent per order row: only the pending → paid edge
//! writes anything. There is no locking, so two deliveries that both read
//! `pending` will both publish.

use std::sync::Arc;

use crate::domain::foundation::ExternalOrderId;
use crate::domain::memorial::{Memorial, NewMemorial};
use crate::domain::order::{NewOrder, Order, OrderError, OrderStatus, PaymentTransition};
use crate::ports::RecordStore;

/// Command to confirm payment of an order.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    /// Processor order id from the verified event.
    pub order_id: ExternalOrderId,
}

/// Result of applying a confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmPaymentResult {
    /// No local row existed; a minimal paid row was inserted.
    RecoveredMissingOrder { order: Order },

    /// Order was already paid; nothing changed.
    AlreadyPaid { order: Order },

    /// Order moved to paid. `memorial` is set when a draft was published.
    Paid {
        order: Order,
        memorial: Option<Memorial>,
    },

    /// Order is in a status this service does not manage; nothing changed.
    Rejected { order: Order, status: OrderStatus },
}

/// Handler for payment confirmations.
pub struct ConfirmPaymentHandler {
    store: Arc<dyn RecordStore>,
}

impl ConfirmPaymentHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmPaymentCommand,
    ) -> Result<ConfirmPaymentResult, OrderError> {
        let order_id = cmd.order_id;

        // 1. Look up the local order row
        let existing = self.store.find_order_by_external_id(&order_id).await?;

        // 2. Recovery path: confirmation arrived before any local record
        let Some(mut order) = existing else {
            let order = self
                .store
                .insert_order(&NewOrder::recovered_paid(order_id.clone()))
                .await
                .map_err(|e| log_after_payment(&order_id, "insert_order", e.into()))?;
            tracing::info!(order_id = %order_id, "Recorded paid order with no prior checkout row");
            return Ok(ConfirmPaymentResult::RecoveredMissingOrder { order });
        };

        // 3. Apply the transition in memory
        match order.confirm_payment() {
            PaymentTransition::AlreadyApplied => {
                tracing::debug!(order_id = %order_id, "Order already paid, ignoring confirmation");
                return Ok(ConfirmPaymentResult::AlreadyPaid { order });
            }
            PaymentTransition::Rejected { status } => {
                tracing::warn!(order_id = %order_id, status = %status, "Confirmation for order in unmanaged status");
                return Ok(ConfirmPaymentResult::Rejected { order, status });
            }
            PaymentTransition::Applied => {}
        }

        // 4. Persist pending → paid
        self.store
            .mark_order_paid(&order.id)
            .await
            .map_err(|e| log_after_payment(&order_id, "mark_order_paid", e.into()))?;
        tracing::info!(order_id = %order_id, "Order marked paid");

        // 5. Publish the draft, if the order carries one
        let memorial = self.publish_draft(&order).await?;

        Ok(ConfirmPaymentResult::Paid { order, memorial })
    }

    async fn publish_draft(&self, order: &Order) -> Result<Option<Memorial>, OrderError> {
        let Some((user_id, draft_id)) = order.publishable_draft() else {
            return Ok(None);
        };
        let order_id = &order.external_id;

        let draft = self
            .store
            .find_draft(&draft_id)
            .await
            .map_err(|e| log_after_payment(order_id, "find_draft", e.into()))?;

        let Some(draft) = draft else {
            tracing::warn!(order_id = %order_id, draft_id = %draft_id, "Paid order references a missing draft");
            return Ok(None);
        };

        let new_memorial = NewMemorial::from_draft(order_id, user_id.clone(), &draft).map_err(|e| {
            log_after_payment(
                order_id,
                "build_memorial",
                OrderError::infrastructure(format!("Draft {} cannot be published: {}", draft_id, e)),
            )
        })?;
        let memorial = self
            .store
            .insert_memorial(&new_memorial)
            .await
            .map_err(|e| log_after_payment(order_id, "insert_memorial", e.into()))?;

        tracing::info!(
            order_id = %order_id,
            slug = %new_memorial.slug,
            memorial_id = ?memorial.id,
            "Memorial published"
        );
        Ok(Some(memorial))
    }
}

/// Failures after the order was marked paid are the only trace of a lost
/// publication; retries see `AlreadyPaid`.
pub(crate) fn log_after_payment(order_id: &ExternalOrderId, step: &str, err: OrderError) -> OrderError {
    tracing::error!(order_id = %order_id, step, error = %err, "Datastore failure after payment confirmed");
    err
}
