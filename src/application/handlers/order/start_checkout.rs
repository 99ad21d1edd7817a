//! StartCheckoutHandler - creates a processor order for the payment page.

use std::sync::Arc;

use crate::domain::foundation::{DraftId, ExternalOrderId, UserId};
use crate::domain::order::{NewOrder, OrderError};
use crate::ports::{CreateOrderRequest, PaymentGateway, RecordStore};

/// Amount charged by the payment page.
pub const CHECKOUT_DEFAULT_AMOUNT: &str = "1.00";

/// Amount charged by the standalone order endpoint.
pub const CREATE_ORDER_DEFAULT_AMOUNT: &str = "29.00";

pub const DEFAULT_CURRENCY: &str = "USD";

/// Command to start a checkout.
#[derive(Debug, Clone)]
pub struct StartCheckoutCommand {
    pub amount: String,
    pub currency: String,
    /// Owner of the draft, when a signed-in user is paying for one.
    pub user_id: Option<UserId>,
    /// Draft to publish once paid.
    pub draft_id: Option<DraftId>,
}

impl StartCheckoutCommand {
    /// Command with the given defaults filled in for absent fields.
    pub fn with_defaults(
        amount: Option<String>,
        currency: Option<String>,
        default_amount: &str,
    ) -> Self {
        Self {
            amount: amount.unwrap_or_else(|| default_amount.to_string()),
            currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            user_id: None,
            draft_id: None,
        }
    }

    /// Link the checkout to a user's draft.
    pub fn for_draft(mut self, user_id: Option<UserId>, draft_id: Option<DraftId>) -> Self {
        self.user_id = user_id;
        self.draft_id = draft_id;
        self
    }
}

/// Result of starting a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCheckoutResult {
    /// Processor-assigned order id.
    pub order_id: String,
    /// Processor status of the new order, usually `CREATED`.
    pub status: Option<String>,
    /// Whether a pending local order row was written.
    pub recorded: bool,
}

/// Handler for starting checkouts.
pub struct StartCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn RecordStore>,
}

impl StartCheckoutHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, store: Arc<dyn RecordStore>) -> Self {
        Self { gateway, store }
    }

    pub async fn handle(&self, cmd: StartCheckoutCommand) -> Result<StartCheckoutResult, OrderError> {
        let request = CreateOrderRequest::new(cmd.amount, cmd.currency)?;
        let created = self.gateway.create_order(request).await?;

        // Anonymous checkouts have nothing to link; the webhook recovers them.
        let recorded = if cmd.draft_id.is_some() {
            let external_id = ExternalOrderId::new(created.id.clone())?;
            self.store
                .insert_order(&NewOrder::pending(external_id, cmd.user_id, cmd.draft_id))
                .await?;
            true
        } else {
            false
        };

        Ok(StartCheckoutResult {
            order_id: created.id,
            status: created.status,
            recorded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::adapters::supabase::InMemoryRecordStore;
    use crate::domain::order::OrderStatus;
    use crate::ports::GatewayError;

    fn handler(gateway: MockPaymentGateway, store: Arc<InMemoryRecordStore>) -> StartCheckoutHandler {
        StartCheckoutHandler::new(Arc::new(gateway), store)
    }

    #[test]
    fn defaults_fill_absent_fields() {
        let cmd = StartCheckoutCommand::with_defaults(None, None, CHECKOUT_DEFAULT_AMOUNT);
        assert_eq!(cmd.amount, "1.00");
        assert_eq!(cmd.currency, "USD");

        let cmd = StartCheckoutCommand::with_defaults(Some("5.00".into()), Some("EUR".into()), CREATE_ORDER_DEFAULT_AMOUNT);
        assert_eq!(cmd.amount, "5.00");
        assert_eq!(cmd.currency, "EUR");
    }

    #[tokio::test]
    async fn anonymous_checkout_creates_processor_order_only() {
        let gateway = MockPaymentGateway::new().with_next_order_id("ORDER-1");
        let store = Arc::new(InMemoryRecordStore::new());

        let result = handler(gateway.clone(), store.clone())
            .handle(StartCheckoutCommand::with_defaults(None, None, CHECKOUT_DEFAULT_AMOUNT))
            .await
            .unwrap();

        assert_eq!(result.order_id, "ORDER-1");
        assert!(!result.recorded);
        assert!(store.orders().is_empty());
        assert_eq!(gateway.created_orders()[0].amount, "1.00");
    }

    #[tokio::test]
    async fn draft_checkout_records_pending_order() {
        let gateway = MockPaymentGateway::new().with_next_order_id("ORDER-2");
        let store = Arc::new(InMemoryRecordStore::new());
        let draft_id = DraftId::new();

        let cmd = StartCheckoutCommand::with_defaults(None, None, CHECKOUT_DEFAULT_AMOUNT)
            .for_draft(Some(UserId::new("user-1").unwrap()), Some(draft_id));
        let result = handler(gateway, store.clone()).handle(cmd).await.unwrap();

        assert!(result.recorded);
        let orders = store.orders_for("ORDER-2");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[0].draft_id, Some(draft_id));
    }

    #[tokio::test]
    async fn blank_amount_is_validation_error() {
        let gateway = MockPaymentGateway::new();
        let err = handler(gateway.clone(), Arc::new(InMemoryRecordStore::new()))
            .handle(StartCheckoutCommand::with_defaults(Some(" ".into()), None, CHECKOUT_DEFAULT_AMOUNT))
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::ValidationFailed { .. }));
        assert_eq!(gateway.call_count("create_order"), 0);
    }

    #[tokio::test]
    async fn processor_rejection_surfaces_details() {
        let gateway = MockPaymentGateway::new();
        gateway.set_method_error(
            "create_order",
            GatewayError::rejected("Create order error").with_details("{\"name\":\"INVALID_REQUEST\"}"),
        );

        let err = handler(gateway, Arc::new(InMemoryRecordStore::new()))
            .handle(StartCheckoutCommand::with_defaults(None, None, CHECKOUT_DEFAULT_AMOUNT))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrderError::UpstreamRejected { ref details, .. } if details.as_deref() == Some("{\"name\":\"INVALID_REQUEST\"}")
        ));
    }
}
