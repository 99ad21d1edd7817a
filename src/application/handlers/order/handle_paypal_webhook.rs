//! HandlePayPalWebhookHandler - verifies and dispatches processor webhooks.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::order::{OrderError, PaymentEvent};
use crate::ports::{PaymentGateway, RecordStore, WebhookHeaders};

use super::confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult};

/// Command to handle a webhook delivery.
#[derive(Debug, Clone)]
pub struct HandlePayPalWebhookCommand {
    /// `paypal-*` transmission headers.
    pub headers: WebhookHeaders,
    /// Delivered event body.
    pub event: Value,
}

/// Result of webhook processing.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlePayPalWebhookResult {
    /// Payment confirmation applied.
    Confirmed(ConfirmPaymentResult),
    /// Verified event of a type that does not drive the workflow.
    Ignored { event_type: String },
}

/// Handler for PayPal webhooks.
///
/// Nothing is read or written before the processor vouches for the event.
pub struct HandlePayPalWebhookHandler {
    gateway: Arc<dyn PaymentGateway>,
    confirm: ConfirmPaymentHandler,
}

impl HandlePayPalWebhookHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            gateway,
            confirm: ConfirmPaymentHandler::new(store),
        }
    }

    pub async fn handle(
        &self,
        cmd: HandlePayPalWebhookCommand,
    ) -> Result<HandlePayPalWebhookResult, OrderError> {
        // 1. Verify with the processor
        let verified = self.gateway.verify_event(&cmd.headers, &cmd.event).await?;
        if !verified {
            return Err(OrderError::invalid_webhook_signature());
        }

        // 2. Classify
        let event = PaymentEvent::parse(&cmd.event)?;
        if !event.kind.confirms_payment() {
            tracing::debug!(event_type = event.kind.as_str(), "Ignoring webhook event");
            return Ok(HandlePayPalWebhookResult::Ignored {
                event_type: event.kind.as_str().to_string(),
            });
        }

        let order_id = event
            .order_id
            .ok_or_else(|| OrderError::validation("resource.id", "Webhook event carries no order id"))?;

        tracing::info!(
            event_id = event.event_id.as_deref().unwrap_or_default(),
            event_type = event.kind.as_str(),
            order_id = %order_id,
            "Payment confirmation received"
        );

        // 3. Apply
        let result = self
            .confirm
            .handle(ConfirmPaymentCommand { order_id })
            .await?;

        Ok(HandlePayPalWebhookResult::Confirmed(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::adapters::supabase::InMemoryRecordStore;
    use crate::domain::order::OrderStatus;
    use crate::ports::GatewayError;
    use serde_json::json;

    fn approved_event(order_id: &str) -> Value {
        json!({
            "id": "WH-1",
            "event_type": "CHECKOUT.ORDER.APPROVED",
            "resource": {"id": order_id, "status": "APPROVED"}
        })
    }

    fn cmd(event: Value) -> HandlePayPalWebhookCommand {
        HandlePayPalWebhookCommand {
            headers: WebhookHeaders::default(),
            event,
        }
    }

    #[tokio::test]
    async fn verified_approval_confirms_order() {
        let store = Arc::new(InMemoryRecordStore::new());
        let handler = HandlePayPalWebhookHandler::new(Arc::new(MockPaymentGateway::new()), store.clone());

        let result = handler.handle(cmd(approved_event("ORDER-1"))).await.unwrap();

        assert!(matches!(
            result,
            HandlePayPalWebhookResult::Confirmed(ConfirmPaymentResult::RecoveredMissingOrder { .. })
        ));
        assert_eq!(store.orders_for("ORDER-1")[0].status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn failed_verification_is_rejected_without_mutation() {
        let store = Arc::new(InMemoryRecordStore::new());
        let handler = HandlePayPalWebhookHandler::new(
            Arc::new(MockPaymentGateway::rejecting_webhooks()),
            store.clone(),
        );

        let err = handler.handle(cmd(approved_event("ORDER-1"))).await.unwrap_err();

        assert_eq!(err, OrderError::InvalidWebhookSignature);
        assert!(store.orders().is_empty());
    }

    #[tokio::test]
    async fn unrelated_event_is_ignored() {
        let store = Arc::new(InMemoryRecordStore::new());
        let handler = HandlePayPalWebhookHandler::new(Arc::new(MockPaymentGateway::new()), store.clone());

        let result = handler
            .handle(cmd(json!({
                "event_type": "CUSTOMER.DISPUTE.CREATED",
                "resource": {"id": "PP-D-1"}
            })))
            .await
            .unwrap();

        assert_eq!(
            result,
            HandlePayPalWebhookResult::Ignored {
                event_type: "CUSTOMER.DISPUTE.CREATED".to_string()
            }
        );
        assert!(store.orders().is_empty());
    }

    #[tokio::test]
    async fn confirmation_without_order_id_is_invalid() {
        let handler = HandlePayPalWebhookHandler::new(
            Arc::new(MockPaymentGateway::new()),
            Arc::new(InMemoryRecordStore::new()),
        );

        let err = handler
            .handle(cmd(json!({"event_type": "CHECKOUT.ORDER.APPROVED", "resource": {}})))
            .await
            .unwrap_err();

        assert!(matches!(err, OrderError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn missing_webhook_id_is_configuration_error() {
        let gateway = MockPaymentGateway::new();
        gateway.set_method_error("verify_event", GatewayError::missing_configuration("PAYPAL_WEBHOOK_ID"));
        let handler = HandlePayPalWebhookHandler::new(Arc::new(gateway), Arc::new(InMemoryRecordStore::new()));

        let err = handler.handle(cmd(approved_event("ORDER-1"))).await.unwrap_err();

        assert_eq!(err, OrderError::ConfigurationMissing("PAYPAL_WEBHOOK_ID".to_string()));
    }
}
