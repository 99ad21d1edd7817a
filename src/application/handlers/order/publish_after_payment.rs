//! PublishAfterPaymentHandler - publishes a memorial from the payment page form.
//!
//! The browser reports the approved order id; the processor is asked for the
//! order's status before anything is written.

use std::sync::Arc;

use crate::domain::foundation::ExternalOrderId;
use crate::domain::memorial::{Memorial, NewMemorial};
use crate::domain::order::OrderError;
use crate::ports::{GatewayError, GatewayErrorCode, PaymentGateway, RecordStore};

use super::confirm_payment::log_after_payment;

/// Message returned when a required form field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing name, game, or orderId";

const ORDER_FETCH_ERROR: &str = "PayPal order fetch error";

/// Command to publish after payment.
#[derive(Debug, Clone, Default)]
pub struct PublishAfterPaymentCommand {
    pub name: Option<String>,
    pub game: Option<String>,
    pub years: Option<String>,
    pub order_id: Option<String>,
}

/// Result of publishing.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishAfterPaymentResult {
    pub memorial: Memorial,
}

/// Handler for post-payment publication.
pub struct PublishAfterPaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn RecordStore>,
}

impl PublishAfterPaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, store: Arc<dyn RecordStore>) -> Self {
        Self { gateway, store }
    }

    pub async fn handle(
        &self,
        cmd: PublishAfterPaymentCommand,
    ) -> Result<PublishAfterPaymentResult, OrderError> {
        // 1. Validate form fields
        let (Some(name), Some(game), Some(order_id)) = (
            present(cmd.name),
            present(cmd.game),
            present(cmd.order_id).and_then(|id| ExternalOrderId::new(id).ok()),
        ) else {
            return Err(OrderError::validation("body", MISSING_FIELDS_MESSAGE));
        };

        // 2. Confirm with the processor
        let order = self
            .gateway
            .get_order(&order_id)
            .await
            .map_err(order_fetch_error)?;
        if !order.is_publishable() {
            tracing::warn!(order_id = %order_id, status = %order.status, "After-pay for unapproved order");
            return Err(OrderError::not_approved(order.status));
        }

        // 3. Insert
        let new_memorial =
            NewMemorial::from_payment_form(order_id.clone(), &name, &game, cmd.years.as_deref())?;
        let memorial = self
            .store
            .insert_memorial(&new_memorial)
            .await
            .map_err(|e| log_after_payment(&order_id, "insert_memorial", e.into()))?;

        tracing::info!(order_id = %order_id, memorial_id = ?memorial.id, "Memorial published after payment");

        Ok(PublishAfterPaymentResult { memorial })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Transport failures while fetching the order read as a processor rejection.
fn order_fetch_error(err: GatewayError) -> OrderError {
    match err.code {
        GatewayErrorCode::NetworkError | GatewayErrorCode::InvalidResponse => {
            OrderError::upstream_rejected(ORDER_FETCH_ERROR, Some(err.message))
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::adapters::supabase::InMemoryRecordStore;
    use crate::domain::foundation::DomainError;

    fn cmd(order_id: &str) -> PublishAfterPaymentCommand {
        PublishAfterPaymentCommand {
            name: Some("ShadowReaper".to_string()),
            game: Some("Valorant".to_string()),
            years: Some("2016–2025".to_string()),
            order_id: Some(order_id.to_string()),
        }
    }

    #[tokio::test]
    async fn completed_order_publishes_memorial() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-1", "COMPLETED");
        let store = Arc::new(InMemoryRecordStore::new());
        let handler = PublishAfterPaymentHandler::new(Arc::new(gateway), store.clone());

        let result = handler.handle(cmd("ORDER-1")).await.unwrap();

        assert_eq!(result.memorial.name.as_deref(), Some("ShadowReaper"));
        assert_eq!(result.memorial.game.as_deref(), Some("Valorant"));
        assert_eq!(result.memorial.years.as_deref(), Some("2016–2025"));
        assert_eq!(result.memorial.order_id.as_deref(), Some("ORDER-1"));
        assert_eq!(result.memorial.status.as_deref(), Some("published"));
        assert_eq!(store.memorials().len(), 1);
    }

    #[tokio::test]
    async fn approved_order_is_publishable() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-1", "APPROVED");
        let handler =
            PublishAfterPaymentHandler::new(Arc::new(gateway), Arc::new(InMemoryRecordStore::new()));

        assert!(handler.handle(cmd("ORDER-1")).await.is_ok());
    }

    #[tokio::test]
    async fn created_order_is_not_approved() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-1", "CREATED");
        let store = Arc::new(InMemoryRecordStore::new());
        let handler = PublishAfterPaymentHandler::new(Arc::new(gateway), store.clone());

        let err = handler.handle(cmd("ORDER-1")).await.unwrap_err();

        assert_eq!(err, OrderError::not_approved("CREATED"));
        assert!(store.memorials().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_before_processor_call() {
        let gateway = MockPaymentGateway::new();
        let handler = PublishAfterPaymentHandler::new(
            Arc::new(gateway.clone()),
            Arc::new(InMemoryRecordStore::new()),
        );

        for missing in [
            PublishAfterPaymentCommand { name: None, ..cmd("ORDER-1") },
            PublishAfterPaymentCommand { game: Some("  ".into()), ..cmd("ORDER-1") },
            PublishAfterPaymentCommand { order_id: None, ..cmd("ORDER-1") },
        ] {
            let err = handler.handle(missing).await.unwrap_err();
            assert_eq!(err.message(), MISSING_FIELDS_MESSAGE);
        }
        assert_eq!(gateway.call_count("get_order"), 0);
    }

    #[tokio::test]
    async fn years_are_optional() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-1", "COMPLETED");
        let handler =
            PublishAfterPaymentHandler::new(Arc::new(gateway), Arc::new(InMemoryRecordStore::new()));

        let result = handler
            .handle(PublishAfterPaymentCommand { years: None, ..cmd("ORDER-1") })
            .await
            .unwrap();

        assert!(result.memorial.years.is_none());
    }

    #[tokio::test]
    async fn unreachable_processor_is_fetch_error() {
        let gateway = MockPaymentGateway::new();
        gateway.set_method_error("get_order", GatewayError::network("connection refused"));
        let handler =
            PublishAfterPaymentHandler::new(Arc::new(gateway), Arc::new(InMemoryRecordStore::new()));

        let err = handler.handle(cmd("ORDER-1")).await.unwrap_err();

        assert_eq!(
            err,
            OrderError::upstream_rejected(ORDER_FETCH_ERROR, Some("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn datastore_failure_is_infrastructure_error() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-1", "COMPLETED");
        let store = Arc::new(InMemoryRecordStore::new());
        store.fail_method("insert_memorial", DomainError::database("Supabase memorials error"));
        let handler = PublishAfterPaymentHandler::new(Arc::new(gateway), store);

        let err = handler.handle(cmd("ORDER-1")).await.unwrap_err();

        assert!(matches!(err, OrderError::Infrastructure(_)));
    }
}
