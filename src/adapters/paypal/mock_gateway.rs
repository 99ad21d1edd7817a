//! Mock payment gateway for testing.
//!
//! Provides a configurable in-process `PaymentGateway` for unit and
//! integration tests. Supports:
//! - Pre-configured order ids and statuses
//! - Webhook verification outcome
//! - Error injection per method
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::ExternalOrderId;
use crate::ports::{
    AccessToken, CreateOrderRequest, CreatedOrder, GatewayError, GatewayOrder, PaymentGateway,
    WebhookHeaders,
};

/// Mock payment gateway.
///
/// # Example
///
/// ```ignore
/// let gateway = MockPaymentGateway::new().with_next_order_id("ORDER-1");
/// gateway.set_order_status("ORDER-1", "COMPLETED");
/// let gateway = MockPaymentGateway::rejecting_webhooks();
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Id returned by the next `create_order`; generated when unset.
    next_order_id: Option<String>,

    /// Statuses reported by `get_order`.
    order_statuses: HashMap<String, String>,

    /// Outcome of `verify_event`.
    reject_webhooks: bool,

    /// Errors by method name.
    method_errors: HashMap<String, GatewayError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,

    /// Orders created so far.
    created: Vec<CreateOrderRequest>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    /// Create a mock that accepts every webhook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every webhook verification.
    pub fn rejecting_webhooks() -> Self {
        let mock = Self::new();
        mock.state().reject_webhooks = true;
        mock
    }

    /// Fix the id returned by the next `create_order`.
    pub fn with_next_order_id(self, id: impl Into<String>) -> Self {
        self.state().next_order_id = Some(id.into());
        self
    }

    /// Set the status `get_order` reports for an order.
    pub fn set_order_status(&self, order_id: impl Into<String>, status: impl Into<String>) {
        self.state()
            .order_statuses
            .insert(order_id.into(), status.into());
    }

    /// Fail every call to `method` with `error`.
    pub fn set_method_error(&self, method: &str, error: GatewayError) {
        self.state()
            .method_errors
            .insert(method.to_string(), error);
    }

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Requests passed to `create_order`, in call order.
    pub fn created_orders(&self) -> Vec<CreateOrderRequest> {
        self.state().created.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_call(&self, method: &str, args: Vec<String>) -> Result<(), GatewayError> {
        let mut state = self.state();
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
        match state.method_errors.get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn access_token(&self) -> Result<AccessToken, GatewayError> {
        self.record_call("access_token", vec![])?;
        Ok(AccessToken::new("mock-access-token"))
    }

    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<CreatedOrder, GatewayError> {
        self.record_call(
            "create_order",
            vec![request.amount.clone(), request.currency.clone()],
        )?;

        let mut state = self.state();
        let id = state
            .next_order_id
            .take()
            .unwrap_or_else(|| format!("MOCK-{}", uuid::Uuid::new_v4().simple()));
        state.order_statuses.insert(id.clone(), "CREATED".to_string());
        state.created.push(request);

        Ok(CreatedOrder {
            id,
            status: Some("CREATED".to_string()),
        })
    }

    async fn get_order(&self, order_id: &ExternalOrderId) -> Result<GatewayOrder, GatewayError> {
        self.record_call("get_order", vec![order_id.to_string()])?;

        let status = self
            .state()
            .order_statuses
            .get(order_id.as_str())
            .cloned()
            .ok_or_else(|| {
                GatewayError::rejected("PayPal order fetch error")
                    .with_details(format!("{{\"name\":\"RESOURCE_NOT_FOUND\",\"id\":\"{}\"}}", order_id))
                    .with_upstream_status(404)
            })?;

        Ok(GatewayOrder {
            id: order_id.to_string(),
            status,
        })
    }

    async fn verify_event(
        &self,
        headers: &WebhookHeaders,
        _event: &Value,
    ) -> Result<bool, GatewayError> {
        self.record_call(
            "verify_event",
            vec![headers.transmission_id.clone().unwrap_or_default()],
        )?;
        Ok(!self.state().reject_webhooks)
    }
}
