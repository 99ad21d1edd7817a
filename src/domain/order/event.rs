//! PayPal webhook event envelope.
//!
//! Only the fields the payment workflow reads are captured; everything else
//! in the processor's event schema is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{ExternalOrderId, ValidationError};

/// Event types that confirm a payment.
pub const CHECKOUT_ORDER_APPROVED: &str = "CHECKOUT.ORDER.APPROVED";
pub const PAYMENT_CAPTURE_COMPLETED: &str = "PAYMENT.CAPTURE.COMPLETED";

/// Classification of a webhook event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEventKind {
    CheckoutOrderApproved,
    PaymentCaptureCompleted,
    Other(String),
}

impl PaymentEventKind {
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            CHECKOUT_ORDER_APPROVED => PaymentEventKind::CheckoutOrderApproved,
            PAYMENT_CAPTURE_COMPLETED => PaymentEventKind::PaymentCaptureCompleted,
            other => PaymentEventKind::Other(other.to_string()),
        }
    }

    /// True for the events that drive the payment workflow.
    pub fn confirms_payment(&self) -> bool {
        !matches!(self, PaymentEventKind::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentEventKind::CheckoutOrderApproved => CHECKOUT_ORDER_APPROVED,
            PaymentEventKind::PaymentCaptureCompleted => PAYMENT_CAPTURE_COMPLETED,
            PaymentEventKind::Other(s) => s,
        }
    }
}

/// Raw envelope as delivered. Both `event_type` and `eventType` spellings
/// are accepted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PaymentEventEnvelope {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, alias = "eventType")]
    pub event_type: Option<String>,

    #[serde(default)]
    pub resource: Value,
}

/// A parsed webhook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEvent {
    pub event_id: Option<String>,
    pub kind: PaymentEventKind,
    pub order_id: Option<ExternalOrderId>,
}

impl PaymentEvent {
    /// Parses a verified webhook body.
    ///
    /// The order id is `resource.id` for order events. Capture events carry
    /// the capture id there, so their order id is read from
    /// `resource.supplementary_data.related_ids.order_id` when present.
    pub fn parse(body: &Value) -> Result<Self, ValidationError> {
        let envelope: PaymentEventEnvelope = serde_json::from_value(body.clone())
            .map_err(|e| ValidationError::invalid_format("webhook_event", e.to_string()))?;

        let kind = PaymentEventKind::from_event_type(envelope.event_type.as_deref().unwrap_or(""));

        let related_order_id = envelope
            .resource
            .pointer("/supplementary_data/related_ids/order_id")
            .and_then(Value::as_str);
        let resource_id = envelope.resource.get("id").and_then(Value::as_str);

        let raw_order_id = match kind {
            PaymentEventKind::PaymentCaptureCompleted => related_order_id.or(resource_id),
            _ => resource_id,
        };

        Ok(Self {
            event_id: envelope.id,
            kind,
            order_id: raw_order_id.and_then(|id| ExternalOrderId::new(id).ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_order_approved_event() {
        let event = PaymentEvent::parse(&json!({
            "id": "WH-1",
            "event_type": "CHECKOUT.ORDER.APPROVED",
            "resource": {"id": "ORDER-1", "status": "APPROVED"}
        }))
        .unwrap();

        assert_eq!(event.kind, PaymentEventKind::CheckoutOrderApproved);
        assert_eq!(event.order_id.unwrap().as_str(), "ORDER-1");
        assert_eq!(event.event_id.as_deref(), Some("WH-1"));
    }

    #[test]
    fn capture_event_prefers_related_order_id() {
        let event = PaymentEvent::parse(&json!({
            "event_type": "PAYMENT.CAPTURE.COMPLETED",
            "resource": {
                "id": "CAPTURE-9",
                "supplementary_data": {"related_ids": {"order_id": "ORDER-9"}}
            }
        }))
        .unwrap();

        assert_eq!(event.kind, PaymentEventKind::PaymentCaptureCompleted);
        assert_eq!(event.order_id.unwrap().as_str(), "ORDER-9");
    }

    #[test]
    fn capture_event_without_related_ids_uses_resource_id() {
        let event = PaymentEvent::parse(&json!({
            "event_type": "PAYMENT.CAPTURE.COMPLETED",
            "resource": {"id": "CAPTURE-9"}
        }))
        .unwrap();

        assert_eq!(event.order_id.unwrap().as_str(), "CAPTURE-9");
    }

    #[test]
    fn accepts_camel_case_event_type() {
        let event = PaymentEvent::parse(&json!({
            "eventType": "CHECKOUT.ORDER.APPROVED",
            "resource": {"id": "ORDER-2"}
        }))
        .unwrap();
        assert!(event.kind.confirms_payment());
    }

    #[test]
    fn other_events_do_not_confirm_payment() {
        let event = PaymentEvent::parse(&json!({
            "event_type": "PAYMENT.CAPTURE.REFUNDED",
            "resource": {"id": "CAPTURE-1"}
        }))
        .unwrap();

        assert!(!event.kind.confirms_payment());
        assert_eq!(event.kind.as_str(), "PAYMENT.CAPTURE.REFUNDED");
    }

    #[test]
    fn missing_resource_yields_no_order_id() {
        let event = PaymentEvent::parse(&json!({"event_type": "CHECKOUT.ORDER.APPROVED"})).unwrap();
        assert!(event.order_id.is_none());
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(PaymentEvent::parse(&json!("nope")).is_err());
    }
}
