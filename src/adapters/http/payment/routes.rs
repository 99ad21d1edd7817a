//! Axum router configuration for payment endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::error::method_not_allowed;
use crate::adapters::http::state::AppState;

use super::handlers::{after_pay, create_order, paypal_webhook, start_checkout};

/// Create the payment API router, mounted under `/api`.
///
/// # Routes
/// - `POST /checkout/start` - Create an order for the payment page
/// - `POST /paypal/create-order` - Create an order (standalone)
/// - `POST /paypal/webhook` - Handle PayPal webhooks (signature verified)
/// - `POST /after-pay` - Publish a memorial after approval
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout/start", post(start_checkout).fallback(method_not_allowed))
        .route("/paypal/create-order", post(create_order).fallback(method_not_allowed))
        .route("/paypal/webhook", post(paypal_webhook).fallback(method_not_allowed))
        .route("/after-pay", post(after_pay).fallback(method_not_allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::http::state::SiteSettings;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::adapters::supabase::InMemoryRecordStore;
    use crate::domain::order::OrderStatus;
    use crate::ports::GatewayError;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn app(gateway: MockPaymentGateway, store: Arc<InMemoryRecordStore>) -> Router {
        let state = AppState::new(Arc::new(gateway), store, SiteSettings::default());
        payment_routes().with_state(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Router Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn checkout_start_returns_processor_id() {
        let gateway = MockPaymentGateway::new().with_next_order_id("STUB-1");
        let response = app(gateway.clone(), Arc::new(InMemoryRecordStore::new()))
            .oneshot(post_json("/checkout/start", json!({"amount": "1.00", "currency": "USD"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"id": "STUB-1"}));
        assert_eq!(gateway.created_orders()[0].amount, "1.00");
    }

    #[tokio::test]
    async fn checkout_start_failure_is_text() {
        let gateway = MockPaymentGateway::new();
        gateway.set_method_error("create_order", GatewayError::missing_configuration("PAYPAL_CLIENT_ID"));

        let response = app(gateway, Arc::new(InMemoryRecordStore::new()))
            .oneshot(post_json("/checkout/start", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Missing configuration: PAYPAL_CLIENT_ID");
    }

    #[tokio::test]
    async fn create_order_defaults_to_standalone_amount() {
        let gateway = MockPaymentGateway::new().with_next_order_id("STUB-2");
        let response = app(gateway.clone(), Arc::new(InMemoryRecordStore::new()))
            .oneshot(post_json("/paypal/create-order", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(gateway.created_orders()[0].amount, "29.00");
        assert_eq!(gateway.created_orders()[0].currency, "USD");
    }

    #[tokio::test]
    async fn create_order_rejection_is_bad_request() {
        let gateway = MockPaymentGateway::new();
        gateway.set_method_error(
            "create_order",
            GatewayError::rejected("Create order error").with_details("UNPROCESSABLE_ENTITY"),
        );

        let response = app(gateway, Arc::new(InMemoryRecordStore::new()))
            .oneshot(post_json("/paypal/create-order", json!({"amount": "29.00"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Create order error", "details": "UNPROCESSABLE_ENTITY"})
        );
    }

    #[tokio::test]
    async fn webhook_acknowledges_verified_event() {
        let store = Arc::new(InMemoryRecordStore::new());
        let request = Request::builder()
            .method(Method::POST)
            .uri("/paypal/webhook")
            .header("paypal-transmission-id", "tx-1")
            .header("paypal-transmission-sig", "sig")
            .body(Body::from(
                json!({
                    "id": "WH-1",
                    "event_type": "CHECKOUT.ORDER.APPROVED",
                    "resource": {"id": "ORDER-9"}
                })
                .to_string(),
            ))
            .unwrap();

        let response = app(MockPaymentGateway::new(), store.clone())
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"ok": true}));
        assert_eq!(store.orders_for("ORDER-9")[0].status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn webhook_with_bad_signature_is_400_without_mutation() {
        let store = Arc::new(InMemoryRecordStore::new());
        let response = app(MockPaymentGateway::rejecting_webhooks(), store.clone())
            .oneshot(post_json(
                "/paypal/webhook",
                json!({"event_type": "CHECKOUT.ORDER.APPROVED", "resource": {"id": "ORDER-9"}}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Invalid webhook signature"})
        );
        assert!(store.orders().is_empty());
        assert!(store.memorials().is_empty());
    }

    #[tokio::test]
    async fn webhook_with_malformed_body_is_400() {
        let gateway = MockPaymentGateway::new();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/paypal/webhook")
            .body(Body::from("not json"))
            .unwrap();

        let response = app(gateway.clone(), Arc::new(InMemoryRecordStore::new()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(gateway.call_count("verify_event"), 0);
    }

    #[tokio::test]
    async fn after_pay_publishes_memorial() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-7", "COMPLETED");
        let store = Arc::new(InMemoryRecordStore::new());

        let response = app(gateway, store.clone())
            .oneshot(post_json(
                "/after-pay",
                json!({"name": "NoScopeNinja", "game": "CS2", "years": "2012–2024", "orderId": "ORDER-7"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["memorial"]["name"], "NoScopeNinja");
        assert_eq!(body["memorial"]["game"], "CS2");
        assert_eq!(body["memorial"]["years"], "2012–2024");
        assert_eq!(store.memorials().len(), 1);
    }

    #[tokio::test]
    async fn after_pay_missing_fields_is_400() {
        let response = app(MockPaymentGateway::new(), Arc::new(InMemoryRecordStore::new()))
            .oneshot(post_json("/after-pay", json!({"name": "NoScopeNinja"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Missing name, game, or orderId"})
        );
    }

    #[tokio::test]
    async fn after_pay_unapproved_order_reports_status() {
        let gateway = MockPaymentGateway::new();
        gateway.set_order_status("ORDER-7", "CREATED");

        let response = app(gateway, Arc::new(InMemoryRecordStore::new()))
            .oneshot(post_json(
                "/after-pay",
                json!({"name": "LlamaLord", "game": "Fortnite", "orderId": "ORDER-7"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Order not approved", "status": "CREATED"})
        );
    }

    #[tokio::test]
    async fn empty_checkout_body_uses_defaults() {
        let gateway = MockPaymentGateway::new().with_next_order_id("STUB-3");
        let request = Request::builder()
            .method(Method::POST)
            .uri("/checkout/start")
            .body(Body::empty())
            .unwrap();

        let response = app(gateway.clone(), Arc::new(InMemoryRecordStore::new()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(gateway.created_orders()[0].amount, "1.00");
        assert_eq!(gateway.created_orders()[0].currency, "USD");
    }

    #[tokio::test]
    async fn wrong_typed_body_is_400_without_side_effects() {
        let body = json!({
            "amount": 5,
            "currency": "EUR",
            "draftId": 7,
            "name": 1,
            "game": "CS2",
            "orderId": "ORDER-7"
        });

        for uri in ["/checkout/start", "/paypal/create-order", "/after-pay"] {
            let gateway = MockPaymentGateway::new();
            let store = Arc::new(InMemoryRecordStore::new());

            let response = app(gateway.clone(), store.clone())
                .oneshot(post_json(uri, body.clone()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert!(gateway.calls().is_empty(), "{}", uri);
            assert!(store.orders().is_empty());
            assert!(store.memorials().is_empty());
        }
    }

    #[tokio::test]
    async fn non_json_body_is_400() {
        for uri in ["/checkout/start", "/paypal/create-order", "/after-pay"] {
            let gateway = MockPaymentGateway::new();
            let request = Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("amount=5&currency=EUR"))
                .unwrap();

            let response = app(gateway.clone(), Arc::new(InMemoryRecordStore::new()))
                .oneshot(request)
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert!(gateway.calls().is_empty(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn non_post_requests_are_405() {
        for uri in ["/checkout/start", "/paypal/create-order", "/paypal/webhook", "/after-pay"] {
            let response = app(MockPaymentGateway::new(), Arc::new(InMemoryRecordStore::new()))
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
            assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
            assert_eq!(
                read_json(response).await,
                json!({"error": "Method Not Allowed"})
            );
        }
    }
}
