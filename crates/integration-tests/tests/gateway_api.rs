//! Webhook surface tests through the full axum stack.
//!
//! Each test drives the same router the binary serves (`bonbon_gateway::app`)
//! via `tower::ServiceExt::oneshot`, so the middleware stack, authentication
//! and the parse boundary are all exercised.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use bonbon_gateway::config::GatewayConfig;
use bonbon_gateway::state::AppState;

const TOKEN: &str = "aB3xY9mK2nL5pQ7rT0uW4zC6";

fn test_app() -> Router {
    let config = GatewayConfig {
        host: "127.0.0.1".parse().expect("loopback address"),
        port: 0,
        gateway_token: SecretString::from(TOKEN),
    };
    bonbon_gateway::app(AppState::new(config))
}

fn update_request(token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/updates")
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("x-gateway-token", token);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn dispatch(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(update_request(Some(TOKEN), &body))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

// =============================================================================
// Health & Authentication
// =============================================================================

#[tokio::test]
async fn test_health_is_open() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_updates_rejects_missing_token() {
    let app = test_app();
    let body = json!({"session_id": 1, "text": "/start"});
    let response = app
        .oneshot(update_request(None, &body))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_updates_rejects_wrong_token() {
    let app = test_app();
    let body = json!({"session_id": 1, "text": "/start"});
    let response = app
        .oneshot(update_request(Some("wrong-token-wrong-token"), &body))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_updates_rejects_empty_update() {
    let app = test_app();
    let response = app
        .oneshot(update_request(Some(TOKEN), &json!({"session_id": 1})))
        .await
        .expect("infallible");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_updates_rejects_malformed_json() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/updates")
        .header(CONTENT_TYPE, "application/json")
        .header("x-gateway-token", TOKEN)
        .body(Body::from("{not json"))
        .expect("request builds");
    let response = app.oneshot(request).await.expect("infallible");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_responses_carry_a_request_id() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("infallible");
    assert!(response.headers().contains_key("x-request-id"));
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_start_command_greets() {
    let app = test_app();
    let body = dispatch(
        &app,
        json!({"session_id": 1, "text": "/start", "user_name": "Иван"}),
    )
    .await;
    let text = body["screen"]["text"].as_str().expect("screen text");
    assert!(text.starts_with("Привет, Иван!"));
    assert!(body["notice"].is_null());
}

#[tokio::test]
async fn test_add_and_checkout_flow_over_http() {
    let app = test_app();

    let added = dispatch(
        &app,
        json!({"session_id": 2, "callback": "add:milk_chocolate"}),
    )
    .await;
    assert_eq!(added["notice"]["code"], "added_to_cart");

    let cart = dispatch(&app, json!({"session_id": 2, "callback": "cart:view"})).await;
    let cart_text = cart["screen"]["text"].as_str().expect("cart text");
    assert!(cart_text.contains("Итого к оплате: 220 ₽"));

    let confirmation = dispatch(
        &app,
        json!({"session_id": 2, "callback": "cart:checkout"}),
    )
    .await;
    let confirmation_text = confirmation["screen"]["text"]
        .as_str()
        .expect("confirmation text");
    assert!(confirmation_text.starts_with("Спасибо за заказ!"));

    // checking out again finds the cart empty
    let again = dispatch(
        &app,
        json!({"session_id": 2, "callback": "cart:checkout"}),
    )
    .await;
    assert!(again["screen"].is_null());
    assert_eq!(again["notice"]["code"], "cart_empty");
}

#[tokio::test]
async fn test_unknown_command_is_a_notice_not_an_error() {
    let app = test_app();
    let body = dispatch(&app, json!({"session_id": 3, "text": "/order"})).await;
    assert!(body["screen"].is_null());
    assert_eq!(body["notice"]["code"], "unknown_command");
    assert!(
        body["notice"]["message"]
            .as_str()
            .expect("notice message")
            .contains("/menu")
    );
}

#[tokio::test]
async fn test_malformed_payload_is_a_notice_not_an_error() {
    let app = test_app();
    let body = dispatch(&app, json!({"session_id": 4, "callback": "cart:explode"})).await;
    assert!(body["screen"].is_null());
    assert_eq!(body["notice"]["code"], "unknown_action");
}

#[tokio::test]
async fn test_sessions_are_isolated_over_http() {
    let app = test_app();
    dispatch(&app, json!({"session_id": 5, "callback": "add:dark_truffle"})).await;
    let other = dispatch(&app, json!({"session_id": 6, "callback": "cart:view"})).await;
    let text = other["screen"]["text"].as_str().expect("cart text");
    assert!(text.contains("пока пуста"));
}

#[tokio::test]
async fn test_button_payloads_from_screens_parse_back() {
    let app = test_app();
    let menu = dispatch(&app, json!({"session_id": 7, "text": "/menu"})).await;
    let rows = menu["screen"]["keyboard"].as_array().expect("keyboard rows");
    let first_payload = rows[0][0]["payload"].as_str().expect("payload");

    // pressing the first category button renders its item list
    let items = dispatch(
        &app,
        json!({"session_id": 7, "callback": first_payload}),
    )
    .await;
    let text = items["screen"]["text"].as_str().expect("items text");
    assert!(text.starts_with("Категория:"));
}
