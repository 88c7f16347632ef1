//! Integration tests for the `ApiClient` HTTP layer using wiremock.

use cartwise_client::{ApiClient, ClientError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, 5).expect("client construction should not fail")
}

#[tokio::test]
async fn get_sends_accept_header_and_decodes_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/agent/logs"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "step": 1, "action": "Parsed query", "detail": "Identified 4 categories", "time": "0.2s" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let logs = test_client(&server.uri())
        .agent_logs()
        .await
        .expect("should parse logs");

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, "Parsed query");
}

#[tokio::test]
async fn post_sends_json_body_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/budget/confirm"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "user_id": "demo", "amount": 40.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "demo",
            "budget_limit": 200.0,
            "wallet_balance": 160.0,
            "currency": "USD"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = test_client(&server.uri())
        .confirm_purchase(40.0, "demo")
        .await
        .expect("should confirm");

    assert!((status.wallet_balance - 160.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn non_success_status_is_http_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Product not found" })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .get_product("missing")
        .await
        .unwrap_err();

    match err {
        ClientError::HttpStatus {
            status,
            ref status_text,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pinterest/status"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .pinterest_status()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error_naming_base_url() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let err = client.list_products().await.unwrap_err();

    assert!(err.is_transport(), "expected Transport, got {err:?}");
    assert!(
        err.to_string().contains("http://127.0.0.1:1"),
        "message should name the base URL: {err}"
    );
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .list_products()
        .await
        .unwrap_err();
    assert!(
        matches!(err, ClientError::Decode { ref context, .. } if context == "/api/products"),
        "expected Decode, got {err:?}"
    );
}
