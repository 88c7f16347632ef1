//! Checkout and Pinterest callback pages against a mocked backend.

use cartwise_app::pages::{CheckoutPage, CheckoutPhase, PinterestCallbackPage};
use cartwise_app::{AppContext, Route};
use cartwise_core::AppConfig;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ctx(server: &MockServer) -> AppContext {
    AppContext::new(AppConfig::for_base_url(&server.uri())).expect("context should build")
}

async fn mount_products(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "name": "AirPods Max Pro", "price": 349.0, "retailer": "Amazon",
              "url": "https://amazon.example/airpods", "size": "One size" }
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn submit_sends_cart_and_reaches_confirmed() {
    let server = MockServer::start().await;
    mount_products(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/automate"))
        .and(body_partial_json(json!({
            "items": [{ "id": "1", "retailer": "Amazon", "price": 349.0, "size": "One size" }],
            "user_data": { "name": "Ada Lovelace", "email": "user@example.com", "zip": "75001" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "started",
            "message": "Agent is opening Amazon in the background."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = CheckoutPage::new(ctx(&server));
    page.mount().await;
    page.form_mut().set_card_name("Ada Lovelace");
    page.form_mut().set_card_number("4242424242424242");

    let phase = page.submit().await;

    assert_eq!(phase, CheckoutPhase::Confirmed);
    assert_eq!(
        page.automation_message(),
        "Agent is opening Amazon in the background."
    );
    assert_eq!(page.card_face().brand_label, "Visa");
}

#[tokio::test]
async fn automation_failure_still_confirms() {
    let server = MockServer::start().await;
    mount_products(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/automate"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = CheckoutPage::new(ctx(&server));
    page.mount().await;

    assert_eq!(page.submit().await, CheckoutPhase::Confirmed);
    assert_eq!(page.automation_message(), "Initializing Personal Shopper agent...");
}

#[tokio::test]
async fn second_submit_is_ignored() {
    let server = MockServer::start().await;
    mount_products(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/checkout/automate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "started", "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut page = CheckoutPage::new(ctx(&server));
    page.mount().await;
    page.submit().await;
    assert_eq!(page.submit().await, CheckoutPhase::Confirmed);
}

#[tokio::test]
async fn callback_success_redirects_to_landing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pinterest/callback"))
        .and(query_param("code", "abc"))
        .and(query_param("state", "s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = PinterestCallbackPage::new(ctx(&server));
    let route = page
        .run("http://localhost:8080/pinterest/callback?code=abc&state=s1")
        .await;

    assert_eq!(route, Some(Route::Landing));
    assert_eq!(page.message(), "Pinterest connected. Redirecting...");
}

#[tokio::test]
async fn callback_failure_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pinterest/callback"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = PinterestCallbackPage::new(ctx(&server));
    let route = page.run("?code=expired").await;

    assert!(route.is_none());
    assert_eq!(page.message(), "Failed to connect Pinterest.");
}
