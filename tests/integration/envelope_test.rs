//! Integration tests for envelope rendering through the HTTP layer.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_success_envelope() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["message"], "Service is healthy");
    assert_eq!(response.body["code"], "200");
    assert_eq!(response.body["meta"]["locale"], "en");
    assert_eq!(
        response.body["meta"]["version"],
        json!(env!("CARGO_PKG_VERSION"))
    );
}

#[tokio::test]
async fn test_health_field_order() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health").await;

    let keys: Vec<&str> = response
        .body
        .as_object()
        .expect("object body")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["status", "message", "code", "meta"]);
}

#[tokio::test]
async fn test_configured_key_names() {
    let app = helpers::TestApp::from_toml(
        r#"
        [envelope]
        status_key = "result"
        message_key = ""
        code_key = "error_code"
        "#,
    );

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"], "success");
    assert_eq!(response.body["message"], "Service is healthy");
    assert_eq!(response.body["error_code"], "200");
    assert!(response.body.get("status").is_none());
    assert!(response.body.get("code").is_none());
}

#[tokio::test]
async fn test_localized_messages() {
    let app = helpers::TestApp::from_toml(
        r#"
        [envelope]
        locale = "de"

        [messages.de.message]
        healthy = "Dienst ist erreichbar"
        "#,
    );

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.body["message"], "Dienst ist erreichbar");
    assert_eq!(response.body["meta"]["locale"], "de");
}
