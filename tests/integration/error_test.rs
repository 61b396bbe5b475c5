//! Integration tests for error envelopes.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_unknown_route_is_error_envelope() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({
            "status": "error",
            "message": "No route for GET /api/nope",
            "code": "404",
        })
    );
}

#[tokio::test]
async fn test_error_envelope_uses_configured_keys() {
    let app = helpers::TestApp::from_toml(
        r#"
        [envelope]
        status_key = "state"
        message_key = "detail"
        "#,
    );

    let response = app.request("POST", "/missing").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["state"], "error");
    assert_eq!(response.body["detail"], "No route for POST /missing");
    assert_eq!(response.body["code"], "404");
}

#[tokio::test]
async fn test_wrong_method_on_known_route() {
    let app = helpers::TestApp::new();

    let response = app.request("DELETE", "/api/health").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
