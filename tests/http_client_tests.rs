//! Integration tests for the HTTP transport.
//!
//! These tests run the full request path against a local mock server,
//! verifying verb dispatch, header policy, authentication, and error
//! mapping.

use std::collections::HashMap;

use productboard_api::{Client, ClientConfig, HttpError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder().site(server.uri()).build().unwrap();
    Client::new(config)
}

// ============================================================================
// Verb Dispatch
// ============================================================================

#[tokio::test]
async fn test_get_hits_site_relative_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.get("/ping", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(response.is_ok());
    assert!(response.body.contains("\"ok\""));
}

#[tokio::test]
async fn test_absolute_url_bypasses_configured_site() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    // The configured site points nowhere; the absolute URL must win.
    let config = ClientConfig::builder()
        .site("http://127.0.0.1:1")
        .build()
        .unwrap();
    let client = Client::new(config);

    let url = format!("{}/ping", server.uri());
    let response = client.get(&url, None).await.unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_head_request_returns_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/features"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.head("/features", None).await.unwrap();

    assert_eq!(response.code, 200);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/features"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Dark mode"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "9"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post("/features", json!({"name": "Dark mode"}), None)
        .await
        .unwrap();

    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/features/42"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .put("/features/42", json!({"name": "Renamed"}), None)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_delete_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/features/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.delete("/features/42", None).await.unwrap();

    assert_eq!(response.code, 204);
    assert!(response.is_ok());
}

// ============================================================================
// Header Policy
// ============================================================================

#[tokio::test]
async fn test_accept_header_is_seeded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/features"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get("/features", None).await.unwrap();
}

#[tokio::test]
async fn test_bearer_token_is_sent_on_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/features"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .site(server.uri())
        .bearer_token("test-token")
        .build()
        .unwrap();
    let client = Client::new(config);

    client.get("/features", None).await.unwrap();
}

#[tokio::test]
async fn test_per_call_headers_override_configured_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/features"))
        .and(header("X-Environment", "staging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .site(server.uri())
        .default_header("X-Environment", "production")
        .build()
        .unwrap();
    let client = Client::new(config);

    let mut headers = HashMap::new();
    headers.insert("X-Environment".to_string(), "staging".to_string());
    client.get("/features", Some(headers)).await.unwrap();
}

#[tokio::test]
async fn test_basic_auth_credentials_are_applied() {
    let server = MockServer::start().await;
    // RFC 7617 example credentials.
    Mock::given(method("GET"))
        .and(path("/features"))
        .and(header(
            "Authorization",
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .site(server.uri())
        .username("Aladdin")
        .password("open sesame")
        .build()
        .unwrap();
    let client = Client::new(config);

    client.get("/features", None).await.unwrap();
}

#[tokio::test]
async fn test_additional_cookies_are_joined_into_one_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/features"))
        .and(header("Cookie", "tenant=acme; theme=dark"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .site(server.uri())
        .additional_cookie("tenant=acme")
        .additional_cookie("theme=dark")
        .build()
        .unwrap();
    let client = Client::new(config);

    client.get("/features", None).await.unwrap();
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/features/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such feature"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get("/features/missing", None).await.unwrap_err();

    match err {
        HttpError::Response(response) => {
            assert_eq!(response.code, 404);
            assert_eq!(response.message, "Not Found");
            assert_eq!(response.body, "no such feature");
        }
        HttpError::Network(other) => panic!("expected response error, got {other}"),
    }
}

#[tokio::test]
async fn test_response_error_display_includes_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get("/boom", None).await.unwrap_err();

    assert!(err.to_string().contains("HTTP 500"));
}

#[tokio::test]
async fn test_unreachable_host_maps_to_network_error() {
    // Port 1 is reserved; connections are refused immediately.
    let config = ClientConfig::builder()
        .site("http://127.0.0.1:1")
        .build()
        .unwrap();
    let client = Client::new(config);

    let err = client.get("/features", None).await.unwrap_err();

    assert!(matches!(err, HttpError::Network(_)));
}
