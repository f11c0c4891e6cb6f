//! Tests for the HTTP client module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/api", server.uri()))
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_base_url_gets_trailing_slash() {
    let config = ClientConfig::builder()
        .base_url("http://localhost:1234/api")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.base_url().as_str(), "http://localhost:1234/api/");
    assert!(!client.has_rate_limiter());
}

#[test]
fn test_http_client_rejects_invalid_header() {
    let config = ClientConfig::builder().header("bad header", "x").build();
    let result = HttpClient::with_config(config);

    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_http_client_with_rate_limit() {
    let config = ClientConfig::builder()
        .rate_limit(RateLimiterConfig::new(10, 10))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert!(client.has_rate_limiter());
}

#[tokio::test]
async fn test_http_client_get_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/get"))
        .and(query_param("flags", "1"))
        .and(query_param("promoted", "1"))
        .and(query_param("older", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "atStart": false,
            "atEnd": false,
            "error": null,
            "items": [{"id": 499}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = Params::new()
        .set("flags", 1u8)
        .set("promoted", true)
        .set("older", 500u64)
        .opt("tags", None::<String>);
    let body = client.get("items/get", &query).await.unwrap();

    assert_eq!(body["items"][0]["id"], 499);
}

#[tokio::test]
async fn test_http_client_post_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/items/vote"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("id=5"))
        .and(body_string_contains("vote=-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let form = Params::new().set("id", 5u64).set("vote", -1i64);
    let body = client.post("/items/vote", &form).await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_http_client_list_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tags/delete"))
        .and(body_string_contains("tags%5B%5D=7"))
        .and(body_string_contains("tags%5B%5D=8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let form = Params::new().set("tags", vec![7u64, 8]);
    client.post("tags/delete", &form).await.unwrap();
}

#[tokio::test]
async fn test_http_client_sends_configured_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/info"))
        .and(header("user-agent", "test-agent/1.0"))
        .and(header("x-custom", "value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/api", mock_server.uri()))
        .user_agent("test-agent/1.0")
        .header("X-Custom", "value")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client.get("user/info", &Params::new()).await.unwrap();
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("missing", &Params::new()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, ref body } if body == "Not found"));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_http_client_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("flaky", &Params::new()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_client_error_field_in_success_body_is_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "atStart": false,
            "atEnd": false,
            "error": "tooYoung",
            "items": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get("items/get", &Params::new().set("older", 1u64))
        .await
        .unwrap();

    assert_eq!(body["error"], "tooYoung");
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_http_client_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client.post("user/logout", &Params::new()).await.unwrap();

    assert!(body.is_null());
}

#[tokio::test]
async fn test_http_client_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("broken", &Params::new()).await.unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_http_client_sends_seeded_cookies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/info"))
        .and(header("cookie", "me=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/api", mock_server.uri()))
        .cookies("me=abc")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client.get("user/info", &Params::new()).await.unwrap();
    assert_eq!(client.cookies().as_deref(), Some("me=abc"));
}

#[tokio::test]
async fn test_http_client_stores_response_cookies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "me=fresh; Path=/")
                .set_body_json(json!({"success": true})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.cookies().is_none());

    client.post("user/login", &Params::new()).await.unwrap();

    assert_eq!(client.cookies().as_deref(), Some("me=fresh"));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/api", mock_server.uri()))
        .timeout(Duration::from_secs(1))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client.get("slow", &Params::new()).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 1000 }));
}
