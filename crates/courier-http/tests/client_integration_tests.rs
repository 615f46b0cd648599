//! End-to-end tests for the HTTP client against a wiremock server

use courier_http::{HttpClient, HttpConfig, HttpError, Payload};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct GenerateResponse {
    response: String,
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(HttpConfig::new().with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_json_parses_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": ["llama2"]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut response = client.get_json("/api/tags").await;

    assert_eq!(response.status().map(|s| s.as_u16()), Some(200));
    let value: Value = response.parse().await.unwrap();
    assert_eq!(value, json!({"models": ["llama2"]}));
}

#[tokio::test]
async fn test_post_json_encodes_structured_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"model": "llama2", "prompt": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerateRequest {
        model: "llama2".to_string(),
        prompt: "hello".to_string(),
    };

    let client = client_for(&server);
    let mut response = client
        .post_json("/api/generate", Payload::json(&request).unwrap())
        .await;

    let parsed: GenerateResponse = response.parse().await.unwrap();
    assert_eq!(
        parsed,
        GenerateResponse {
            response: "ok".to_string()
        }
    );
}

#[tokio::test]
async fn test_post_json_sends_text_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(header("content-type", "application/json"))
        .and(body_string("This is a test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post_json("/api/generate", Payload::from("This is a test"))
        .await;

    assert!(response.error().is_none());
    assert_eq!(response.status().map(|s| s.as_u16()), Some(200));
}

#[tokio::test]
async fn test_post_sends_raw_body_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("content-type", "text/plain"))
        .and(body_string("raw body"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .post("/upload", "text/plain", Payload::from("raw body"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .and(header("x-api-key", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = courier_http::header::HeaderMap::new();
    headers.insert(
        "x-api-key",
        courier_http::header::HeaderValue::from_static("test_key"),
    );

    let client = HttpClient::new(
        HttpConfig::new()
            .with_base_url(server.uri())
            .with_default_headers(headers),
    )
    .unwrap();

    let response = client.get("/api/tags").await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_parse_twice_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"test": "test"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut response = client.get_json("/api/tags").await;

    let first: Value = response.parse().await.unwrap();
    let second: Value = response.parse().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_passes_error_statuses_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    // status codes are the caller's business, not an error here
    let response = client.get("/api/tags").await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(response.text().await.unwrap(), "internal error");
}

#[tokio::test]
async fn test_absolute_url_ignores_base() {
    let base_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pong": true})))
        .expect(1)
        .mount(&other_server)
        .await;

    let client = client_for(&base_server);
    let mut response = client
        .get_json(&format!("{}/ping", other_server.uri()))
        .await;

    let value: Value = response.parse().await.unwrap();
    assert_eq!(value, json!({"pong": true}));
}

#[tokio::test]
async fn test_unreachable_host_defers_transport_error() {
    // nothing listens on port 1
    let client = HttpClient::with_defaults().unwrap();

    let mut response = client.get_json("http://127.0.0.1:1/api/tags").await;

    assert!(matches!(response.error(), Some(HttpError::Transport(_))));
    let err = response.parse::<Value>().await.unwrap_err();
    assert!(matches!(err, HttpError::Transport(_)));
}
