use crate::common::{capture_logs, create_test_config};
use growguru_client::prelude::*;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio_test::block_on;

#[derive(Debug, Serialize)]
struct NewOrder<'a> {
    ticker: &'a str,
    quantity: u32,
}

#[derive(Debug, Deserialize, PartialEq)]
struct OrderAck {
    id: u64,
    status: String,
}

struct SourceTag;

impl RequestInterceptor for SourceTag {
    fn intercept(&self, request: &mut OutgoingRequest) {
        request
            .headers
            .insert("x-request-source", HeaderValue::from_static("growguru-web"));
    }
}

fn client_with_token(config: &Config, token: &str) -> (HttpClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_entry("token", token));
    let credentials = StoredCredentials::with_default_key(store.clone());
    (HttpClient::new(config, credentials).unwrap(), store)
}

#[tokio::test]
async fn test_request_carries_bearer_token_from_store() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/portfolio")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"positions":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "abc123");

    let body: Value = client.get("/portfolio").await.unwrap();
    assert_eq!(body, json!({"positions": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_without_token_has_no_authorization_and_warns() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/public/quotes")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let store = Arc::new(MemoryTokenStore::new());
    let client = HttpClient::new(&config, StoredCredentials::with_default_key(store)).unwrap();

    let (logs, _guard) = capture_logs();
    let body: Vec<Value> = client.get("public/quotes").await.unwrap();
    assert!(body.is_empty());
    mock.assert_async().await;

    assert_eq!(logs.count_level("WARN"), 1);
    assert!(logs.contents().contains("No token found in store"));
}

#[tokio::test]
async fn test_token_is_read_on_every_request() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer first")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer second")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, store) = client_with_token(&config, "first");

    let _: Value = client.get("/me").await.unwrap();
    store.set("token", "second");
    let _: Value = client.get("/me").await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_requests_never_mutate_stored_token() {
    let mut server = Server::new_async().await;
    let _ok = server
        .mock("GET", "/api/me")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let _fail = server
        .mock("GET", "/api/broken")
        .with_status(500)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_storage.json");
    std::fs::write(&path, r#"{"token":"persisted-token"}"#).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let mut config = create_test_config(&server.url());
    config.storage.path = path.to_string_lossy().into_owned();
    let client = HttpClient::from_config(&config).unwrap();

    let _: Value = client.get("/me").await.unwrap();
    let _ = client.get::<Value>("/broken").await;

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    let store = config.open_token_store().unwrap();
    assert_eq!(store.get("token").as_deref(), Some("persisted-token"));
}

#[tokio::test]
async fn test_token_saved_after_client_built_is_sent() {
    let mut server = Server::new_async().await;
    let anonymous = server
        .mock("GET", "/api/me")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_storage.json");
    let mut config = create_test_config(&server.url());
    config.storage.path = path.to_string_lossy().into_owned();

    // Built before login: the store file does not exist yet.
    let client = HttpClient::from_config(&config).unwrap();
    let _: Value = client.get("/me").await.unwrap();
    anonymous.assert_async().await;

    FileTokenStore::open(&path).unwrap().set("token", "late").unwrap();

    let authed = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer late")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let _: Value = client.get("/me").await.unwrap();
    authed.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_json_body_and_decodes_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/orders")
        .match_header("authorization", "Bearer tok")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"ticker": "PETR4", "quantity": 100})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"status":"accepted"}"#)
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "tok");

    let ack: OrderAck = client
        .post(
            "orders",
            &NewOrder {
                ticker: "PETR4",
                quantity: 100,
            },
        )
        .await
        .unwrap();

    assert_eq!(
        ack,
        OrderAck {
            id: 7,
            status: "accepted".to_string()
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_put_patch_delete_use_matching_methods() {
    let mut server = Server::new_async().await;
    let put = server
        .mock("PUT", "/api/watchlist/1")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/api/watchlist/1")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/watchlist/1")
        .with_status(204)
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "tok");

    let _: Value = client.put("/watchlist/1", &json!({"name": "b3"})).await.unwrap();
    let _: Value = client.patch("/watchlist/1", &json!({"name": "b3"})).await.unwrap();
    let () = client.delete("/watchlist/1").await.unwrap();

    put.assert_async().await;
    patch.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_status_errors_are_mapped() {
    let mut server = Server::new_async().await;
    let _unauthorized = server
        .mock("GET", "/api/secure")
        .with_status(401)
        .with_body("invalid token")
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/api/missing")
        .with_status(404)
        .create_async()
        .await;
    let _broken = server
        .mock("GET", "/api/broken")
        .with_status(503)
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "tok");

    assert!(matches!(
        client.get::<Value>("/secure").await,
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        client.get::<Value>("/missing").await,
        Err(AppError::NotFound)
    ));
    match client.get::<Value>("/broken").await {
        Err(AppError::Unexpected(status)) => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
        other => panic!("Expected Unexpected(503), got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_response_is_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/garbage")
        .with_status(200)
        .with_body("<html>")
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "tok");

    assert!(matches!(
        client.get::<Value>("/garbage").await,
        Err(AppError::Json(_))
    ));
}

#[tokio::test]
async fn test_extra_interceptors_run_alongside_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer tok")
        .match_header("x-request-source", "growguru-web")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "tok");
    let client = client.with_interceptor(SourceTag);

    let _: Value = client.get("/me").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_raw_request_returns_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body("up")
        .create_async()
        .await;

    let config = create_test_config(&server.url());
    let client = HttpClient::new(&config, NoCredentials).unwrap();

    let response = client
        .request_raw(reqwest::Method::GET, "/health", None::<&()>)
        .await
        .unwrap();
    assert_eq!(response.text().await.unwrap(), "up");
}

#[test]
fn test_blocking_get_with_sync_mock_server() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer sync")
        .with_status(200)
        .with_body(r#"{"name":"investor"}"#)
        .create();

    let config = create_test_config(&server.url());
    let (client, _store) = client_with_token(&config, "sync");

    let me: Value = block_on(client.get("/me")).unwrap();
    assert_eq!(me["name"], "investor");
    mock.assert();
}
