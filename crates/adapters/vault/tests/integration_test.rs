//! Integration tests for the Vault adapter
//!
//! Most tests run against a wiremock server. The `#[ignore]`d test needs a
//! real Vault dev server:
//! - VAULT_ADDR (e.g. http://127.0.0.1:8200)
//! - VAULT_TOKEN with read access to `secret/data/test/integration`

use std::time::Duration;

use adapter_vault::HttpVaultClient;
use serde_json::json;
use vault_errors::ClientError;
use vault_ports::VaultClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpVaultClient {
    HttpVaultClient::new(&server.uri(), Duration::from_secs(5)).expect("Failed to build client")
}

#[tokio::test]
async fn test_read_returns_data_and_lease() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/app"))
        .and(header("X-Vault-Token", "s.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "5e2f",
            "lease_id": "",
            "renewable": false,
            "lease_duration": 3600,
            "data": {
                "data": { "username": "app", "password": "hunter2" },
                "metadata": { "version": 3 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_token("s.test");

    let secret = client
        .logical()
        .read("secret/data/app")
        .await
        .expect("read failed")
        .expect("no secret returned");

    assert_eq!(secret.lease_duration, 3600);
    let data = secret.data.expect("no payload");
    assert_eq!(data["data"]["username"], "app");
}

#[tokio::test]
async fn test_missing_path_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "errors": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let secret = client.logical().read("secret/data/missing").await.unwrap();
    assert!(secret.is_none());
}

#[tokio::test]
async fn test_forbidden_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "errors": ["permission denied"] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.logical().read("secret/data/app").await.unwrap_err();
    match err {
        ClientError::Forbidden(body) => assert!(body.contains("permission denied")),
        other => panic!("expected Forbidden, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Vault is sealed"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.logical().read("secret/data/app").await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("Vault is sealed"));
        }
        other => panic!("expected Status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dot_segments_never_reach_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sealed": false })))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_token("s.test");

    for path in ["../sys/seal-status", "secret/../../sys/seal-status"] {
        let err = client.logical().read(path).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidPath(_)), "{}", path);
    }
}

#[tokio::test]
async fn test_envelope_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "6a1c",
            "lease_id": "",
            "renewable": false,
            "lease_duration": 0,
            "data": null
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let secret = client
        .logical()
        .read("secret/data/empty")
        .await
        .unwrap()
        .expect("envelope expected");

    assert!(secret.data.is_none());
    assert_eq!(secret.lease_duration, 0);
}

#[tokio::test]
async fn test_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.logical().read("secret/data/app").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
#[ignore] // Requires running Vault server
async fn test_live_read() {
    let _ = tracing_subscriber::fmt::try_init();

    let address = std::env::var("VAULT_ADDR").expect("VAULT_ADDR not set");
    let token = std::env::var("VAULT_TOKEN").expect("VAULT_TOKEN not set");

    let mut client =
        HttpVaultClient::new(&address, Duration::from_secs(10)).expect("Failed to build client");
    client.set_token(&token);

    let secret = client
        .logical()
        .read("secret/data/test/integration")
        .await
        .expect("Failed to read secret");
    assert!(secret.is_some());
}
