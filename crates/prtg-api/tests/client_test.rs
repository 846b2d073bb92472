#![allow(clippy::unwrap_used)]
// Integration tests for `PrtgClient` using wiremock.

use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prtg_api::{ContentKind, Credentials, Endpoint, Error, PrtgClient, Request, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PrtgClient) {
    let server = MockServer::start().await;
    let client = PrtgClient::with_client(
        reqwest::Client::new(),
        &server.uri(),
        Credentials::password("user", SecretString::from("pass")),
        Duration::from_secs(10),
    )
    .unwrap();
    (server, client)
}

fn detail_request(id: i64) -> Request {
    Request::new(Endpoint::SensorDetails).param("id", id)
}

// ── Content kind ────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_json_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/getsensordetails.json"))
        .and(query_param("id", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "prtgversion": "18.2.41.1636", "sensordata": {} })),
        )
        .mount(&server)
        .await;

    let payload = client.fetch(&detail_request(0)).await.unwrap();

    assert_eq!(payload.kind, ContentKind::Json);
    let body: serde_json::Value = serde_json::from_slice(&payload.body).unwrap();
    assert_eq!(body["prtgversion"], "18.2.41.1636");
}

#[tokio::test]
async fn test_fetch_detects_xml_attachment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/table.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Disposition", "attachment; filename=table.xml")
                .set_body_string("<prtg><version>18.2.41.1636</version></prtg>"),
        )
        .mount(&server)
        .await;

    let request = Request::new(Endpoint::SensorTree)
        .param("id", 0)
        .param("content", "sensortree");
    let payload = client.fetch(&request).await.unwrap();

    assert_eq!(payload.kind, ContentKind::Xml);
    assert!(payload.body.starts_with(b"<prtg>"));
}

#[tokio::test]
async fn test_fetch_xml_content_type_on_json_endpoint() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/getsensordetails.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<sensordata></sensordata>", "text/xml; charset=UTF-8"),
        )
        .mount(&server)
        .await;

    let payload = client.fetch(&detail_request(0)).await.unwrap();
    assert_eq!(payload.kind, ContentKind::Xml);
}

// ── Credentials ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_password_credentials_in_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(query_param("username", "user"))
        .and(query_param("password", "pass"))
        .and(query_param_is_missing("passhash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.fetch(&detail_request(1)).await.unwrap();
}

#[tokio::test]
async fn test_passhash_credentials_in_query() {
    let server = MockServer::start().await;
    let client = PrtgClient::with_client(
        reqwest::Client::new(),
        &server.uri(),
        Credentials::passhash("user", SecretString::from("123456789")),
        Duration::from_secs(10),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(query_param("username", "user"))
        .and(query_param("passhash", "123456789"))
        .and(query_param_is_missing("password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.fetch(&detail_request(1)).await.unwrap();
}

// ── Status mapping ──────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.fetch(&detail_request(1)).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.fetch(&detail_request(1)).await.unwrap_err();

    assert!(!err.is_auth());
    assert_eq!(err.status(), Some(500));
    assert!(
        matches!(&err, Error::Http { message, .. } if message == "Internal Server Error"),
        "expected Http error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.fetch(&detail_request(1)).await.unwrap_err();
    assert!(err.is_not_found());
}

// ── Transport ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout_millis(100);
    let client = PrtgClient::new(
        &server.uri(),
        Credentials::password("user", SecretString::from("pass")),
        &transport,
    )
    .unwrap();

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = client.fetch(&detail_request(1)).await;

    assert!(
        matches!(result, Err(Error::Timeout { timeout_ms: 100 })),
        "expected Timeout error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{port}");

    let client = PrtgClient::with_client(
        reqwest::Client::new(),
        &uri,
        Credentials::password("user", SecretString::from("pass")),
        Duration::from_secs(10),
    )
    .unwrap();

    let result = client.fetch(&detail_request(1)).await;
    assert!(
        matches!(result, Err(Error::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}
