//! End-to-end tests of the hyper transport against a local mock server.

use authfetch::prelude::*;
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_auth(server: &MockServer, token: &str) {
    Mock::given(method("OPTIONS"))
        .and(path("/token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(token))
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> RequestClient {
    RequestClient::new(ClientConfig::new(format!("{}/token", server.uri())).request_timeout(5))
}

#[tokio::test]
async fn test_post_with_bearer_token_and_json_body() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok-123").await;

    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("Authorization", "Bearer tok-123"))
        .and(header("X-Client", "tests"))
        .and(body_json(json!({"name": "widget", "count": 2})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Test", "value")
                .set_body_string("created"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestSpec::new(Method::Post, format!("{}/items", server.uri()))
        .header("Content-Type", "application/json")
        .header("X-Client", "tests")
        .field("name", "widget")
        .field("count", 2);

    let response = assert_ok!(client_for(&server).send(request).await);

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.text(), "created");
    assert_eq!(response.get_header("X-Test"), Some(&"value".to_string()));
    assert_eq!(response.headers.get("x-test"), Some(&"value".to_string()));
    assert!(!response.headers.contains_key("X-Test"));
}

#[tokio::test]
async fn test_auth_happens_before_target_request() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestSpec::new(Method::Get, format!("{}/items", server.uri()));
    assert_ok!(client_for(&server).send(request).await);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].method.to_string(), "OPTIONS");
    assert!(received[0].body.is_empty());
    assert_eq!(received[1].method.to_string(), "GET");
    assert!(received[1].body.is_empty());
}

#[tokio::test]
async fn test_error_status_from_target() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("DELETE"))
        .and(path("/items/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestSpec::new(Method::Delete, format!("{}/items/7", server.uri()));
    let err = assert_err!(client_for(&server).send(request).await);

    assert!(matches!(err, ClientError::HttpStatus { code: 404 }));
}

#[tokio::test]
async fn test_fetch_returns_error_body() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("PUT"))
        .and(path("/items/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestSpec::new(Method::Put, format!("{}/items/7", server.uri()))
        .field("name", "widget");
    let response = assert_ok!(client_for(&server).fetch(request).await);

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "boom");
}

#[tokio::test]
async fn test_auth_failure_status() {
    let server = MockServer::start().await;

    Mock::given(method("OPTIONS"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let request = RequestSpec::new(Method::Get, format!("{}/items", server.uri()));
    let err = assert_err!(client_for(&server).send(request).await);

    assert!(matches!(err, ClientError::HttpStatus { code: 403 }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = RequestClient::new(ClientConfig::new(format!("http://127.0.0.1:{}/token", port)));
    let request = RequestSpec::new(Method::Get, format!("http://127.0.0.1:{}/items", port));
    let err = assert_err!(client.send(request).await);

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("OPTIONS"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("tok")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = RequestClient::new(
        ClientConfig::new(format!("{}/token", server.uri())).request_timeout(1),
    );
    let request = RequestSpec::new(Method::Get, format!("{}/items", server.uri()));
    let err = assert_err!(client.send(request).await);

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_relative_url_is_rejected() {
    let transport = HyperTransport::new();
    let request = TransportRequest {
        method: Method::Get,
        url: "/items".to_string(),
        header_block: String::new(),
        body: None,
    };

    let err = assert_err!(transport.perform(request).await);
    assert!(matches!(err, ClientError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_transport_reports_status_line_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(header("X-One", "1"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("X-Test", "value")
                .set_body_string("accepted"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = HyperTransport::with_timeout(Some(Duration::from_secs(5)));
    let request = TransportRequest {
        method: Method::Get,
        url: format!("{}/raw", server.uri()),
        header_block: "X-One: 1\r\nX-Two: 2".to_string(),
        body: None,
    };

    let raw = assert_ok!(transport.perform(request).await);

    assert_eq!(raw.header_lines[0], "HTTP/1.1 202 Accepted");
    assert!(raw.header_lines.iter().any(|line| line == "x-test: value"));
    assert_eq!(&raw.body[..], b"accepted");
}
