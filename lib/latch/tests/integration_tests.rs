//! Integration tests for `Client` using wiremock.

use std::time::Duration;

use assert2::{check, let_assert};
use latch::{Client, DecodeError, Error, HyperTransport, Method, StatusExpectation};
use serde::Deserialize;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
struct Greeting {
    message: String,
}

#[tokio::test]
async fn test_plain_text_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("Accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("Hello, client\n", "text/plain"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri())
        .expect("client")
        .accept("text/plain");

    let mut text = String::new();
    let result = client.request(Method::Get, "/").into_text(&mut text).run().await;

    check!(result.is_ok(), "failed request: {result:?}");
    check!(text == "Hello, client");
}

#[tokio::test]
async fn test_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{ \"message\": \"Hello, client\" }\n", "encoding/json"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");

    let mut response = Greeting::default();
    let result = client.get("/").into_json(&mut response).run().await;

    check!(result.is_ok(), "failed request: {result:?}");
    check!(response.message == "Hello, client");
}

#[tokio::test]
async fn test_response_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(204).insert_header("Custom-Header", "bla"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");

    let mut custom_header = String::new();
    let result = client
        .get("/")
        .header_into("Custom-Header", &mut custom_header)
        .expected_status(204)
        .run()
        .await;

    check!(result.is_ok(), "failed request: {result:?}");
    check!(custom_header == "bla");
}

#[tokio::test]
async fn test_unexpected_status_keeps_body_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/greeting"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(serde_json::json!({"message": "Hello, client"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");

    let mut greeting = Greeting::default();
    let mut request_id = String::new();
    let result = client
        .get("/greeting")
        .into_json(&mut greeting)
        .header_into("x-request-id", &mut request_id)
        .expected_status(201)
        .run()
        .await;

    let_assert!(
        Err(Error::UnexpectedStatus {
            status: 200,
            expected: StatusExpectation::Exactly(201),
            body: Some(_),
        }) = result
    );
    check!(greeting == Greeting::default());
    check!(request_id == "req-42");
}

#[tokio::test]
async fn test_error_status_carries_problem_body() {
    #[derive(Debug, Deserialize)]
    struct Problem {
        title: String,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/quotes/7"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({"title": "locked"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(format!("{}/api", mock_server.uri())).expect("client");

    let result = client.delete("quotes/7").run().await;

    let_assert!(Err(err) = result);
    check!(err.status() == Some(409));
    let_assert!(Some(Ok(problem)) = err.decode_body::<Problem>());
    check!(problem.title == "locked");
}

#[tokio::test]
async fn test_unsupported_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>hi</p>", "text/html"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");

    let mut text = "before".to_string();
    let result = client.get("/page").into_text(&mut text).run().await;

    let_assert!(Err(Error::Decode(DecodeError::UnsupportedContentType { content_type })) = result);
    check!(content_type.as_deref() == Some("text/html"));
    check!(text == "before");
}

#[tokio::test]
async fn test_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"message\":", "application/json"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");

    let mut greeting = Greeting::default();
    let result = client.get("/broken").into_json(&mut greeting).run().await;

    let_assert!(Err(Error::Decode(DecodeError::Json { body, .. })) = result);
    check!(body == "{\"message\":");
    check!(greeting == Greeting::default());
}

#[tokio::test]
async fn test_text_into_struct_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("Hello, client", "text/plain"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");

    let mut greeting = Greeting::default();
    let result = client.get("/").into_json(&mut greeting).run().await;

    let_assert!(Err(Error::Decode(DecodeError::TargetMismatch { .. })) = result);
}

#[tokio::test]
async fn test_no_accept_header_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri()).expect("client");
    client.get("/").run().await.expect("request");

    let requests = mock_server.received_requests().await.expect("recording enabled");
    let_assert!([request] = requests.as_slice());
    check!(request.headers.get("accept").is_none());
}

#[tokio::test]
async fn test_connection_error() {
    let client = Client::new("http://127.0.0.1:1").expect("client");

    let mut header = "unset".to_string();
    let result = client.get("/").header_into("X-Any", &mut header).run().await;

    let_assert!(Err(err) = result);
    check!(err.is_connect(), "expected connection error, got: {err}");
    check!(header == "unset");
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = Client::with_transport(transport, mock_server.uri()).expect("client");

    let result = client.get("/slow").run().await;

    let_assert!(Err(err) = result);
    check!(err.is_timeout(), "expected timeout error, got: {err}");
}
