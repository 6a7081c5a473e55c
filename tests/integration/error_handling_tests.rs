//! Error-path integration tests: non-200 statuses, transport failures,
//! malformed bodies, and input validation short-circuits.

use std::time::Duration;

use places_client::{ClientConfig, PlacesClient, PlacesError, TextSearchParams};
use tracing_test::traced_test;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(base_url: &str) -> PlacesClient {
    let config = ClientConfig::new("test_api_key").with_base_url(base_url);
    PlacesClient::with_config(config)
}

#[tokio::test]
#[traced_test]
async fn test_server_error_yields_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client
        .text_search("london beer", &TextSearchParams::default())
        .await;

    match result {
        Err(PlacesError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_not_found_yields_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client
        .text_search("london beer", &TextSearchParams::default())
        .await;

    assert!(matches!(
        result,
        Err(PlacesError::ApiError { status: 404, .. })
    ));
}

#[tokio::test]
#[traced_test]
async fn test_malformed_body_yields_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client
        .text_search("london beer", &TextSearchParams::default())
        .await;

    assert!(matches!(result, Err(PlacesError::JsonError(_))));
}

#[tokio::test]
#[traced_test]
async fn test_empty_query_makes_no_request() {
    let mock_server = MockServer::start().await;

    // Any request reaching the server fails the expectation
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = client.text_search("", &TextSearchParams::default()).await;
    assert!(matches!(result, Err(PlacesError::EmptyQuery)));
}

#[tokio::test]
#[traced_test]
async fn test_connection_failure_yields_request_error() {
    // Nothing listens on this port
    let client = create_test_client("http://127.0.0.1:9");

    let result = client
        .text_search("london beer", &TextSearchParams::default())
        .await;

    assert!(matches!(result, Err(PlacesError::RequestError(_))));
}

#[tokio::test]
#[traced_test]
async fn test_slow_server_hits_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new("test_api_key")
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = PlacesClient::with_config(config);

    let result = client
        .text_search("london beer", &TextSearchParams::default())
        .await;

    match result {
        Err(PlacesError::RequestError(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout RequestError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_caller_cancellation_takes_precedence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());

    let result = tokio::time::timeout(
        Duration::from_millis(100),
        client.text_search("london beer", &TextSearchParams::default()),
    )
    .await;

    // The outer deadline fires before the client's own 30s timeout
    assert!(result.is_err());
}
