//! Execution tests for HTTP error classification.

use mbtapi::{ClientConfig, Get, GetRouteParams, MbtaClient, MbtaError, Route};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MbtaClient {
    MbtaClient::new(ClientConfig {
        base_url: Some(server.uri()),
        ..Default::default()
    })
    .unwrap()
}

async fn get_route_err(server: &MockServer) -> MbtaError {
    let client = client_for(server);
    Route::get(&client, "Red", &GetRouteParams::default())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_bad_request_surfaces_parameter_and_code() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "errors": [{
            "status": "400",
            "source": { "parameter": "sort" },
            "title": "Invalid sort key",
            "code": "bad_request"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&body))
        .mount(&mock_server)
        .await;

    match get_route_err(&mock_server).await {
        MbtaError::BadRequest {
            parameter,
            detail,
            code,
        } => {
            assert_eq!(parameter, "sort");
            assert_eq!(detail, "Invalid sort key");
            assert_eq!(code, "bad_request");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_status_parses_error_body() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "errors": [{
            "status": "404",
            "title": "Resource not found",
            "code": "not_found"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&body))
        .mount(&mock_server)
        .await;

    match get_route_err(&mock_server).await {
        MbtaError::BadRequest { code, .. } => assert_eq!(code, "not_found"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn test_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        get_route_err(&mock_server).await,
        MbtaError::Forbidden
    ));
}

#[tokio::test]
async fn test_rate_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        get_route_err(&mock_server).await,
        MbtaError::RateLimitExceeded
    ));
}

#[tokio::test]
async fn test_errors_in_success_payload_take_precedence() {
    let mock_server = MockServer::start().await;

    // A 2xx body carrying an errors array is still a failure.
    let body = serde_json::json!({
        "data": null,
        "errors": [{
            "source": { "parameter": "include" },
            "title": "Invalid include",
            "code": "bad_request"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    match get_route_err(&mock_server).await {
        MbtaError::BadRequest { parameter, .. } => assert_eq!(parameter, "include"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_status_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    match get_route_err(&mock_server).await {
        MbtaError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_malformed_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes/Red"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    assert!(matches!(
        get_route_err(&mock_server).await,
        MbtaError::MalformedPayload(_)
    ));
}
