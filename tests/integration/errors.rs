//! Integration tests for error mapping over HTTP

use super::*;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_authentication_error_integration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/assistants/asst_abc123"))
        .respond_with(error_response(
            401,
            json!({
                "error": {
                    "message": "Incorrect API key provided: test-api-key.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            }),
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = Assistant::fetch(client.as_ref(), "asst_abc123")
        .await
        .unwrap_err();

    assert!(err.is_authentication_error());
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().starts_with("Failed to retrieve assistant"));
}

#[tokio::test]
async fn test_rate_limit_error_carries_retry_after() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/threads/thread_abc123"))
        .respond_with(
            error_response(
                429,
                json!({
                    "error": {
                        "message": "Rate limit reached for requests",
                        "type": "requests",
                        "param": null,
                        "code": "rate_limit_exceeded"
                    }
                }),
            )
            .insert_header("retry-after", "20"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = Thread::fetch(client.as_ref(), "thread_abc123")
        .await
        .unwrap_err();

    assert!(err.is_rate_limit_error());
    assert_eq!(err.retry_after(), Some(20));
}

#[tokio::test]
async fn test_not_found_keeps_server_message() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/files/file-missing"))
        .respond_with(error_response(
            404,
            json!({
                "error": {
                    "message": "No such File object: file-missing",
                    "type": "invalid_request_error",
                    "param": "id",
                    "code": null
                }
            }),
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.files().retrieve("file-missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("No such File object: file-missing"));
}

#[tokio::test]
async fn test_empty_id_never_reaches_server() {
    let mock_server = setup_mock_server().await;
    let client = client_for(&mock_server);

    let err = client.runs().retrieve("thread_abc123", "").await.unwrap_err();

    assert!(err.is_validation_error());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_timeout_reports_configured_duration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/assistants"))
        .respond_with(success_response(json!({"object": "list", "data": []}))
            .set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = OpenAIConfig::new(TEST_API_KEY)
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(50));
    let client = OpenAIClientBuilder::new().with_config(config).build().unwrap();

    let err = client
        .assistants()
        .list(ListParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, OpenAIError::Timeout { timeout_ms: 50 }));
}
