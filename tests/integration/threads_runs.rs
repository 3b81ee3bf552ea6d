//! Integration tests for threads, messages and runs

use super::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, query_param};

fn thread_body() -> serde_json::Value {
    json!({
        "id": "thread_abc123",
        "object": "thread",
        "created_at": 1699012949,
        "metadata": {}
    })
}

fn run_body(status: &str) -> serde_json::Value {
    json!({
        "id": "run_abc123",
        "object": "thread.run",
        "created_at": 1699063290,
        "assistant_id": "asst_abc123",
        "thread_id": "thread_abc123",
        "status": status,
        "started_at": 1699063290,
        "expires_at": null,
        "cancelled_at": null,
        "failed_at": null,
        "completed_at": null,
        "last_error": null,
        "required_action": null,
        "model": "gpt-4",
        "instructions": null,
        "tools": [],
        "file_ids": [],
        "metadata": {}
    })
}

fn message_body(role: &str, text: &str) -> serde_json::Value {
    json!({
        "id": format!("msg_{}", role),
        "object": "thread.message",
        "created_at": 1699017614,
        "thread_id": "thread_abc123",
        "role": role,
        "content": [{"type": "text", "text": {"value": text, "annotations": []}}],
        "file_ids": [],
        "assistant_id": null,
        "run_id": null,
        "metadata": {}
    })
}

#[tokio::test]
async fn test_conversation_round_trip() {
    let mock_server = setup_mock_server().await;

    beta_mock("POST", "/threads")
        .and(body_json(json!({})))
        .respond_with(success_response(thread_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    beta_mock("POST", "/threads/thread_abc123/messages")
        .and(body_json(json!({"role": "user", "content": "Solve 3x + 11 = 14"})))
        .respond_with(success_response(message_body("user", "Solve 3x + 11 = 14")))
        .expect(1)
        .mount(&mock_server)
        .await;

    beta_mock("POST", "/threads/thread_abc123/runs")
        .and(body_json(json!({"assistant_id": "asst_abc123"})))
        .respond_with(success_response(run_body("queued")))
        .expect(1)
        .mount(&mock_server)
        .await;

    beta_mock("GET", "/threads/thread_abc123/runs/run_abc123")
        .respond_with(success_response(run_body("in_progress")))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    beta_mock("GET", "/threads/thread_abc123/runs/run_abc123")
        .respond_with(success_response(run_body("completed")))
        .mount(&mock_server)
        .await;

    beta_mock("GET", "/threads/thread_abc123/messages")
        .and(query_param("order", "desc"))
        .and(query_param("limit", "1"))
        .respond_with(success_response(json!({
            "object": "list",
            "data": [message_body("assistant", "x = 1")],
            "first_id": "msg_assistant",
            "last_id": "msg_assistant",
            "has_more": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let thread = Thread::create(client.as_ref(), CreateThreadRequest::new())
        .await
        .unwrap();
    thread
        .post_message(client.as_ref(), CreateMessageRequest::user("Solve 3x + 11 = 14"))
        .await
        .unwrap();

    let mut run = thread.run(client.as_ref(), "asst_abc123").await.unwrap();
    let status = run
        .wait_until_settled(client.as_ref(), Duration::from_millis(5))
        .await
        .unwrap();
    assert_eq!(status, RunStatus::Completed);

    let page = thread
        .messages(
            client.as_ref(),
            ListParams::new().with_limit(1).with_order(SortOrder::Descending),
        )
        .await
        .unwrap();

    assert!(page.has_more);
    assert_eq!(page.data[0].first_text().unwrap(), "x = 1");
}

#[tokio::test]
async fn test_submit_tool_outputs_integration() {
    let mock_server = setup_mock_server().await;

    let mut requires_action = run_body("requires_action");
    requires_action["required_action"] = json!({
        "type": "submit_tool_outputs",
        "submit_tool_outputs": {
            "tool_calls": [{
                "id": "call_abc123",
                "type": "function",
                "function": {"name": "get_weather", "arguments": "{\"city\":\"Paris\"}"}
            }]
        }
    });

    beta_mock(
        "POST",
        "/threads/thread_abc123/runs/run_abc123/submit_tool_outputs",
    )
    .and(body_json(json!({
        "tool_outputs": [{"tool_call_id": "call_abc123", "output": "22C"}]
    })))
    .respond_with(success_response(run_body("queued")))
    .expect(1)
    .mount(&mock_server)
    .await;

    let client = client_for(&mock_server);
    let mut run: Run = serde_json::from_value(requires_action).unwrap();
    assert_eq!(run.pending_tool_calls().len(), 1);

    run.submit_tool_outputs(client.as_ref(), vec![ToolOutput::new("call_abc123", "22C")])
        .await
        .unwrap();

    assert_eq!(run.status, RunStatus::Queued);
    assert!(run.pending_tool_calls().is_empty());
}

#[tokio::test]
async fn test_delete_thread_integration() {
    let mock_server = setup_mock_server().await;

    beta_mock("DELETE", "/threads/thread_abc123")
        .respond_with(success_response(json!({
            "id": "thread_abc123",
            "object": "thread.deleted",
            "deleted": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let thread: Thread = serde_json::from_value(thread_body()).unwrap();

    let status = thread.delete(client.as_ref()).await.unwrap();
    assert!(status.deleted);
}
