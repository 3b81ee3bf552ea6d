//! Integration tests for assistants

use super::*;
use gpt_manager::{AssistantTool, ModifyAssistantRequest};
use serde_json::json;
use wiremock::matchers::{body_json, query_param};

fn assistant_body(name: &str) -> serde_json::Value {
    json!({
        "id": "asst_abc123",
        "object": "assistant",
        "created_at": 1698984975,
        "name": name,
        "description": null,
        "model": "gpt-4",
        "instructions": "You are a personal math tutor.",
        "tools": [{"type": "code_interpreter"}],
        "file_ids": [],
        "metadata": {}
    })
}

#[tokio::test]
async fn test_create_assistant_integration() {
    let mock_server = setup_mock_server().await;

    beta_mock("POST", "/assistants")
        .and(body_json(json!({
            "model": "gpt-4",
            "name": "Math Tutor",
            "instructions": "You are a personal math tutor.",
            "tools": [{"type": "code_interpreter"}]
        })))
        .respond_with(success_response(assistant_body("Math Tutor")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = CreateAssistantRequest::new("gpt-4")
        .with_name("Math Tutor")
        .with_instructions("You are a personal math tutor.")
        .with_tool(AssistantTool::CodeInterpreter);

    let assistant = Assistant::create(client.as_ref(), request).await.unwrap();

    assert_eq!(assistant.id, "asst_abc123");
    assert_eq!(assistant.tools, vec![AssistantTool::CodeInterpreter]);
}

#[tokio::test]
async fn test_modify_sends_only_changed_fields() {
    let mock_server = setup_mock_server().await;

    beta_mock("POST", "/assistants/asst_abc123")
        .and(body_json(json!({"name": "Algebra Tutor"})))
        .respond_with(success_response(assistant_body("Algebra Tutor")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut assistant: Assistant = serde_json::from_value(assistant_body("Math Tutor")).unwrap();

    assistant
        .update(
            client.as_ref(),
            ModifyAssistantRequest::default().with_name("Algebra Tutor"),
        )
        .await
        .unwrap();

    assert_eq!(assistant.name.as_deref(), Some("Algebra Tutor"));
}

#[tokio::test]
async fn test_list_assistants_through_organization() {
    let mock_server = setup_mock_server().await;

    beta_mock("GET", "/assistants")
        .and(query_param("order", "desc"))
        .and(query_param("limit", "20"))
        .respond_with(success_response(json!({
            "object": "list",
            "data": [assistant_body("Math Tutor")],
            "first_id": "asst_abc123",
            "last_id": "asst_abc123",
            "has_more": false
        })))
        .mount(&mock_server)
        .await;

    let organization = Organization::new(client_for(&mock_server));
    let assistants = organization
        .list_assistants(SortOrder::Descending, 20)
        .await
        .unwrap();

    assert_eq!(assistants.len(), 1);
    assert_eq!(assistants[0].name.as_deref(), Some("Math Tutor"));
}

#[tokio::test]
async fn test_attach_file_to_assistant() {
    let mock_server = setup_mock_server().await;

    beta_mock("POST", "/assistants/asst_abc123/files")
        .and(body_json(json!({"file_id": "file-abc123"})))
        .respond_with(success_response(json!({
            "id": "file-abc123",
            "object": "assistant.file",
            "created_at": 1699055364,
            "assistant_id": "asst_abc123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut assistant: Assistant = serde_json::from_value(assistant_body("Math Tutor")).unwrap();

    let file = assistant
        .attach_file(client.as_ref(), "file-abc123")
        .await
        .unwrap();

    assert_eq!(file.object, "assistant.file");
    assert_eq!(assistant.file_ids, vec!["file-abc123".to_string()]);
}
