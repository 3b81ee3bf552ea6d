//! Assistant fixtures

use serde_json::json;

pub fn assistant_response() -> serde_json::Value {
    json!({
        "id": "asst_abc123",
        "object": "assistant",
        "created_at": 1698984975,
        "name": "Math Tutor",
        "description": null,
        "model": "gpt-4",
        "instructions": "You are a personal math tutor.",
        "tools": [{"type": "code_interpreter"}],
        "file_ids": [],
        "metadata": {}
    })
}

pub fn assistant_list_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            assistant_response(),
            {
                "id": "asst_def456",
                "object": "assistant",
                "created_at": 1698982718,
                "name": "Librarian",
                "description": null,
                "model": "gpt-4-1106-preview",
                "instructions": null,
                "tools": [{"type": "retrieval"}],
                "file_ids": ["file-abc123"],
                "metadata": {}
            }
        ],
        "first_id": "asst_abc123",
        "last_id": "asst_def456",
        "has_more": false
    })
}

pub fn assistant_file_response() -> serde_json::Value {
    json!({
        "id": "file-abc123",
        "object": "assistant.file",
        "created_at": 1699055364,
        "assistant_id": "asst_abc123"
    })
}

pub fn assistant_deleted_response() -> serde_json::Value {
    json!({
        "id": "asst_abc123",
        "object": "assistant.deleted",
        "deleted": true
    })
}
