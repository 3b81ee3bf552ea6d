//! File fixtures

use serde_json::json;

pub fn file_object_response() -> serde_json::Value {
    json!({
        "id": "file-abc123",
        "object": "file",
        "bytes": 140,
        "created_at": 1613779121,
        "filename": "knowledge.txt",
        "purpose": "assistants",
        "status": "processed",
        "status_details": null
    })
}

pub fn list_files_response() -> serde_json::Value {
    json!({
        "data": [
            file_object_response(),
            {
                "id": "file-xyz789",
                "object": "file",
                "bytes": 85000,
                "created_at": 1613779657,
                "filename": "train.jsonl",
                "purpose": "fine-tune"
            }
        ],
        "object": "list"
    })
}

pub fn delete_file_response() -> serde_json::Value {
    json!({
        "id": "file-abc123",
        "object": "file",
        "deleted": true
    })
}
