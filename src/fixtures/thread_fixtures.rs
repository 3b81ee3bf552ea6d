//! Thread and message fixtures

use serde_json::json;

pub fn thread_response() -> serde_json::Value {
    json!({
        "id": "thread_abc123",
        "object": "thread",
        "created_at": 1699012949,
        "metadata": {}
    })
}

pub fn thread_deleted_response() -> serde_json::Value {
    json!({
        "id": "thread_abc123",
        "object": "thread.deleted",
        "deleted": true
    })
}

pub fn message_response() -> serde_json::Value {
    json!({
        "id": "msg_abc123",
        "object": "thread.message",
        "created_at": 1699017614,
        "thread_id": "thread_abc123",
        "role": "user",
        "content": [{
            "type": "text",
            "text": {"value": "How does AI work? Explain it in simple terms.", "annotations": []}
        }],
        "file_ids": [],
        "assistant_id": null,
        "run_id": null,
        "metadata": {}
    })
}

pub fn assistant_message_response() -> serde_json::Value {
    json!({
        "id": "msg_def456",
        "object": "thread.message",
        "created_at": 1699017620,
        "thread_id": "thread_abc123",
        "role": "assistant",
        "content": [
            {"type": "image_file", "image_file": {"file_id": "file-plot"}},
            {
                "type": "text",
                "text": {
                    "value": "Here is the plot.",
                    "annotations": [{
                        "type": "file_path",
                        "text": "sandbox:/mnt/data/plot.png",
                        "start_index": 0,
                        "end_index": 26,
                        "file_path": {"file_id": "file-plot"}
                    }]
                }
            }
        ],
        "file_ids": [],
        "assistant_id": "asst_abc123",
        "run_id": "run_abc123",
        "metadata": {}
    })
}

pub fn message_list_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [assistant_message_response(), message_response()],
        "first_id": "msg_def456",
        "last_id": "msg_abc123",
        "has_more": false
    })
}

pub fn message_file_response() -> serde_json::Value {
    json!({
        "id": "file-abc123",
        "object": "thread.message.file",
        "created_at": 1699061776,
        "message_id": "msg_abc123"
    })
}
