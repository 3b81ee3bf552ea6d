//! Run and run step fixtures

use serde_json::json;

pub fn run_response(status: &str) -> serde_json::Value {
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
        "tools": [{"type": "code_interpreter"}],
        "file_ids": [],
        "metadata": {},
        "usage": null
    })
}

pub fn run_requires_action_response() -> serde_json::Value {
    let mut run = run_response("requires_action");
    run["required_action"] = json!({
        "type": "submit_tool_outputs",
        "submit_tool_outputs": {
            "tool_calls": [{
                "id": "call_abc123",
                "type": "function",
                "function": {"name": "get_weather", "arguments": "{\"city\":\"Paris\"}"}
            }]
        }
    });
    run
}

pub fn run_failed_response() -> serde_json::Value {
    let mut run = run_response("failed");
    run["failed_at"] = json!(1699063300);
    run["last_error"] = json!({"code": "rate_limit_exceeded", "message": "Rate limit reached"});
    run
}

pub fn run_step_response() -> serde_json::Value {
    json!({
        "id": "step_abc123",
        "object": "thread.run.step",
        "created_at": 1699063291,
        "run_id": "run_abc123",
        "assistant_id": "asst_abc123",
        "thread_id": "thread_abc123",
        "type": "message_creation",
        "status": "completed",
        "cancelled_at": null,
        "completed_at": 1699063291,
        "expired_at": null,
        "failed_at": null,
        "last_error": null,
        "step_details": {
            "type": "message_creation",
            "message_creation": {"message_id": "msg_def456"}
        },
        "usage": {"prompt_tokens": 123, "completion_tokens": 456, "total_tokens": 579}
    })
}

pub fn tool_call_step_response() -> serde_json::Value {
    json!({
        "id": "step_def456",
        "object": "thread.run.step",
        "created_at": 1699063292,
        "run_id": "run_abc123",
        "assistant_id": "asst_abc123",
        "thread_id": "thread_abc123",
        "type": "tool_calls",
        "status": "completed",
        "cancelled_at": null,
        "completed_at": 1699063295,
        "expired_at": null,
        "failed_at": null,
        "last_error": null,
        "step_details": {
            "type": "tool_calls",
            "tool_calls": [
                {
                    "id": "call_ci",
                    "type": "code_interpreter",
                    "code_interpreter": {
                        "input": "print(2 + 2)",
                        "outputs": [{"type": "logs", "logs": "4"}]
                    }
                },
                {"id": "call_ret", "type": "retrieval", "retrieval": {}},
                {
                    "id": "call_fn",
                    "type": "function",
                    "function": {"name": "get_weather", "arguments": "{}", "output": "sunny"}
                }
            ]
        }
    })
}

pub fn run_step_list_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [run_step_response(), tool_call_step_response()],
        "first_id": "step_abc123",
        "last_id": "step_def456",
        "has_more": false
    })
}
