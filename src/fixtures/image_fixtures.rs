//! Image fixtures

use serde_json::json;

pub fn image_url_response() -> serde_json::Value {
    json!({
        "created": 1589478378,
        "data": [
            {"url": "https://example.com/image1.png", "revised_prompt": "A white siamese cat"},
            {"url": "https://example.com/image2.png"}
        ]
    })
}

/// A 1x1 PNG, base64 encoded.
pub fn image_b64_response() -> serde_json::Value {
    json!({
        "created": 1589478378,
        "data": [{
            "b64_json": "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg=="
        }]
    })
}
