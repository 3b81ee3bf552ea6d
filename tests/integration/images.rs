//! Integration tests for images

use super::*;
use gpt_manager::{ImageEditRequest, ImageInput, ImageResponseFormat, ImageSize};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains};

#[tokio::test]
async fn test_generate_image_integration() {
    let mock_server = setup_mock_server().await;

    plain_mock("POST", "/images/generations")
        .and(body_json(json!({
            "prompt": "A lighthouse at dusk",
            "model": "dall-e-3",
            "size": "1024x1024",
            "response_format": "b64_json"
        })))
        .respond_with(success_response(json!({
            "created": 1589478378,
            "data": [{"b64_json": "aGVsbG8=", "revised_prompt": "A lighthouse at dusk, oil painting"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ImageGenerationRequest::new("A lighthouse at dusk")
        .with_model("dall-e-3")
        .with_size(ImageSize::Size1024)
        .with_response_format(ImageResponseFormat::B64Json);

    let response = client.images().generate(request).await.unwrap();
    let image = response.first().unwrap();

    assert_eq!(&image.decode_b64().unwrap()[..], b"hello");
    assert_eq!(
        image.revised_prompt.as_deref(),
        Some("A lighthouse at dusk, oil painting")
    );
}

#[tokio::test]
async fn test_edit_image_integration() {
    let mock_server = setup_mock_server().await;

    plain_mock("POST", "/images/edits")
        .and(body_string_contains("name=\"image\"; filename=\"room.png\""))
        .and(body_string_contains("name=\"prompt\"\r\n\r\nAdd a lamp"))
        .respond_with(success_response(json!({
            "created": 1589478378,
            "data": [{"url": "https://example.com/room-lamp.png"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ImageEditRequest::new(ImageInput::new(b"PNG".to_vec(), "room.png"), "Add a lamp");

    let response = client.images().edit(request).await.unwrap();
    assert_eq!(
        response.first().and_then(|image| image.url.as_deref()),
        Some("https://example.com/room-lamp.png")
    );
}
