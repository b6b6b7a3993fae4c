// Integration tests against the real Gemini REST API.
//
// All tests here are gated behind the `api` marker feature and require a
// configured GEMINI_API_KEY. Run with:
//
//   cargo test -p wayfarer_models --features api

use wayfarer_core::{ChatRequest, Turn};
use wayfarer_interface::{JsonMode, WayfarerDriver};
use wayfarer_models::GeminiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn grounded_generate_returns_text() {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_env().expect("Failed to create client");

    let request = ChatRequest::builder()
        .turns(vec![Turn::user("In one sentence: why visit Sedona?")])
        .search_grounding(true)
        .build()
        .expect("Failed to build request");

    let reply = client.generate(&request).await.expect("API call failed");
    assert!(!reply.text.is_empty());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn json_mode_returns_schema_conformant_payload() {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_env().expect("Failed to create client");

    let schema = serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "city": { "type": "STRING" }
        },
        "required": ["city"]
    });

    let request = ChatRequest::builder()
        .turns(vec![Turn::user(
            "Name one city in Arizona known for red rocks.",
        )])
        .build()
        .expect("Failed to build request");

    let value = client
        .generate_json(&request, &schema)
        .await
        .expect("API call failed");
    assert!(value.get("city").is_some());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn default_model_is_reported() {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_env().expect("Failed to create client");
    assert_eq!(client.provider_name(), "gemini");
    assert!(!client.model_name().is_empty());
}
