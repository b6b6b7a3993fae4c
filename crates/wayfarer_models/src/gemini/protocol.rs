//! Wire types for the Gemini REST API.
//!
//! Hand-rolled serde shapes for the `generateContent`, `predict`, and
//! `predictLongRunning` endpoints. Only the fields this library consumes are
//! modeled; unknown response fields are ignored.

use serde::{Deserialize, Serialize};
use wayfarer_core::{Role, Source};

//
// ─── REQUESTS ───────────────────────────────────────────────────────────────────
//

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Ordered turn list
    pub contents: Vec<Content>,
    /// Persona text, sent out-of-band from the turn list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    /// Tool declarations (web search grounding)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    /// Generation parameters (JSON mode lives here)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One role-tagged turn on the wire.
///
/// The API spells the assistant role `"model"`; [`Content::from_turn`] is the
/// single place that alias is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// `"user"` or `"model"`
    pub role: String,
    /// Turn content parts
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a wire turn from a normalized domain turn.
    pub fn from_turn(turn: &wayfarer_core::Turn) -> Self {
        let role = match turn.role {
            Role::User => "user",
            _ => "model",
        };
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: turn.text.clone(),
            }],
        }
    }
}

/// A text part of a request turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The part text
    pub text: String,
}

/// System instruction container.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    /// Instruction parts
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Wrap a persona string in the wire shape.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A tool declaration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Web search grounding; serializes as an empty object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl Tool {
    /// The web-search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

/// Marker for the hosted web-search tool.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearch {}

/// Generation parameters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// `"application/json"` for structured extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Declared response shape for structured extraction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

//
// ─── RESPONSES ──────────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentResponse {
    /// Generation candidates; only the first is consulted
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, empty when absent.
    pub fn text(&self) -> String {
        let Some(candidate) = self.candidates.first() else {
            return String::new();
        };
        let Some(content) = &candidate.content else {
            return String::new();
        };
        content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Grounding citations of the first candidate, in API order.
    ///
    /// Chunks without a URI are dropped; missing titles get the fixed
    /// placeholder. No deduplication.
    pub fn sources(&self) -> Vec<Source> {
        let Some(candidate) = self.candidates.first() else {
            return Vec::new();
        };
        let Some(metadata) = &candidate.grounding_metadata else {
            return Vec::new();
        };
        metadata
            .grounding_chunks
            .iter()
            .filter_map(|chunk| chunk.web.as_ref())
            .filter_map(|web| match web.uri.as_deref() {
                Some(uri) if !uri.is_empty() => Some(Source::new(uri, web.title.clone())),
                _ => None,
            })
            .collect()
    }
}

/// One generation candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    /// Generated content
    pub content: Option<CandidateContent>,
    /// Search grounding metadata
    pub grounding_metadata: Option<GroundingMetadata>,
    /// Why generation stopped
    pub finish_reason: Option<String>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    /// Response parts
    pub parts: Vec<ResponsePart>,
    /// Speaker tag, `"model"` in practice
    pub role: Option<String>,
}

/// A part of a response candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsePart {
    /// Text content
    pub text: Option<String>,
    /// Inline binary content (base64)
    pub inline_data: Option<InlineData>,
}

/// Inline base64-encoded binary data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Web-search grounding metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingMetadata {
    /// Citation chunks in ranking order
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding citation chunk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GroundingChunk {
    /// Web citation, when the chunk is a web result
    pub web: Option<WebSource>,
}

/// A web citation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebSource {
    /// Cited page URL
    pub uri: Option<String>,
    /// Cited page title
    pub title: Option<String>,
}

//
// ─── IMAGE SYNTHESIS (IMAGEN :predict) ──────────────────────────────────────────
//

/// Body of a `models/{model}:predict` call.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePredictRequest {
    /// Prompt instances
    pub instances: Vec<ImageInstance>,
    /// Sampling parameters
    pub parameters: ImageParameters,
}

/// A single image prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ImageInstance {
    /// The text prompt
    pub prompt: String,
}

/// Image sampling parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageParameters {
    /// Number of images to synthesize
    pub sample_count: u32,
}

/// Body of a `predict` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImagePredictResponse {
    /// One prediction per requested sample
    pub predictions: Vec<ImagePrediction>,
}

/// One synthesized image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePrediction {
    /// Base64-encoded image bytes
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    pub mime_type: Option<String>,
}

//
// ─── VIDEO SYNTHESIS (VEO :predictLongRunning) ──────────────────────────────────
//

/// Body of a `models/{model}:predictLongRunning` call.
#[derive(Debug, Clone, Serialize)]
pub struct VideoGenerateRequest {
    /// Prompt instances
    pub instances: Vec<VideoInstance>,
}

/// A single video prompt.
#[derive(Debug, Clone, Serialize)]
pub struct VideoInstance {
    /// The text prompt
    pub prompt: String,
}

/// Immediate response of `predictLongRunning`: an operation resource name.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationHandle {
    /// Operation resource name, polled until done
    pub name: String,
}

/// A long-running operation, as returned by polling its resource name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    /// Operation resource name
    pub name: Option<String>,
    /// Whether the operation has settled
    pub done: bool,
    /// Result payload, present once done without error
    pub response: Option<OperationResponse>,
    /// Server-side failure, present once done with error
    pub error: Option<OperationError>,
}

/// Server-side operation failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperationError {
    /// Status code
    pub code: Option<i64>,
    /// Failure description
    pub message: Option<String>,
}

/// Result payload of a finished video operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationResponse {
    /// Veo result envelope
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Veo result envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateVideoResponse {
    /// One sample per requested video
    pub generated_samples: Vec<GeneratedSample>,
}

/// One synthesized video sample.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratedSample {
    /// The video reference
    pub video: Option<VideoRef>,
}

/// Reference to a finished video.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoRef {
    /// Download URI
    pub uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::{DEFAULT_SOURCE_TITLE, Turn};

    #[test]
    fn assistant_turn_uses_the_model_alias_on_the_wire() {
        let content = Content::from_turn(&Turn::assistant("hi"));
        assert_eq!(content.role, "model");
        let content = Content::from_turn(&Turn::user("hi"));
        assert_eq!(content.role, "user");
    }

    #[test]
    fn search_tool_serializes_as_empty_object() {
        let body = serde_json::to_value(vec![Tool::google_search()]).unwrap();
        assert_eq!(body, serde_json::json!([{"googleSearch": {}}]));
    }

    #[test]
    fn generation_config_uses_camel_case() {
        let config = GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(serde_json::json!({"type": "OBJECT"})),
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("responseMimeType").is_some());
        assert!(value.get("responseSchema").is_some());
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Sedona "}, {"text": "awaits."}]}
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), "Sedona awaits.");
    }

    #[test]
    fn sources_keep_order_and_default_missing_titles() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "ok"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "Alpha"}},
                        {"web": {"uri": "https://b.example"}},
                        {"web": {"title": "no uri, dropped"}},
                        {"web": {"uri": "https://a.example", "title": "Alpha"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let sources = response.sources();
        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].title, "Alpha");
        assert_eq!(sources[1].title, DEFAULT_SOURCE_TITLE);
        // duplicates are preserved
        assert_eq!(sources[2].uri, "https://a.example");
    }

    #[test]
    fn empty_candidates_yield_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(response.sources().is_empty());
    }

    #[test]
    fn finished_video_operation_parses() {
        let raw = r#"{
            "name": "models/veo/operations/abc",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [{"video": {"uri": "https://video.example/abc.mp4"}}]
                }
            }
        }"#;
        let op: Operation = serde_json::from_str(raw).unwrap();
        assert!(op.done);
        let uri = op
            .response
            .and_then(|r| r.generate_video_response)
            .and_then(|r| r.generated_samples.into_iter().next())
            .and_then(|s| s.video)
            .and_then(|v| v.uri)
            .unwrap();
        assert_eq!(uri, "https://video.example/abc.mp4");
    }

    #[test]
    fn pending_operation_defaults_to_not_done() {
        let op: Operation = serde_json::from_str(r#"{"name": "models/veo/operations/abc"}"#).unwrap();
        assert!(!op.done);
        assert!(op.response.is_none());
    }
}
