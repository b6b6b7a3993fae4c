//! Google Gemini REST API implementation.
//!
//! A thin `reqwest` client over the generative-language REST surface. One
//! client instance is cheap to construct; callers acquire a fresh one per
//! request and nothing is pooled or cached between calls.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use wayfarer_core::{ChatRequest, GroundedReply};
use wayfarer_error::{GeminiError, GeminiErrorKind, GeminiResult, JsonError, WayfarerResult};
use wayfarer_interface::{
    GeneratedImage, GeneratedVideo, ImageGeneration, JsonMode, VideoGeneration, WayfarerDriver,
};

use super::protocol::*;

/// REST endpoint for the generative-language API.
pub const GENERATIVE_LANGUAGE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fixed delay between polls of a video operation.
const VIDEO_POLL_DELAY: Duration = Duration::from_secs(10);

/// Polling budget for a video operation (attempts x delay is about ten minutes).
pub const VIDEO_POLL_MAX_ATTEMPTS: usize = 60;

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
/// Default image synthesis model.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
/// Default video synthesis model.
pub const DEFAULT_VIDEO_MODEL: &str = "veo-2.0-generate-001";

/// Client for the Google Gemini REST API.
///
/// # Example
///
/// ```no_run
/// use wayfarer_models::GeminiClient;
/// use wayfarer_core::{ChatRequest, Turn};
/// use wayfarer_interface::WayfarerDriver;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::from_env()?;
///
/// let request = ChatRequest::builder()
///     .turns(vec![Turn::user("Plan three days in Sedona")])
///     .search_grounding(true)
///     .build()?;
/// let reply = client.generate(&request).await?;
/// println!("{}", reply.text);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model_name: String,
    image_model: String,
    video_model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("image_model", &self.image_model)
            .field("video_model", &self.video_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with an explicit API key.
    ///
    /// Fails with [`GeminiErrorKind::MissingApiKey`] when the key is blank;
    /// policy-level key validation (minimum length) belongs to the caller.
    pub fn new(api_key: impl Into<String>) -> GeminiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model_name: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            base_url: GENERATIVE_LANGUAGE_ENDPOINT.to_string(),
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_client_from_env")]
    pub fn from_env() -> GeminiResult<Self> {
        let api_key =
            env::var("GEMINI_API_KEY").map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::new(api_key)
    }

    /// Override the default chat model.
    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Override the image synthesis model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Override the video synthesis model.
    pub fn with_video_model(mut self, model: impl Into<String>) -> Self {
        self.video_model = model.into();
        self
    }

    /// Override the API endpoint (tests and proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the wire request body for a chat request.
    fn build_body(&self, req: &ChatRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: req.turns.iter().map(Content::from_turn).collect(),
            system_instruction: req
                .system_instruction
                .as_deref()
                .map(SystemInstruction::from_text),
            tools: req
                .search_grounding
                .then(|| vec![Tool::google_search()]),
            generation_config: None,
        }
    }

    /// POST a body and deserialize the JSON response, mapping failures to
    /// structured Gemini errors.
    async fn post_json<B, R>(&self, url: String, body: &B) -> GeminiResult<R>
    where
        B: serde::Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let payload = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        serde_json::from_str(&payload)
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))
    }

    /// GET a resource and deserialize the JSON response.
    async fn get_json<R>(&self, url: String) -> GeminiResult<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &ChatRequest) -> GeminiResult<GroundedReply> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let body = self.build_body(req);
        debug!(model, turns = body.contents.len(), "issuing generateContent");

        let response: GenerateContentResponse = self.post_json(url, &body).await?;

        Ok(GroundedReply {
            text: response.text(),
            sources: response.sources(),
        })
    }

    /// Internal JSON-mode generate method.
    async fn generate_json_internal(
        &self,
        req: &ChatRequest,
        schema: &serde_json::Value,
    ) -> GeminiResult<String> {
        let model = req.model.as_deref().unwrap_or(&self.model_name);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        // JSON mode replaces the search tool with a declared response shape.
        let mut body = self.build_body(req);
        body.tools = None;
        body.generation_config = Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema.clone()),
            ..Default::default()
        });

        debug!(model, "issuing schema-constrained generateContent");
        let response: GenerateContentResponse = self.post_json(url, &body).await?;
        Ok(response.text())
    }
}

#[async_trait]
impl WayfarerDriver for GeminiClient {
    #[instrument(name = "gemini_generate", skip(self, req))]
    async fn generate(&self, req: &ChatRequest) -> WayfarerResult<GroundedReply> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl JsonMode for GeminiClient {
    #[instrument(name = "gemini_generate_json", skip(self, req, schema))]
    async fn generate_json(
        &self,
        req: &ChatRequest,
        schema: &serde_json::Value,
    ) -> WayfarerResult<serde_json::Value> {
        let payload = self.generate_json_internal(req, schema).await?;

        // Strict parse; the declared schema means no fallback heuristics.
        serde_json::from_str(&payload)
            .map_err(|e| JsonError::new(format!("schema-constrained response: {}", e)).into())
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    #[instrument(name = "gemini_generate_image", skip(self, prompt))]
    async fn generate_image(&self, prompt: &str) -> WayfarerResult<GeneratedImage> {
        let url = format!("{}/models/{}:predict", self.base_url, self.image_model);
        let body = ImagePredictRequest {
            instances: vec![ImageInstance {
                prompt: prompt.to_string(),
            }],
            parameters: ImageParameters { sample_count: 1 },
        };

        let response: ImagePredictResponse = self.post_json(url, &body).await?;

        let prediction = response.predictions.into_iter().next().ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::InvalidResponse(
                "predict response contained no predictions".to_string(),
            ))
        })?;

        let encoded = prediction.bytes_base64_encoded.ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::InvalidResponse(
                "prediction carried no image bytes".to_string(),
            ))
        })?;

        let data = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

        Ok(GeneratedImage {
            mime: prediction.mime_type.unwrap_or_else(|| "image/png".to_string()),
            data,
        })
    }
}

#[async_trait]
impl VideoGeneration for GeminiClient {
    #[instrument(name = "gemini_generate_video", skip(self, prompt))]
    async fn generate_video(&self, prompt: &str) -> WayfarerResult<GeneratedVideo> {
        let url = format!(
            "{}/models/{}:predictLongRunning",
            self.base_url, self.video_model
        );
        let body = VideoGenerateRequest {
            instances: vec![VideoInstance {
                prompt: prompt.to_string(),
            }],
        };

        let handle: OperationHandle = self.post_json(url, &body).await?;
        debug!(operation = %handle.name, "video operation started");

        // Fixed-delay polling with a hard attempt ceiling.
        for attempt in 1..=VIDEO_POLL_MAX_ATTEMPTS {
            tokio::time::sleep(VIDEO_POLL_DELAY).await;

            let poll_url = format!("{}/{}", self.base_url, handle.name);
            let operation: Operation = self.get_json(poll_url).await?;

            if let Some(error) = operation.error {
                let message = error.message.unwrap_or_else(|| "unknown".to_string());
                return Err(GeminiError::new(GeminiErrorKind::OperationFailed(message)).into());
            }

            if operation.done {
                debug!(attempt, "video operation settled");
                let uri = operation
                    .response
                    .and_then(|r| r.generate_video_response)
                    .and_then(|r| r.generated_samples.into_iter().next())
                    .and_then(|s| s.video)
                    .and_then(|v| v.uri)
                    .ok_or_else(|| {
                        GeminiError::new(GeminiErrorKind::InvalidResponse(
                            "finished operation carried no video uri".to_string(),
                        ))
                    })?;

                return Ok(GeneratedVideo {
                    mime: "video/mp4".to_string(),
                    uri,
                });
            }
        }

        Err(GeminiError::new(GeminiErrorKind::OperationTimeout {
            name: handle.name,
            attempts: VIDEO_POLL_MAX_ATTEMPTS,
        })
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::Turn;

    #[test]
    fn blank_key_is_unavailable() {
        assert!(GeminiClient::new("   ").is_err());
        assert!(GeminiClient::new("a-plausible-key").is_ok());
    }

    #[test]
    fn chat_body_carries_persona_and_search_tool() {
        let client = GeminiClient::new("test-key").unwrap();
        let req = ChatRequest::builder()
            .turns(vec![Turn::user("hello")])
            .system_instruction(Some("persona".to_string()))
            .search_grounding(true)
            .build()
            .unwrap();

        let body = client.build_body(&req);
        assert_eq!(body.contents.len(), 1);
        assert!(body.system_instruction.is_some());
        assert_eq!(body.tools.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn grounding_disabled_omits_tools() {
        let client = GeminiClient::new("test-key").unwrap();
        let req = ChatRequest::builder()
            .turns(vec![Turn::user("hello")])
            .build()
            .unwrap();
        assert!(client.build_body(&req).tools.is_none());
    }
}
