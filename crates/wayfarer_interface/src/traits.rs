//! Trait definitions for chat backends and their capabilities.

use crate::{GeneratedImage, GeneratedVideo};
use async_trait::async_trait;
use wayfarer_core::{ChatRequest, GroundedReply};
use wayfarer_error::WayfarerResult;

/// Core trait that all chat backends must implement.
///
/// This provides the minimal interface for grounded text generation.
/// Additional capabilities are exposed through optional traits.
#[async_trait]
pub trait WayfarerDriver: Send + Sync {
    /// Generate a grounded reply for a fully-specified request.
    async fn generate(&self, req: &ChatRequest) -> WayfarerResult<GroundedReply>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request does not override it.
    fn model_name(&self) -> &str;
}

/// Trait for backends that support structured JSON output.
///
/// The request declares the expected shape up front so the response can be
/// parsed with a strict JSON parse and no fallback heuristics.
#[async_trait]
pub trait JsonMode: WayfarerDriver {
    /// Generate output conforming to a JSON schema.
    async fn generate_json(
        &self,
        req: &ChatRequest,
        schema: &serde_json::Value,
    ) -> WayfarerResult<serde_json::Value>;
}

/// Trait for backends that can synthesize images.
#[async_trait]
pub trait ImageGeneration: WayfarerDriver {
    /// Generate a single image from a text prompt.
    async fn generate_image(&self, prompt: &str) -> WayfarerResult<GeneratedImage>;
}

/// Trait for backends that can synthesize video.
///
/// Video generation is a long-running operation on every known provider;
/// implementations poll to completion before returning.
#[async_trait]
pub trait VideoGeneration: WayfarerDriver {
    /// Generate a video from a text prompt, blocking until the operation
    /// settles or the polling budget is exhausted.
    async fn generate_video(&self, prompt: &str) -> WayfarerResult<GeneratedVideo>;
}
