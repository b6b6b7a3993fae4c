//! Google Gemini API client implementation.
//!
//! This module provides two clients for the Gemini API:
//! - [`GeminiClient`] - REST client for chat, JSON extraction, and media synthesis
//! - [`GeminiLiveClient`] - WebSocket client for the Live API (realtime voice)
//!
//! # REST client
//!
//! The REST client supports:
//! - Grounded chat via the `google_search` tool, with citation extraction
//! - Schema-constrained JSON output (`responseMimeType` + `responseSchema`)
//! - Image synthesis (Imagen `:predict`)
//! - Video synthesis (Veo `:predictLongRunning` with bounded polling)
//!
//! # Live client
//!
//! The Live client supports:
//! - WebSocket bidirectional streaming with a setup handshake
//! - Realtime PCM audio input and audio/text server events
//! - The server-driven `interrupted` signal, consumed by [`PlaybackQueue`]

mod client;
mod live_client;
pub mod live_protocol;
mod playback;
pub mod protocol;

pub use client::{
    DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_VIDEO_MODEL, GENERATIVE_LANGUAGE_ENDPOINT,
    GeminiClient, VIDEO_POLL_MAX_ATTEMPTS,
};
pub use live_client::{GeminiLiveClient, LiveEvent, LiveSession};
pub use playback::{BufferId, PlaybackQueue, ScheduledBuffer};
