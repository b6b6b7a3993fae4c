//! Gemini backend for the Wayfarer concierge library.
//!
//! Provides the REST client used for grounded chat, structured JSON
//! extraction, and media synthesis, plus the Live API WebSocket client used
//! by the realtime voice bridge.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    BufferId, DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_MODEL, DEFAULT_VIDEO_MODEL,
    GENERATIVE_LANGUAGE_ENDPOINT, GeminiClient, GeminiLiveClient, LiveEvent, LiveSession,
    PlaybackQueue, ScheduledBuffer, VIDEO_POLL_MAX_ATTEMPTS, live_protocol, protocol,
};
