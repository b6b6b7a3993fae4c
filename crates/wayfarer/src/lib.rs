//! Wayfarer - conversational concierge core for Health & Travels.
//!
//! Wayfarer is the headless core behind the brand's chat surfaces: grounded
//! chat with graceful degradation to a deterministic local responder,
//! schema-constrained triage of reviews and inbound leads, image/video
//! synthesis, and a realtime voice bridge.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wayfarer::Concierge;
//!
//! #[tokio::main]
//! async fn main() {
//!     let concierge = Concierge::from_defaults();
//!     let reply = concierge.send_message(&[], "Tell me about Sedona").await;
//!     println!("{}", reply.text);
//! }
//! ```
//!
//! # Architecture
//!
//! Wayfarer is organized as a workspace with focused crates:
//!
//! - `wayfarer_core` - core data types (Message, Source, ChatReply, ...)
//! - `wayfarer_interface` - backend trait definitions
//! - `wayfarer_error` - error types
//! - `wayfarer_models` - the Gemini backend (REST + Live API)
//! - `wayfarer_concierge` - orchestration, fallback, intent, and triage
//!
//! This crate (`wayfarer`) re-exports everything for convenience and ships
//! the `wayfarer` CLI binary.

#![forbid(unsafe_code)]

pub use wayfarer_concierge::{
    A_RECORD_IP, CNAME_TARGET, Concierge, ConciergeConfig, CredentialConfig,
    DEGRADED_RESPONSE_TEXT, INTENT_RULES, IntentRule, LINK_INTERRUPTED_NOTICE,
    LOCAL_BUFFER_NOTICE, ModelConfig, NEWSLETTER_URI, SAGE_PERSONA, analyze_lead, analyze_review,
    classify, lead_schema, lead_trigger, local_reply, normalize_turns, review_schema,
};
pub use wayfarer_core::{
    ChatReply, ChatRequest, DEFAULT_SOURCE_TITLE, GroundedReply, Lead, LeadClass, LeadInsight,
    Message, MessageBuilder, MessageKind, Review, ReviewInsight, Role, Sentiment, Source, Turn,
    init_telemetry,
};
pub use wayfarer_error::{
    ConfigError, GeminiError, GeminiErrorKind, HttpError, JsonError, WayfarerError,
    WayfarerErrorKind, WayfarerResult,
};
pub use wayfarer_interface::{
    GeneratedImage, GeneratedVideo, ImageGeneration, JsonMode, VideoGeneration, WayfarerDriver,
};
pub use wayfarer_models::{
    GeminiClient, GeminiLiveClient, LiveEvent, LiveSession, PlaybackQueue, ScheduledBuffer,
};

mod cli;
pub use cli::{Cli, Commands};
