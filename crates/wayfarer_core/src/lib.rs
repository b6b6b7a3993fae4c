//! Core data types for the Wayfarer concierge library.
//!
//! This crate provides the foundation data types used across all Wayfarer interfaces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod reply;
mod request;
mod role;
mod source;
mod telemetry;
mod triage;

pub use message::{Message, MessageBuilder, MessageKind};
pub use reply::ChatReply;
pub use request::{ChatRequest, ChatRequestBuilder, GroundedReply, Turn};
pub use role::Role;
pub use source::{DEFAULT_SOURCE_TITLE, Source};
pub use telemetry::init_telemetry;
pub use triage::{Lead, LeadClass, LeadInsight, Review, ReviewInsight, Sentiment};
