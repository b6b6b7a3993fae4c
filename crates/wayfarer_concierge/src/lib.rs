//! Conversation orchestration and graceful degradation for Wayfarer.
//!
//! The [`Concierge`] turns a `(history, input)` pair into a single
//! [`wayfarer_core::ChatReply`], transparently choosing between a live
//! grounded backend call and the deterministic local fallback. Its public
//! operations never fail: configuration absence and remote failure both
//! resolve to a labeled fallback reply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fallback;
mod intent;
mod normalize;
mod orchestrator;
mod persona;
mod triage;

pub use config::{ConciergeConfig, CredentialConfig, ModelConfig};
pub use fallback::{A_RECORD_IP, CNAME_TARGET, NEWSLETTER_URI, local_reply};
pub use intent::{INTENT_RULES, IntentRule, classify, lead_trigger};
pub use normalize::normalize_turns;
pub use orchestrator::{
    Concierge, DEGRADED_RESPONSE_TEXT, LINK_INTERRUPTED_NOTICE, LOCAL_BUFFER_NOTICE,
};
pub use persona::SAGE_PERSONA;
pub use triage::{analyze_lead, analyze_review, lead_schema, review_schema};
