//! Request and response types for grounded chat generation.

use crate::{Role, Source};
use serde::{Deserialize, Serialize};

/// A normalized role-tagged turn, ready for the wire.
///
/// Unlike [`crate::Message`], a `Turn` carries no presentation metadata:
/// normalization strips timestamps, sources, and rendering tags before a
/// request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The speaker of this turn
    pub role: Role,
    /// The turn text
    pub text: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// A fully-specified chat generation request.
///
/// Every request is built fresh from the complete passed-in history; no
/// server-side session state is assumed.
///
/// # Examples
///
/// ```
/// use wayfarer_core::{ChatRequest, Turn};
///
/// let request = ChatRequest::builder()
///     .turns(vec![Turn::user("Hello!")])
///     .system_instruction(Some("You are a travel concierge.".to_string()))
///     .search_grounding(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.turns.len(), 1);
/// assert!(request.search_grounding);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct ChatRequest {
    /// Normalized conversation turns, oldest first
    pub turns: Vec<Turn>,
    /// Fixed persona text sent as the system instruction
    pub system_instruction: Option<String>,
    /// Whether to enable the web-search grounding tool
    pub search_grounding: bool,
    /// Model identifier override
    pub model: Option<String>,
}

impl ChatRequest {
    /// Creates a new request builder.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A grounded generation result from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedReply {
    /// Generated text, possibly empty when the model returned no parts
    pub text: String,
    /// Grounding citations in API order, not deduplicated
    pub sources: Vec<Source>,
}
