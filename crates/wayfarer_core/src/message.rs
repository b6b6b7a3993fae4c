//! Message types for conversation history.

use crate::{Role, Source};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendering classification for an assistant message.
///
/// The tag is set by intent detection and consumed by the UI to alter
/// presentation (e.g. show a lead-capture form). It carries no other
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    /// Ordinary conversational text
    #[default]
    Text,
    /// The reply should be accompanied by a contact-capture affordance
    LeadCapture,
    /// A confirmation state after a successful capture
    Success,
}

/// One turn of conversation history.
///
/// Messages are append-only: a history entry is never mutated after creation.
///
/// # Examples
///
/// ```
/// use wayfarer_core::{Message, MessageKind, Role};
///
/// let message = Message::user("Where should I go in October?");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.kind, MessageKind::Text);
/// assert!(message.sources.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The message text
    pub content: String,
    /// Creation time, informational only
    #[builder(default = "Utc::now()")]
    pub timestamp: DateTime<Utc>,
    /// Grounding citations (assistant messages only)
    #[builder(default)]
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Rendering classification
    #[builder(default)]
    #[serde(default)]
    pub kind: MessageKind,
}

impl Message {
    /// Convenience constructor for a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
            kind: MessageKind::Text,
        }
    }

    /// Convenience constructor for an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
            kind: MessageKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let message = MessageBuilder::default()
            .role(Role::Assistant)
            .content("hello")
            .build()
            .unwrap();
        assert!(message.sources.is_empty());
        assert_eq!(message.kind, MessageKind::Text);
    }

    #[test]
    fn kind_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&MessageKind::LeadCapture).unwrap(),
            "\"lead-capture\""
        );
    }
}
