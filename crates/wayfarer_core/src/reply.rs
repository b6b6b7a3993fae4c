//! The uniform orchestrator result shape.

use crate::Source;
use serde::{Deserialize, Serialize};

/// The single result shape the orchestrator returns to its caller,
/// regardless of whether the live backend or the local fallback produced it.
///
/// Invariant: `text` is never empty; every branch substitutes a fixed
/// placeholder before returning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant text to render
    pub text: String,
    /// Grounding citations, empty on the fallback path
    pub sources: Vec<Source>,
    /// Whether the UI should present a lead-capture affordance
    pub lead_trigger: bool,
    /// True when the local fallback produced this reply
    pub local: bool,
}
