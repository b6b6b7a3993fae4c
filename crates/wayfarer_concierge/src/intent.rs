//! Intent-trigger detection.
//!
//! A coarse keyword heuristic, kept as an explicit ordered rule table so the
//! rule set is independently testable and swappable. Matching is
//! case-insensitive substring search over the concatenation of the user
//! input and the assistant reply.

use wayfarer_core::MessageKind;

/// One entry of the intent rule table.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// Any of these substrings fires the rule
    pub keywords: &'static [&'static str],
    /// The rendering tag applied when the rule fires
    pub kind: MessageKind,
}

/// Ordered intent rules; first match wins.
pub const INTENT_RULES: &[IntentRule] = &[IntentRule {
    keywords: &[
        "membership",
        "join",
        "access",
        "email",
        "sage",
        "apply",
        "sign up",
        "waitlist",
    ],
    kind: MessageKind::LeadCapture,
}];

/// Classify a text against the rule table.
///
/// Returns [`MessageKind::Text`] when no rule fires.
pub fn classify(text: &str) -> MessageKind {
    let needle = text.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| needle.contains(keyword)))
        .map(|rule| rule.kind)
        .unwrap_or(MessageKind::Text)
}

/// Whether a turn should present the lead-capture affordance.
///
/// Evaluated over both sides of the exchange: a reply inviting the reader to
/// "join" triggers capture even when the question did not.
pub fn lead_trigger(input: &str, reply: &str) -> bool {
    classify(&format!("{input} {reply}")) == MessageKind::LeadCapture
}
