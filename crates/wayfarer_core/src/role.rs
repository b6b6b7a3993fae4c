//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The speaker of a conversational turn.
///
/// Some transcripts tag the non-user speaker as `"model"`, others as
/// `"assistant"`. Both deserialize to [`Role::Assistant`]; the alias never
/// survives past this boundary.
///
/// # Examples
///
/// ```
/// use wayfarer_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // The "model" alias collapses into Assistant
/// let parsed: Role = serde_json::from_str("\"model\"").unwrap();
/// assert_eq!(parsed, Role::Assistant);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    System,
    /// User messages are from the human
    User,
    /// Assistant messages are from the AI
    #[serde(alias = "model")]
    Assistant,
}
