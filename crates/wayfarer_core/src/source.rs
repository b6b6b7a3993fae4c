//! Citation types for grounded responses.

use serde::{Deserialize, Serialize};

/// Display label used when the API omits a citation title.
pub const DEFAULT_SOURCE_TITLE: &str = "Vetted Intel";

/// A grounding citation attached to an assistant message.
///
/// Invariant: `uri` is non-empty. Chunks without a usable URI are dropped at
/// the protocol boundary instead of constructing a `Source`.
///
/// # Examples
///
/// ```
/// use wayfarer_core::{DEFAULT_SOURCE_TITLE, Source};
///
/// let titled = Source::new("https://example.com", Some("Example".to_string()));
/// assert_eq!(titled.title, "Example");
///
/// let untitled = Source::new("https://example.com", None);
/// assert_eq!(untitled.title, DEFAULT_SOURCE_TITLE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Absolute URL of the cited page
    pub uri: String,
    /// Display label, never empty
    pub title: String,
}

impl Source {
    /// Create a source, substituting the default title when the API gave none.
    pub fn new(uri: impl Into<String>, title: Option<String>) -> Self {
        let title = match title {
            Some(t) if !t.trim().is_empty() => t,
            _ => DEFAULT_SOURCE_TITLE.to_string(),
        };
        Self {
            uri: uri.into(),
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_gets_placeholder() {
        let source = Source::new("https://example.com", Some("   ".to_string()));
        assert_eq!(source.title, DEFAULT_SOURCE_TITLE);
    }
}
