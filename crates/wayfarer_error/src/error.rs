//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, HttpError, JsonError};

/// This is the foundation error enum shared across the Wayfarer crates.
///
/// # Examples
///
/// ```
/// use wayfarer_error::{WayfarerError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: WayfarerError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WayfarerErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini backend error
    #[from(GeminiError)]
    Gemini(GeminiError),
}

/// Wayfarer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use wayfarer_error::{WayfarerResult, ConfigError};
///
/// fn might_fail() -> WayfarerResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Wayfarer Error: {}", _0)]
pub struct WayfarerError(Box<WayfarerErrorKind>);

impl WayfarerError {
    /// Create a new error from a kind.
    pub fn new(kind: WayfarerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WayfarerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to WayfarerErrorKind
impl<T> From<T> for WayfarerError
where
    T: Into<WayfarerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Wayfarer operations.
///
/// # Examples
///
/// ```
/// use wayfarer_error::{WayfarerResult, HttpError};
///
/// fn fetch_data() -> WayfarerResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type WayfarerResult<T> = std::result::Result<T, WayfarerError>;
