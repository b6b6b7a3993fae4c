//! Concierge configuration.
//!
//! TOML-based configuration with bundled defaults (`include_str!` from
//! `wayfarer.toml`) merged under user overrides from the home config
//! directory and the working directory, user values taking precedence.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wayfarer_error::{ConfigError, WayfarerResult};

/// Model selection for each backend capability.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Chat model identifier
    pub chat: String,
    /// Image synthesis model identifier
    pub image: String,
    /// Video synthesis model identifier
    pub video: String,
}

/// Credential acquisition policy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialConfig {
    /// Environment variable holding the API key
    pub env_var: String,
    /// Minimum key length accepted by the sanity check
    pub min_key_length: usize,
}

/// Top-level concierge configuration.
///
/// # Examples
///
/// ```
/// use wayfarer_concierge::ConciergeConfig;
///
/// let config = ConciergeConfig::default();
/// assert_eq!(config.credentials.env_var, "GEMINI_API_KEY");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConciergeConfig {
    /// Model selection
    pub models: ModelConfig,
    /// Credential policy
    pub credentials: CredentialConfig,
}

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../wayfarer.toml");

impl Default for ConciergeConfig {
    fn default() -> Self {
        // The bundled file is the single source of default values.
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("bundled wayfarer.toml is valid")
    }
}

impl ConciergeConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    pub fn load() -> WayfarerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/wayfarer/wayfarer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("wayfarer").required(false));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_deserialize() {
        let config = ConciergeConfig::default();
        assert_eq!(config.models.chat, "gemini-2.5-flash");
        assert_eq!(config.credentials.min_key_length, 8);
    }
}
