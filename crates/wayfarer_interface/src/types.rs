//! Shared types for backend capabilities.

use serde::{Deserialize, Serialize};

/// A synthesized image returned inline by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// MIME type of the image bytes
    pub mime: String,
    /// Decoded image bytes
    pub data: Vec<u8>,
}

/// A synthesized video, delivered as a download URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    /// MIME type reported by the backend
    pub mime: String,
    /// Download URI for the finished video
    pub uri: String,
}
