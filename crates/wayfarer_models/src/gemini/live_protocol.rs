//! Wire types for the Gemini Live API WebSocket protocol.
//!
//! Covers the setup handshake, realtime audio input, and the server content
//! messages the voice bridge consumes. Outbound audio is 16-bit PCM at
//! 16 kHz; inbound audio is 16-bit PCM at 24 kHz. Both travel base64-encoded.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use wayfarer_error::{GeminiError, GeminiErrorKind, GeminiResult};

/// Sample rate of outbound microphone audio.
pub const INPUT_SAMPLE_RATE: u32 = 16_000;
/// Sample rate of inbound model audio.
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;
/// MIME type tag for outbound PCM chunks.
pub const INPUT_AUDIO_MIME: &str = "audio/pcm;rate=16000";

//
// ─── CLIENT → SERVER ────────────────────────────────────────────────────────────
//

/// First message on a new connection.
#[derive(Debug, Clone, Serialize)]
pub struct SetupMessage {
    /// Session configuration
    pub setup: SetupConfig,
}

/// Session configuration sent during the handshake.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupConfig {
    /// Model resource name (e.g. "models/gemini-2.0-flash-live-001")
    pub model: String,
    /// Response modality selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<LiveGenerationConfig>,
    /// Persona text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<LiveSystemInstruction>,
}

/// Generation parameters for a live session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGenerationConfig {
    /// Modalities the server should answer with (e.g. `["AUDIO"]`)
    pub response_modalities: Vec<String>,
}

/// Persona container for the handshake.
#[derive(Debug, Clone, Serialize)]
pub struct LiveSystemInstruction {
    /// Instruction parts
    pub parts: Vec<TextPart>,
}

impl LiveSystemInstruction {
    /// Wrap a persona string in the wire shape.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![TextPart { text: text.into() }],
        }
    }
}

/// A plain text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    /// The part text
    pub text: String,
}

/// Envelope for streamed media input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeInputMessage {
    /// The streamed chunks
    pub realtime_input: RealtimeInput,
}

/// Streamed media input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeInput {
    /// Audio chunks in capture order
    pub media_chunks: Vec<MediaChunk>,
}

/// One base64-encoded media chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaChunk {
    /// MIME type with rate parameter
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

impl MediaChunk {
    /// Encode a slice of 16-bit PCM samples as an outbound chunk.
    pub fn from_pcm16(samples: &[i16]) -> Self {
        let mut bytes = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        Self {
            mime_type: INPUT_AUDIO_MIME.to_string(),
            data: BASE64.encode(bytes),
        }
    }
}

//
// ─── SERVER → CLIENT ────────────────────────────────────────────────────────────
//

/// Any message the server can send.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerMessage {
    /// Handshake confirmation
    pub setup_complete: Option<SetupComplete>,
    /// Model output
    pub server_content: Option<ServerContent>,
    /// Server-initiated disconnect
    pub go_away: Option<GoAway>,
}

/// Handshake confirmation payload (empty).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupComplete {}

/// Server-initiated disconnect payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoAway {
    /// Why the server is disconnecting
    pub reason: String,
}

/// Model output within a live session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerContent {
    /// Incremental model turn content
    pub model_turn: Option<ModelTurn>,
    /// Whether the current model turn has finished
    pub turn_complete: bool,
    /// The model was interrupted by new user speech; discard queued audio
    pub interrupted: bool,
}

/// Incremental model turn content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelTurn {
    /// Content parts
    pub parts: Vec<LivePart>,
}

/// One part of a live model turn.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LivePart {
    /// Text content
    pub text: Option<String>,
    /// Inline audio content
    pub inline_data: Option<MediaChunk>,
}

impl ServerMessage {
    /// Whether this message confirms the setup handshake.
    pub fn is_setup_complete(&self) -> bool {
        self.setup_complete.is_some()
    }

    /// Whether the server is disconnecting.
    pub fn is_go_away(&self) -> bool {
        self.go_away.is_some()
    }

    /// Whether the model was interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.server_content
            .as_ref()
            .is_some_and(|content| content.interrupted)
    }

    /// Whether the current model turn finished.
    pub fn is_turn_complete(&self) -> bool {
        self.server_content
            .as_ref()
            .is_some_and(|content| content.turn_complete)
    }

    /// Concatenated text parts, if any.
    pub fn extract_text(&self) -> Option<String> {
        let content = self.server_content.as_ref()?;
        let turn = content.model_turn.as_ref()?;
        let text: String = turn
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Decoded audio payloads, in arrival order.
    pub fn extract_audio(&self) -> GeminiResult<Vec<Vec<u8>>> {
        let Some(content) = &self.server_content else {
            return Ok(Vec::new());
        };
        let Some(turn) = &content.model_turn else {
            return Ok(Vec::new());
        };
        turn.parts
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .map(|chunk| {
                BASE64
                    .decode(chunk.data.as_bytes())
                    .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcm_chunk_round_trips() {
        let samples: Vec<i16> = vec![0, 1, -1, i16::MAX, i16::MIN];
        let chunk = MediaChunk::from_pcm16(&samples);
        assert_eq!(chunk.mime_type, INPUT_AUDIO_MIME);

        let bytes = BASE64.decode(chunk.data.as_bytes()).unwrap();
        assert_eq!(bytes.len(), samples.len() * 2);
        let decoded: Vec<i16> = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn interrupted_flag_is_read_from_server_content() {
        let raw = r#"{"serverContent": {"interrupted": true}}"#;
        let message: ServerMessage = serde_json::from_str(raw).unwrap();
        assert!(message.is_interrupted());
        assert!(!message.is_turn_complete());
    }

    #[test]
    fn audio_parts_decode_in_order() {
        let first = BASE64.encode([1u8, 0, 2, 0]);
        let second = BASE64.encode([3u8, 0]);
        let raw = format!(
            r#"{{"serverContent": {{"modelTurn": {{"parts": [
                {{"inlineData": {{"mimeType": "audio/pcm;rate=24000", "data": "{first}"}}}},
                {{"inlineData": {{"mimeType": "audio/pcm;rate=24000", "data": "{second}"}}}}
            ]}}}}}}"#
        );
        let message: ServerMessage = serde_json::from_str(&raw).unwrap();
        let audio = message.extract_audio().unwrap();
        assert_eq!(audio, vec![vec![1, 0, 2, 0], vec![3, 0]]);
    }

    #[test]
    fn setup_message_serializes_camel_case() {
        let setup = SetupMessage {
            setup: SetupConfig {
                model: "models/gemini-2.0-flash-live-001".to_string(),
                generation_config: Some(LiveGenerationConfig {
                    response_modalities: vec!["AUDIO".to_string()],
                }),
                system_instruction: Some(LiveSystemInstruction::from_text("persona")),
            },
        };
        let value = serde_json::to_value(&setup).unwrap();
        assert!(value["setup"]["generationConfig"]["responseModalities"].is_array());
        assert!(value["setup"]["systemInstruction"]["parts"][0]["text"].is_string());
    }
}
