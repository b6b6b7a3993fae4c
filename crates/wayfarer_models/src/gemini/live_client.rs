//! WebSocket client for the Gemini Live API.
//!
//! - [`GeminiLiveClient`] - factory for WebSocket sessions
//! - [`LiveSession`] - active duplex connection: outbound PCM chunks in,
//!   [`LiveEvent`]s out
//!
//! # Example
//!
//! ```no_run
//! use wayfarer_models::{GeminiLiveClient, LiveEvent};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiLiveClient::from_env()?;
//! let mut session = client
//!     .connect("models/gemini-2.0-flash-live-001", Some("You are a travel concierge."))
//!     .await?;
//!
//! session.send_audio_chunk(&[0i16; 1600]).await?;
//! while let Some(event) = session.next_event().await? {
//!     if let LiveEvent::TurnComplete = event {
//!         break;
//!     }
//! }
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

use futures_util::{SinkExt, StreamExt};
use std::env;
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use tracing::{debug, error, info, instrument, trace, warn};

use wayfarer_error::{GeminiError, GeminiErrorKind, GeminiResult};

use super::live_protocol::*;

/// WebSocket endpoint for the Gemini Live API.
const LIVE_API_ENDPOINT: &str = "wss://generativelanguage.googleapis.com/ws/google.ai.generativelanguage.v1beta.GenerativeService.BidiGenerateContent";

/// Client for creating Gemini Live API WebSocket sessions.
#[derive(Clone)]
pub struct GeminiLiveClient {
    api_key: String,
}

impl GeminiLiveClient {
    /// Create a Live API client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> GeminiResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }
        Ok(Self { api_key })
    }

    /// Create a Live API client from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_live_client_from_env")]
    pub fn from_env() -> GeminiResult<Self> {
        let api_key =
            env::var("GEMINI_API_KEY").map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::new(api_key)
    }

    /// Connect to the Live API and perform the setup handshake.
    ///
    /// Requests audio response modality; the optional persona is sent as the
    /// session system instruction.
    #[instrument(name = "gemini_live_client_connect", skip(self, persona))]
    pub async fn connect(&self, model: &str, persona: Option<&str>) -> GeminiResult<LiveSession> {
        LiveSession::new(&self.api_key, model, persona).await
    }
}

/// An event surfaced by an active live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveEvent {
    /// Decoded 24 kHz PCM audio, ready for scheduling
    Audio(Vec<u8>),
    /// Incremental text content
    Text(String),
    /// The model was interrupted; discard scheduled playback
    Interrupted,
    /// The current model turn finished
    TurnComplete,
}

/// Active WebSocket session with the Gemini Live API.
pub struct LiveSession {
    ws_stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    model: String,
    /// Events decoded from the current server message, drained before the
    /// next read
    pending: std::collections::VecDeque<LiveEvent>,
}

impl LiveSession {
    /// Create a new Live API session.
    ///
    /// Performs WebSocket connection and setup handshake.
    async fn new(api_key: &str, model: &str, persona: Option<&str>) -> GeminiResult<Self> {
        info!("Connecting to Gemini Live API for model: {}", model);

        let url = format!("{}?key={}", LIVE_API_ENDPOINT, api_key);

        let (ws_stream, _) = connect_async(&url).await.map_err(|e| {
            error!("WebSocket connection failed: {}", e);
            GeminiError::new(GeminiErrorKind::WebSocketConnection(e.to_string()))
        })?;

        debug!("WebSocket connection established");

        let mut session = Self {
            ws_stream,
            model: model.to_string(),
            pending: std::collections::VecDeque::new(),
        };

        session.setup_handshake(model, persona).await?;

        info!("Live API session established for model: {}", model);
        Ok(session)
    }

    /// Perform the setup handshake with the server.
    ///
    /// Sends the setup message and waits for `setupComplete` confirmation.
    async fn setup_handshake(&mut self, model: &str, persona: Option<&str>) -> GeminiResult<()> {
        debug!("Sending setup message");

        let setup = SetupMessage {
            setup: SetupConfig {
                model: model.to_string(),
                generation_config: Some(LiveGenerationConfig {
                    response_modalities: vec!["AUDIO".to_string()],
                }),
                system_instruction: persona.map(LiveSystemInstruction::from_text),
            },
        };

        let json = serde_json::to_string(&setup).map_err(|e| {
            error!("Failed to serialize setup message: {}", e);
            GeminiError::new(GeminiErrorKind::WebSocketHandshake(format!(
                "Serialization error: {}",
                e
            )))
        })?;

        trace!("Setup message JSON: {}", json);

        self.ws_stream
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| {
                error!("Failed to send setup message: {}", e);
                GeminiError::new(GeminiErrorKind::WebSocketHandshake(format!(
                    "Send error: {}",
                    e
                )))
            })?;

        debug!("Setup message sent, waiting for setupComplete");

        while let Some(msg_result) = self.ws_stream.next().await {
            let msg = msg_result.map_err(|e| {
                error!("Error receiving setup response: {}", e);
                GeminiError::new(GeminiErrorKind::WebSocketHandshake(format!(
                    "Receive error: {}",
                    e
                )))
            })?;

            if let Message::Text(text) = msg {
                trace!("Received message: {}", text);

                let server_msg: ServerMessage = serde_json::from_str(&text).map_err(|e| {
                    error!("Failed to parse server message: {}", e);
                    GeminiError::new(GeminiErrorKind::InvalidServerMessage(format!(
                        "Parse error: {}",
                        e
                    )))
                })?;

                if server_msg.is_setup_complete() {
                    debug!("Received setupComplete");
                    return Ok(());
                } else if server_msg.is_go_away() {
                    let reason = server_msg
                        .go_away
                        .map(|ga| ga.reason)
                        .unwrap_or_else(|| "unknown".to_string());
                    error!("Server sent goAway during setup: {}", reason);
                    return Err(GeminiError::new(GeminiErrorKind::ServerDisconnect(reason)));
                } else {
                    warn!("Unexpected message during setup: {:?}", server_msg);
                }
            }
        }

        error!("WebSocket closed before setupComplete received");
        Err(GeminiError::new(GeminiErrorKind::WebSocketHandshake(
            "Connection closed before setup complete".to_string(),
        )))
    }

    /// Stream one chunk of captured 16 kHz PCM audio to the model.
    #[instrument(name = "live_session_send_audio", skip(self, samples))]
    pub async fn send_audio_chunk(&mut self, samples: &[i16]) -> GeminiResult<()> {
        let message = RealtimeInputMessage {
            realtime_input: RealtimeInput {
                media_chunks: vec![MediaChunk::from_pcm16(samples)],
            },
        };

        let json = serde_json::to_string(&message).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Serialization error: {}",
                e
            )))
        })?;

        self.ws_stream
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| {
                error!("Failed to send audio chunk: {}", e);
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Send error: {}", e)))
            })
    }

    /// Receive the next session event.
    ///
    /// Returns `Ok(None)` when the server closes the connection. A single
    /// server message can carry several events (interruption plus audio);
    /// they are surfaced one at a time, interruption first so the caller can
    /// flush its playback queue before scheduling anything new.
    #[instrument(name = "live_session_next_event", skip(self))]
    pub async fn next_event(&mut self) -> GeminiResult<Option<LiveEvent>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }

            let Some(msg_result) = self.ws_stream.next().await else {
                return Ok(None);
            };

            let msg = msg_result.map_err(|e| {
                error!("Error receiving live message: {}", e);
                GeminiError::new(GeminiErrorKind::StreamInterrupted(e.to_string()))
            })?;

            match msg {
                Message::Text(text) => {
                    trace!("Received live message: {}", text);

                    let server_msg: ServerMessage = serde_json::from_str(&text).map_err(|e| {
                        error!("Failed to parse server message: {}", e);
                        GeminiError::new(GeminiErrorKind::InvalidServerMessage(format!(
                            "Parse error: {}",
                            e
                        )))
                    })?;

                    if server_msg.is_go_away() {
                        let reason = server_msg
                            .go_away
                            .map(|ga| ga.reason)
                            .unwrap_or_else(|| "unknown".to_string());
                        error!("Server disconnecting: {}", reason);
                        return Err(GeminiError::new(GeminiErrorKind::ServerDisconnect(reason)));
                    }

                    if server_msg.is_interrupted() {
                        self.pending.push_back(LiveEvent::Interrupted);
                    }
                    if let Some(text) = server_msg.extract_text() {
                        self.pending.push_back(LiveEvent::Text(text));
                    }
                    for audio in server_msg.extract_audio()? {
                        self.pending.push_back(LiveEvent::Audio(audio));
                    }
                    if server_msg.is_turn_complete() {
                        self.pending.push_back(LiveEvent::TurnComplete);
                    }
                }
                Message::Close(_) => {
                    warn!("WebSocket closed by server");
                    return Ok(None);
                }
                _ => {}
            }
        }
    }

    /// Close the WebSocket session gracefully.
    #[instrument(name = "live_session_close", skip(self))]
    pub async fn close(mut self) -> GeminiResult<()> {
        debug!("Closing WebSocket session");

        self.ws_stream.close(None).await.map_err(|e| {
            error!("Error closing WebSocket: {}", e);
            GeminiError::new(GeminiErrorKind::WebSocketConnection(format!(
                "Close error: {}",
                e
            )))
        })?;

        info!("WebSocket session closed");
        Ok(())
    }

    /// Get the model name for this session.
    pub fn model(&self) -> &str {
        &self.model
    }
}
