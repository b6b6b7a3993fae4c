//! The conversation orchestrator.

use std::env;
use tracing::{debug, instrument, warn};

use wayfarer_core::{ChatReply, ChatRequest, Message};
use wayfarer_interface::WayfarerDriver;
use wayfarer_models::GeminiClient;

use crate::{ConciergeConfig, SAGE_PERSONA, local_reply, normalize_turns};
use crate::intent::lead_trigger;

/// Notice prefixed to replies produced without attempting a live call.
pub const LOCAL_BUFFER_NOTICE: &str =
    "Running on local buffer — live intel is offline.\n\n";

/// Notice prefixed to replies produced after a live call failed.
pub const LINK_INTERRUPTED_NOTICE: &str =
    "Link interrupted — falling back to local buffer.\n\n";

/// Substituted when the live channel answers with empty text.
pub const DEGRADED_RESPONSE_TEXT: &str =
    "Transmission degraded — the live channel came back empty. Ask me again in a moment.";

/// Turns a `(history, input)` pair into a single [`ChatReply`].
///
/// Chooses between a live grounded call and the local fallback, and
/// normalizes either outcome into the same shape. The contract is no-throw:
/// `send_message` always resolves to a reply, never an error.
///
/// The orchestrator holds no conversation state. History is owned by the
/// calling surface and passed in whole on every call; each request is built
/// fresh from it.
///
/// # Examples
///
/// ```no_run
/// use wayfarer_concierge::Concierge;
///
/// # #[tokio::main]
/// # async fn main() {
/// let concierge = Concierge::from_defaults();
/// let reply = concierge.send_message(&[], "Tell me about Sedona").await;
/// assert!(!reply.text.is_empty());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Concierge {
    config: ConciergeConfig,
}

impl Concierge {
    /// Create an orchestrator with an explicit configuration.
    pub fn new(config: ConciergeConfig) -> Self {
        Self { config }
    }

    /// Create an orchestrator with the bundled default configuration.
    pub fn from_defaults() -> Self {
        Self::new(ConciergeConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &ConciergeConfig {
        &self.config
    }

    /// Attempt to acquire a live backend client.
    ///
    /// Performed fresh on every call; nothing is cached between calls.
    /// Returns `None` (availability, not an error) when the credential is
    /// absent or fails the sanity check: non-empty after trim, minimum
    /// length.
    pub fn try_acquire(&self) -> Option<GeminiClient> {
        let raw = env::var(&self.config.credentials.env_var).ok()?;
        let Some(key) = usable_key(&raw, self.config.credentials.min_key_length) else {
            debug!("credential failed sanity check; using local buffer");
            return None;
        };

        GeminiClient::new(key)
            .ok()
            .map(|client| {
                client
                    .with_model_name(&self.config.models.chat)
                    .with_image_model(&self.config.models.image)
                    .with_video_model(&self.config.models.video)
            })
    }

    /// Produce one assistant reply for the given history and input.
    ///
    /// Preconditions: `input` is non-empty (enforced by the caller; empty
    /// input is a no-op upstream of this call).
    #[instrument(name = "concierge_send_message", skip(self, history, input))]
    pub async fn send_message(&self, history: &[Message], input: &str) -> ChatReply {
        match self.try_acquire() {
            None => prefixed(local_reply(input), LOCAL_BUFFER_NOTICE),
            Some(client) => self.send_via(&client, history, input).await,
        }
    }

    /// Produce one assistant reply through an explicit driver.
    ///
    /// The single error-absorption boundary: any driver failure is logged
    /// and converted to the labeled local fallback. No retries, no partial
    /// states.
    pub async fn send_via(
        &self,
        driver: &dyn WayfarerDriver,
        history: &[Message],
        input: &str,
    ) -> ChatReply {
        let request = ChatRequest {
            turns: normalize_turns(history, input),
            system_instruction: Some(SAGE_PERSONA.to_string()),
            search_grounding: true,
            model: None,
        };

        match driver.generate(&request).await {
            Ok(reply) => {
                let text = if reply.text.trim().is_empty() {
                    DEGRADED_RESPONSE_TEXT.to_string()
                } else {
                    reply.text
                };
                let lead = lead_trigger(input, &text);
                ChatReply {
                    text,
                    sources: reply.sources,
                    lead_trigger: lead,
                    local: false,
                }
            }
            Err(e) => {
                warn!(error = %e, "live call failed; falling back to local buffer");
                prefixed(local_reply(input), LINK_INTERRUPTED_NOTICE)
            }
        }
    }
}

impl Default for Concierge {
    fn default() -> Self {
        Self::from_defaults()
    }
}

/// Prefix a fallback reply with a fixed notice.
fn prefixed(mut reply: ChatReply, notice: &str) -> ChatReply {
    reply.text = format!("{notice}{}", reply.text);
    reply
}

/// The credential sanity check: non-empty after trim and long enough to be a
/// plausible key.
fn usable_key(raw: &str, min_len: usize) -> Option<&str> {
    let key = raw.trim();
    (!key.is_empty() && key.len() >= min_len).then_some(key)
}
