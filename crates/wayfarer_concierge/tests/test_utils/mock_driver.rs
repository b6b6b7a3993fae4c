//! Mock backend driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wayfarer_core::{ChatRequest, GroundedReply, Source};
use wayfarer_error::{GeminiError, GeminiErrorKind, JsonError, WayfarerResult};
use wayfarer_interface::{JsonMode, WayfarerDriver};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// `generate` succeeds with this reply; `generate_json` parses its text
    Reply(GroundedReply),
    /// `generate_json` succeeds with this value; `generate` returns its string form
    Json(serde_json::Value),
    /// Every call fails with the specified error
    Error(GeminiErrorKind),
}

/// Mock driver for testing orchestration without API calls.
///
/// Allows tests to control responses and verify behavior, including how many
/// calls were issued.
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
}

impl MockDriver {
    /// A driver whose `generate` always succeeds with the given text.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Reply(GroundedReply {
            text: text.into(),
            sources: Vec::new(),
        }))
    }

    /// A driver whose `generate` succeeds with text and sources.
    pub fn new_reply(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self::new_with_behavior(MockBehavior::Reply(GroundedReply {
            text: text.into(),
            sources,
        }))
    }

    /// A driver whose `generate_json` succeeds with the given value.
    pub fn new_json(value: serde_json::Value) -> Self {
        Self::new_with_behavior(MockBehavior::Json(value))
    }

    /// A driver that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// A driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of calls issued through either trait method.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn record_call(&self) {
        *self.call_count.lock().unwrap() += 1;
    }
}

#[async_trait]
impl WayfarerDriver for MockDriver {
    async fn generate(&self, _req: &ChatRequest) -> WayfarerResult<GroundedReply> {
        self.record_call();
        match &self.behavior {
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Json(value) => Ok(GroundedReply {
                text: value.to_string(),
                sources: Vec::new(),
            }),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl JsonMode for MockDriver {
    async fn generate_json(
        &self,
        _req: &ChatRequest,
        _schema: &serde_json::Value,
    ) -> WayfarerResult<serde_json::Value> {
        self.record_call();
        match &self.behavior {
            MockBehavior::Json(value) => Ok(value.clone()),
            MockBehavior::Reply(reply) => serde_json::from_str(&reply.text)
                .map_err(|e| JsonError::new(format!("mock payload: {}", e)).into()),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}
