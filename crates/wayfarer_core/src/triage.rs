//! Records triaged by the structured-extraction features.
//!
//! Reviews and inbound leads follow the same lifecycle: a record is created
//! from raw inbound data, an analysis pass asks the backend for
//! schema-conformant JSON, and the parsed fields are merged by producing a
//! replacement record. Stored records are never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentiment classification of a customer review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favorable
    Positive,
    /// Mixed or indifferent
    Neutral,
    /// Unfavorable
    Negative,
}

/// The fields the backend extracts from a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInsight {
    /// Overall sentiment of the review
    pub sentiment: Sentiment,
    /// A suggested public reply in the brand voice
    pub reply: String,
}

/// A customer review awaiting or holding triage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Stable record identifier
    pub id: Uuid,
    /// Reviewer display name
    pub author: String,
    /// Raw review text
    pub body: String,
    /// When the review arrived
    pub received_at: DateTime<Utc>,
    /// Extracted sentiment, absent until analyzed
    pub sentiment: Option<Sentiment>,
    /// Suggested reply, absent until analyzed
    pub suggested_reply: Option<String>,
    /// In-progress UI marker; always cleared when an analysis settles
    #[serde(default)]
    pub analyzing: bool,
}

impl Review {
    /// Create a fresh, unanalyzed review record.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            body: body.into(),
            received_at: Utc::now(),
            sentiment: None,
            suggested_reply: None,
            analyzing: false,
        }
    }

    /// Produce a replacement record with the insight fields merged.
    pub fn with_insight(mut self, insight: ReviewInsight) -> Self {
        self.sentiment = Some(insight.sentiment);
        self.suggested_reply = Some(insight.reply);
        self
    }

    /// Produce a replacement record with the in-progress marker cleared.
    pub fn settled(mut self) -> Self {
        self.analyzing = false;
        self
    }
}

/// Pipeline classification of an inbound lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadClass {
    /// Ready to convert
    Hot,
    /// Interested, needs nurturing
    Warm,
    /// Low intent
    Cold,
}

/// The fields the backend extracts from a raw lead message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInsight {
    /// A one-line summary of what the prospect is dreaming of
    pub dream_map: String,
    /// Pipeline classification
    pub classification: LeadClass,
    /// Intent score, 0-100
    pub score: u8,
}

/// An inbound lead awaiting or holding triage results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Stable record identifier
    pub id: Uuid,
    /// Prospect name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Raw inbound message
    pub message: String,
    /// When the lead arrived
    pub received_at: DateTime<Utc>,
    /// Extracted summary, absent until analyzed
    pub dream_map: Option<String>,
    /// Pipeline classification, absent until analyzed
    pub classification: Option<LeadClass>,
    /// Intent score, absent until analyzed
    pub score: Option<u8>,
    /// In-progress UI marker; always cleared when an analysis settles
    #[serde(default)]
    pub processing: bool,
}

impl Lead {
    /// Create a fresh, unprocessed lead record.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            message: message.into(),
            received_at: Utc::now(),
            dream_map: None,
            classification: None,
            score: None,
            processing: false,
        }
    }

    /// Produce a replacement record with the insight fields merged.
    pub fn with_insight(mut self, insight: LeadInsight) -> Self {
        self.dream_map = Some(insight.dream_map);
        self.classification = Some(insight.classification);
        self.score = Some(insight.score);
        self
    }

    /// Produce a replacement record with the in-progress marker cleared.
    pub fn settled(mut self) -> Self {
        self.processing = false;
        self
    }
}
