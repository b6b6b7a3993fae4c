//! Structured triage of reviews and inbound leads.
//!
//! Each analysis declares its expected JSON shape to the backend
//! (`responseMimeType` + `responseSchema`), parses the response strictly,
//! and merges the parsed fields into the stored record by id. On any
//! failure the target record is left unmodified apart from its in-progress
//! marker, which is cleared on every path.

use serde_json::json;
use tracing::{error, instrument};
use uuid::Uuid;

use wayfarer_core::{ChatRequest, Lead, LeadInsight, Review, ReviewInsight, Turn};
use wayfarer_error::{JsonError, WayfarerResult};
use wayfarer_interface::JsonMode;

/// Declared response shape for review analysis.
pub fn review_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": {
                "type": "STRING",
                "enum": ["positive", "neutral", "negative"]
            },
            "reply": { "type": "STRING" }
        },
        "required": ["sentiment", "reply"]
    })
}

/// Declared response shape for lead analysis.
pub fn lead_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dream_map": { "type": "STRING" },
            "classification": {
                "type": "STRING",
                "enum": ["hot", "warm", "cold"]
            },
            "score": { "type": "INTEGER" }
        },
        "required": ["dream_map", "classification", "score"]
    })
}

/// Analyze one review by id, returning the updated collection.
///
/// The target record is replaced, never mutated in place. Success merges the
/// extracted insight; failure logs and leaves the record's fields unchanged.
/// Either way the `analyzing` marker ends cleared.
#[instrument(name = "analyze_review", skip(driver, reviews))]
pub async fn analyze_review(
    driver: &dyn JsonMode,
    mut reviews: Vec<Review>,
    id: Uuid,
) -> Vec<Review> {
    let Some(index) = reviews.iter().position(|review| review.id == id) else {
        return reviews;
    };

    let outcome = request_review_insight(driver, &reviews[index]).await;

    let settled = match outcome {
        Ok(insight) => reviews[index].clone().with_insight(insight),
        Err(e) => {
            error!(error = %e, review = %id, "review analysis failed; record left unmodified");
            reviews[index].clone()
        }
    }
    .settled();

    reviews[index] = settled;
    reviews
}

async fn request_review_insight(
    driver: &dyn JsonMode,
    review: &Review,
) -> WayfarerResult<ReviewInsight> {
    let prompt = format!(
        "You triage customer reviews for a travel and wellness brand. \
Classify the sentiment and draft a short public reply in a warm, grateful \
brand voice.\n\nReviewer: {}\nReview: {}",
        review.author, review.body
    );

    let request = ChatRequest {
        turns: vec![Turn::user(prompt)],
        system_instruction: None,
        search_grounding: false,
        model: None,
    };

    let value = driver.generate_json(&request, &review_schema()).await?;
    serde_json::from_value(value)
        .map_err(|e| JsonError::new(format!("review insight: {}", e)).into())
}

/// Analyze one lead by id, returning the updated collection.
///
/// Same contract as [`analyze_review`]: replace-by-id, no partial merge,
/// `processing` cleared regardless of outcome.
#[instrument(name = "analyze_lead", skip(driver, leads))]
pub async fn analyze_lead(driver: &dyn JsonMode, mut leads: Vec<Lead>, id: Uuid) -> Vec<Lead> {
    let Some(index) = leads.iter().position(|lead| lead.id == id) else {
        return leads;
    };

    let outcome = request_lead_insight(driver, &leads[index]).await;

    let settled = match outcome {
        Ok(insight) => leads[index].clone().with_insight(insight),
        Err(e) => {
            error!(error = %e, lead = %id, "lead analysis failed; record left unmodified");
            leads[index].clone()
        }
    }
    .settled();

    leads[index] = settled;
    leads
}

async fn request_lead_insight(driver: &dyn JsonMode, lead: &Lead) -> WayfarerResult<LeadInsight> {
    let prompt = format!(
        "You triage inbound leads for a travel and wellness brand. Summarize \
what the prospect is dreaming of in one line (their dream map), classify \
their buying intent, and score it from 0 to 100.\n\nName: {}\nEmail: {}\nMessage: {}",
        lead.name, lead.email, lead.message
    );

    let request = ChatRequest {
        turns: vec![Turn::user(prompt)],
        system_instruction: None,
        search_grounding: false,
        model: None,
    };

    let value = driver.generate_json(&request, &lead_schema()).await?;
    serde_json::from_value(value)
        .map_err(|e| JsonError::new(format!("lead insight: {}", e)).into())
}
