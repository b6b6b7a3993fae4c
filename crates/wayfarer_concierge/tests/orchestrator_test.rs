// Tests for the conversation orchestrator.
//
// The orchestrator's contract is no-throw: every combination of
// available/unavailable backend and well-formed/malformed response resolves
// to a renderable ChatReply. These tests drive the seams directly: the
// mock driver for the live path, an absent credential for the offline path.

mod test_utils;

use test_utils::MockDriver;
use wayfarer_concierge::{
    Concierge, ConciergeConfig, DEGRADED_RESPONSE_TEXT, LINK_INTERRUPTED_NOTICE,
    LOCAL_BUFFER_NOTICE, NEWSLETTER_URI,
};
use wayfarer_core::{Message, Source};
use wayfarer_error::GeminiErrorKind;

/// A config whose credential variable is never set, forcing the offline path.
fn offline_config() -> ConciergeConfig {
    let mut config = ConciergeConfig::default();
    config.credentials.env_var = "WAYFARER_TEST_ABSENT_KEY".to_string();
    config
}

#[tokio::test]
async fn unavailable_backend_yields_labeled_local_reply() {
    let concierge = Concierge::new(offline_config());

    let reply = concierge.send_message(&[], "Tell me about Sedona").await;

    assert!(reply.local);
    assert!(!reply.text.is_empty());
    assert!(reply.text.starts_with(LOCAL_BUFFER_NOTICE));
    assert!(reply.text.contains("Cathedral Rock"));
    assert_eq!(reply.sources.len(), 1);
    assert_eq!(reply.sources[0].uri, NEWSLETTER_URI);
}

#[tokio::test]
async fn unavailable_backend_embeds_dns_constants_for_setup_questions() {
    let concierge = Concierge::new(offline_config());

    let reply = concierge
        .send_message(&[], "How do I set up my subdomain?")
        .await;

    assert!(reply.local);
    assert!(reply.text.contains("cname.vercel-dns.com"));
    assert!(reply.text.contains("76.76.21.21"));
}

#[tokio::test]
async fn live_reply_passes_through_text_and_sources() {
    let concierge = Concierge::new(offline_config());
    let driver = MockDriver::new_reply(
        "Sedona in October is quiet and golden.",
        vec![Source::new("https://a.example", Some("Alpha".to_string()))],
    );

    let reply = concierge.send_via(&driver, &[], "When should I visit Sedona?").await;

    assert!(!reply.local);
    assert_eq!(reply.text, "Sedona in October is quiet and golden.");
    assert_eq!(reply.sources.len(), 1);
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn membership_exchange_triggers_lead_capture() {
    let concierge = Concierge::new(offline_config());
    let driver = MockDriver::new_text("You can join the inner circle any time.");

    let history = vec![Message::user("membership info")];
    let reply = concierge.send_via(&driver, &history, "membership info").await;

    assert!(reply.lead_trigger);
    assert!(!reply.local);
}

#[tokio::test]
async fn neutral_exchange_does_not_trigger_lead_capture() {
    let concierge = Concierge::new(offline_config());
    let driver = MockDriver::new_text("Pack layers; desert nights run cold.");

    let reply = concierge.send_via(&driver, &[], "what should I pack?").await;

    assert!(!reply.lead_trigger);
}

#[tokio::test]
async fn empty_live_text_becomes_the_degraded_placeholder() {
    let concierge = Concierge::new(offline_config());
    let driver = MockDriver::new_text("   ");

    let reply = concierge.send_via(&driver, &[], "hello").await;

    assert_eq!(reply.text, DEGRADED_RESPONSE_TEXT);
    assert!(!reply.text.is_empty());
    assert!(!reply.local);
}

#[tokio::test]
async fn failed_live_call_falls_back_with_link_interrupted_notice() {
    let concierge = Concierge::new(offline_config());
    let driver = MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    });

    let reply = concierge.send_via(&driver, &[], "Tell me about Sedona").await;

    assert!(reply.local);
    assert!(reply.text.starts_with(LINK_INTERRUPTED_NOTICE));
    assert!(reply.text.contains("Cathedral Rock"));
}

#[tokio::test]
async fn every_driver_behavior_resolves_to_a_reply() {
    // the no-throw property: send_via has no error channel at all, so the
    // assertion is that every behavior still yields renderable text
    let concierge = Concierge::new(offline_config());

    let drivers = vec![
        MockDriver::new_text("fine"),
        MockDriver::new_text(""),
        MockDriver::new_error(GeminiErrorKind::ApiRequest("boom".to_string())),
        MockDriver::new_error(GeminiErrorKind::InvalidResponse("garbage".to_string())),
    ];

    for driver in &drivers {
        let reply = concierge.send_via(driver, &[], "anything").await;
        assert!(!reply.text.is_empty());
    }
}

#[tokio::test]
async fn fallback_is_deterministic() {
    let concierge = Concierge::new(offline_config());

    let first = concierge.send_message(&[], "somewhere warm?").await;
    let second = concierge.send_message(&[], "somewhere warm?").await;

    assert_eq!(first, second);
}
