//! Deterministic local fallback responder.
//!
//! Used whenever the live collaborator is unreachable, unauthenticated, or
//! errors. A pure function of the input string: lower-case the input, walk an
//! ordered rule table, first match wins. Specific rules precede the generic
//! fallthrough, and evaluation order must be preserved.

use wayfarer_core::{ChatReply, Source};

/// The brand newsletter, cited by the canned destination and fallthrough replies.
pub const NEWSLETTER_URI: &str = "https://healthandtravels.beehiiv.com";

/// CNAME target for subdomain setup, embedded verbatim in the setup reply.
pub const CNAME_TARGET: &str = "cname.vercel-dns.com";

/// Apex A-record IP for domain setup, embedded verbatim in the setup reply.
pub const A_RECORD_IP: &str = "76.76.21.21";

/// One entry of the fallback rule table.
struct FallbackRule {
    /// Any of these substrings (against lower-cased input) fires the rule
    keywords: &'static [&'static str],
    /// Builds the canned reply
    reply: fn() -> (String, Vec<Source>),
}

/// Ordered rule table; the final entry has no keywords and always matches.
const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["sedona", "red rock", "arizona"],
        reply: sedona_reply,
    },
    FallbackRule {
        keywords: &["subdomain", "cname", "dns", "domain", "deploy", "set up", "setup"],
        reply: setup_reply,
    },
    FallbackRule {
        keywords: &[],
        reply: standing_by_reply,
    },
];

fn sedona_reply() -> (String, Vec<Source>) {
    let text = "Sedona is our signature reset. Three days works beautifully: \
Day 1, land soft — check into a casita near Oak Creek, walk the Airport Mesa \
loop at golden hour, early night. Day 2, the deep work — sunrise at Cathedral \
Rock, a vortex sit if you're open to it, afternoon spa soak, journaling over \
prickly-pear tea. Day 3, integration — Boynton Canyon trail before the crowds, \
then a slow drive out through Red Rock Scenic Byway. The full guide with \
bookable stays is in the newsletter archive."
        .to_string();
    (text, vec![Source::new(NEWSLETTER_URI, None)])
}

fn setup_reply() -> (String, Vec<Source>) {
    let text = format!(
        "Wiring up your domain is a two-record job. Point the subdomain with a \
CNAME record to {CNAME_TARGET}, and the apex with an A record to {A_RECORD_IP}. \
Propagation usually lands within the hour; give it a hard refresh before \
worrying."
    );
    (text, Vec::new())
}

fn standing_by_reply() -> (String, Vec<Source>) {
    let text = "Standing by on the local buffer. I can still talk destinations, \
retreat pacing, or getting your site wired up — ask away, and I'll go deeper \
once the live link is back."
        .to_string();
    (text, vec![Source::new(NEWSLETTER_URI, None)])
}

/// Produce the canned reply for a raw user input.
///
/// Deterministic and side-effect-free: the same input always yields the same
/// reply. Never returns empty text.
pub fn local_reply(input: &str) -> ChatReply {
    let needle = input.to_lowercase();

    let rule = FALLBACK_RULES
        .iter()
        .find(|rule| {
            rule.keywords.is_empty()
                || rule.keywords.iter().any(|keyword| needle.contains(keyword))
        })
        .expect("rule table ends with a catch-all");

    let (text, sources) = (rule.reply)();
    ChatReply {
        text,
        sources,
        lead_trigger: false,
        local: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_the_same_input() {
        assert_eq!(local_reply("anything at all"), local_reply("anything at all"));
    }

    #[test]
    fn sedona_rule_fires_with_one_newsletter_source() {
        let reply = local_reply("Tell me about Sedona");
        assert!(reply.text.contains("Sedona"));
        assert!(reply.text.contains("Cathedral Rock"));
        assert_eq!(reply.sources.len(), 1);
        assert_eq!(reply.sources[0].uri, NEWSLETTER_URI);
        assert!(reply.local);
        assert!(!reply.lead_trigger);
    }

    #[test]
    fn setup_rule_embeds_both_dns_constants() {
        let reply = local_reply("How do I set up my subdomain?");
        assert!(reply.text.contains(CNAME_TARGET));
        assert!(reply.text.contains(A_RECORD_IP));
    }

    #[test]
    fn specific_rules_win_over_the_fallthrough() {
        // "sedona" appears before the generic rule even when other words match nothing
        let reply = local_reply("random words then sedona at the end");
        assert!(reply.text.contains("Cathedral Rock"));
    }

    #[test]
    fn unmatched_input_gets_the_standing_by_reply() {
        let reply = local_reply("what's the meaning of life?");
        assert!(reply.text.contains("Standing by"));
        assert!(!reply.text.is_empty());
        assert_eq!(reply.sources.len(), 1);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(local_reply("SEDONA"), local_reply("sedona"));
    }
}
