//! Topic overlap between a profile and a repository's topic set.

use crate::text::Profile;
use crate::types::scoring::{clamp_unit, Score};

/// Shorter side of a prefix match must be at least this long, so `go`
/// never matches `go2`.
const MIN_PREFIX_MATCH: usize = 4;

/// Fraction of distinct topics the profile matches.
///
/// `topics` holds one normalized token list per topic, already deduplicated;
/// topics with no usable tokens are ignored.
pub fn topic_overlap(profile: &Profile, topics: &[Vec<String>]) -> Score {
    if profile.is_empty() {
        return 0.0;
    }
    let usable = topics
        .iter()
        .filter(|tokens| !tokens.is_empty())
        .collect::<Vec<_>>();
    if usable.is_empty() {
        return 0.0;
    }

    let matched = usable
        .iter()
        .filter(|tokens| {
            tokens
                .iter()
                .any(|token| profile.tokens.iter().any(|term| tokens_match(token, term)))
        })
        .count();
    clamp_unit(matched as f64 / usable.len() as f64)
}

/// Exact match, or a versioned form of the same word: `webgl` matches
/// `webgl2` and `java` matches `java17`, but `java` never matches `javascript`.
fn tokens_match(topic: &str, term: &str) -> bool {
    if topic == term {
        return true;
    }
    let (shorter, longer) = if topic.len() <= term.len() {
        (topic, term)
    } else {
        (term, topic)
    };
    if shorter.chars().count() < MIN_PREFIX_MATCH {
        return false;
    }
    longer
        .strip_prefix(shorter)
        .and_then(|rest| rest.chars().next())
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
}
