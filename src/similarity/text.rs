//! Bag-of-words similarity for free-text fields.

use crate::types::scoring::{clamp_unit, Score};
use std::collections::{HashMap, HashSet};

/// Cosine similarity of the term-frequency vectors of `a` and `b`.
///
/// The vocabulary is built from the two sequences only. Identical token
/// multisets score exactly 1.0; an empty side scores 0.0.
pub fn cosine(a: &[String], b: &[String]) -> Score {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let left = term_frequencies(a);
    let right = term_frequencies(b);
    if left == right {
        return 1.0;
    }

    let dot: f64 = left
        .iter()
        .filter_map(|(term, count)| right.get(term).map(|other| count * other))
        .sum();
    let left_norm: f64 = left.values().map(|count| count * count).sum();
    let right_norm: f64 = right.values().map(|count| count * count).sum();
    let denominator = (left_norm * right_norm).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    clamp_unit(dot / denominator)
}

/// Share of `field` tokens that also occur in `profile`.
///
/// Measures how much of a short field (a repository name) the profile
/// covers; identical sets score 1.0 and an empty side scores 0.0.
pub fn containment(field: &HashSet<String>, profile: &HashSet<String>) -> Score {
    if field.is_empty() || profile.is_empty() {
        return 0.0;
    }
    let shared = field.intersection(profile).count();
    clamp_unit(shared as f64 / field.len() as f64)
}

fn term_frequencies(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}
