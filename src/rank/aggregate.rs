use crate::types::config::FieldWeights;
use crate::types::scoring::{FieldScores, MatchResult};

pub fn aggregate(fields: FieldScores, weights: &FieldWeights) -> MatchResult {
    MatchResult::new(fields, weights)
}

/// Index of the highest overall score; the first one wins a tie.
///
/// Returns `None` for an empty batch.
pub fn best_match(results: &[MatchResult]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, result) in results.iter().enumerate() {
        match best {
            Some((_, score)) if result.overall <= score => {}
            _ => best = Some((index, result.overall)),
        }
    }
    best.map(|(index, _)| index)
}
