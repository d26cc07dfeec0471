use crate::types::config::FieldWeights;
use serde::{Deserialize, Serialize};

pub type Score = f64;

/// The four repository attributes compared against a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Description,
    Topics,
    Language,
    Name,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Description,
        Field::Topics,
        Field::Language,
        Field::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::Topics => "topics",
            Field::Language => "language",
            Field::Name => "name",
        }
    }
}

/// Per-field similarity, each value in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldScores {
    pub description: Score,
    pub topics: Score,
    pub language: Score,
    pub name: Score,
}

impl FieldScores {
    pub fn new(description: Score, topics: Score, language: Score, name: Score) -> Self {
        Self {
            description,
            topics,
            language,
            name,
        }
    }

    pub fn get(&self, field: Field) -> Score {
        match field {
            Field::Description => self.description,
            Field::Topics => self.topics,
            Field::Language => self.language,
            Field::Name => self.name,
        }
    }

    pub fn set(&mut self, field: Field, score: Score) {
        match field {
            Field::Description => self.description = score,
            Field::Topics => self.topics = score,
            Field::Language => self.language = score,
            Field::Name => self.name = score,
        }
    }

    /// Weighted mean of the field scores.
    ///
    /// Divides by the weight total so that all-perfect fields give exactly 1.0.
    pub fn overall(&self, weights: &FieldWeights) -> Score {
        let total = weights.total();
        if total <= 0.0 {
            return 0.0;
        }
        let weighted = weights.description * self.description
            + weights.topics * self.topics
            + weights.language * self.language
            + weights.name * self.name;
        clamp_unit(weighted / total)
    }
}

/// Overall match for one repository plus the field breakdown behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall: Score,
    pub fields: FieldScores,
}

impl MatchResult {
    pub fn new(fields: FieldScores, weights: &FieldWeights) -> Self {
        Self {
            overall: fields.overall(weights),
            fields,
        }
    }
}

pub const HEALTH_GOOD_THRESHOLD: Score = 80.0;
pub const HEALTH_MODERATE_THRESHOLD: Score = 60.0;

/// Display band for a `[0, 100]` health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Good,
    Moderate,
    Poor,
}

impl HealthBand {
    pub fn from_score(score: Score) -> Self {
        if score >= HEALTH_GOOD_THRESHOLD {
            HealthBand::Good
        } else if score >= HEALTH_MODERATE_THRESHOLD {
            HealthBand::Moderate
        } else {
            HealthBand::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthBand::Good => "good",
            HealthBand::Moderate => "moderate",
            HealthBand::Poor => "poor",
        }
    }
}

/// Health sub-scores in points; `total` is their clamped sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    pub stars: Score,
    pub forks: Score,
    pub maintenance: Score,
    pub issues: Score,
    pub license: Score,
    pub total: Score,
}

impl HealthBreakdown {
    pub fn band(&self) -> HealthBand {
        HealthBand::from_score(self.total)
    }
}

/// Clamps to `[0, 1]`, mapping NaN to the floor.
pub fn clamp_unit(score: Score) -> Score {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fields_score_exactly_one() {
        let fields = FieldScores::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(fields.overall(&FieldWeights::default()), 1.0);

        let uneven = FieldWeights {
            description: 0.37,
            topics: 0.29,
            language: 0.21,
            name: 0.13,
        };
        assert_eq!(fields.overall(&uneven), 1.0);
    }

    #[test]
    fn zero_fields_score_zero() {
        let fields = FieldScores::default();
        assert_eq!(fields.overall(&FieldWeights::default()), 0.0);
    }

    #[test]
    fn overall_applies_weights() {
        let fields = FieldScores::new(1.0, 0.0, 0.0, 0.0);
        let overall = fields.overall(&FieldWeights::default());
        assert!((overall - 0.40).abs() < 1e-12);

        let fields = FieldScores::new(0.5, 0.5, 1.0, 0.0);
        let overall = fields.overall(&FieldWeights::default());
        assert!((overall - 0.55).abs() < 1e-12);
    }

    #[test]
    fn get_and_set_cover_every_field() {
        let mut fields = FieldScores::default();
        for (index, field) in Field::ALL.iter().enumerate() {
            fields.set(*field, index as Score / 4.0);
        }
        assert_eq!(fields.get(Field::Description), 0.0);
        assert_eq!(fields.get(Field::Name), 0.75);
    }

    #[test]
    fn health_band_boundaries() {
        assert_eq!(HealthBand::from_score(100.0), HealthBand::Good);
        assert_eq!(HealthBand::from_score(80.0), HealthBand::Good);
        assert_eq!(HealthBand::from_score(79.99), HealthBand::Moderate);
        assert_eq!(HealthBand::from_score(60.0), HealthBand::Moderate);
        assert_eq!(HealthBand::from_score(59.99), HealthBand::Poor);
        assert_eq!(HealthBand::from_score(0.0), HealthBand::Poor);
    }

    #[test]
    fn clamp_unit_maps_nan_to_floor() {
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-0.2), 0.0);
    }
}
