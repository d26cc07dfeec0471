use crate::error::MatchError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchConfig {
    pub profile: Option<ProfileConfig>,
    pub text: Option<TextConfig>,
    pub weights: Option<HashMap<String, f64>>,
    pub health: Option<HealthConfig>,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub max_words: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub min_token_len: Option<usize>,
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    pub reference_stars: Option<u64>,
    pub reference_forks: Option<u64>,
    pub fresh_days: Option<u32>,
    pub stale_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub malformed: Option<MalformedPolicy>,
}

/// What the ranking service does with a record that has no `owner` or `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    #[default]
    Reject,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub description: f64,
    pub topics: f64,
    pub language: f64,
    pub name: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            description: 0.40,
            topics: 0.30,
            language: 0.20,
            name: 0.10,
        }
    }
}

impl FieldWeights {
    pub fn as_array(&self) -> [f64; 4] {
        [self.description, self.topics, self.language, self.name]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthSettings {
    pub reference_stars: u64,
    pub reference_forks: u64,
    pub fresh_days: u32,
    pub stale_days: u32,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            reference_stars: 10_000,
            reference_forks: 1_000,
            fresh_days: 30,
            stale_days: 365,
        }
    }
}

pub const DEFAULT_MAX_PROFILE_WORDS: usize = 80;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

const ALLOWED_WEIGHT_KEYS: [&str; 4] = ["description", "topics", "language", "name"];

impl MatchConfig {
    pub fn default_weights() -> FieldWeights {
        FieldWeights::default()
    }

    pub fn weights(&self) -> FieldWeights {
        let defaults = Self::default_weights();
        match &self.weights {
            Some(weights) => FieldWeights {
                description: *weights.get("description").unwrap_or(&defaults.description),
                topics: *weights.get("topics").unwrap_or(&defaults.topics),
                language: *weights.get("language").unwrap_or(&defaults.language),
                name: *weights.get("name").unwrap_or(&defaults.name),
            },
            None => defaults,
        }
    }

    pub fn max_profile_words(&self) -> usize {
        self.profile
            .as_ref()
            .and_then(|profile| profile.max_words)
            .unwrap_or(DEFAULT_MAX_PROFILE_WORDS)
    }

    pub fn min_token_len(&self) -> usize {
        self.text
            .as_ref()
            .and_then(|text| text.min_token_len)
            .unwrap_or(DEFAULT_MIN_TOKEN_LEN)
    }

    pub fn extra_stop_words(&self) -> &[String] {
        self.text
            .as_ref()
            .map(|text| text.extra_stop_words.as_slice())
            .unwrap_or_default()
    }

    pub fn health_settings(&self) -> HealthSettings {
        let defaults = HealthSettings::default();
        match &self.health {
            Some(health) => HealthSettings {
                reference_stars: health.reference_stars.unwrap_or(defaults.reference_stars),
                reference_forks: health.reference_forks.unwrap_or(defaults.reference_forks),
                fresh_days: health.fresh_days.unwrap_or(defaults.fresh_days),
                stale_days: health.stale_days.unwrap_or(defaults.stale_days),
            },
            None => defaults,
        }
    }

    pub fn malformed_policy(&self) -> MalformedPolicy {
        self.batch
            .as_ref()
            .and_then(|batch| batch.malformed)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(MatchError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if weights
            .as_array()
            .iter()
            .any(|weight| !(0.0..=1.0).contains(weight))
        {
            return Err(MatchError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum = weights.total();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(MatchError::ConfigParse(format!(
                "weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if self.max_profile_words() == 0 {
            return Err(MatchError::ConfigParse(
                "profile.max_words must be greater than 0".to_string(),
            ));
        }
        if self.min_token_len() == 0 {
            return Err(MatchError::ConfigParse(
                "text.min_token_len must be greater than 0".to_string(),
            ));
        }
        validate_stop_words(self.extra_stop_words())?;

        let health = self.health_settings();
        if health.reference_stars == 0 {
            return Err(MatchError::ConfigParse(
                "health.reference_stars must be greater than 0".to_string(),
            ));
        }
        if health.reference_forks == 0 {
            return Err(MatchError::ConfigParse(
                "health.reference_forks must be greater than 0".to_string(),
            ));
        }
        if health.fresh_days >= health.stale_days {
            return Err(MatchError::ConfigParse(format!(
                "health.fresh_days ({}) must be less than health.stale_days ({})",
                health.fresh_days, health.stale_days
            )));
        }

        Ok(())
    }
}

fn validate_stop_words(words: &[String]) -> Result<(), MatchError> {
    let mut seen = HashSet::<String>::new();
    for word in words {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(MatchError::ConfigParse(
                "text.extra_stop_words entries must be non-empty".to_string(),
            ));
        }
        if !seen.insert(normalized.clone()) {
            return Err(MatchError::ConfigParse(format!(
                "text.extra_stop_words contains duplicate word: {normalized}"
            )));
        }
    }
    Ok(())
}
