//! Field scorers: one pure function per repository field, each in `[0, 1]`.

pub mod language;
pub mod text;
pub mod topics;

use crate::text::{Normalizer, Profile};
use crate::types::repo::RepositoryRecord;
use crate::types::scoring::{clamp_unit, Field, FieldScores, Score};
use std::collections::{BTreeSet, HashSet};

/// Normalized view of the text fields of one repository.
#[derive(Debug, Clone, Default)]
pub struct RepoText {
    pub name: HashSet<String>,
    pub description: Vec<String>,
    pub topics: Vec<Vec<String>>,
    pub language: String,
}

impl RepoText {
    pub fn from_record(normalizer: &Normalizer, record: &RepositoryRecord) -> Self {
        let distinct_topics = record
            .topics
            .iter()
            .map(|topic| topic.trim().to_lowercase())
            .filter(|topic| !topic.is_empty())
            .collect::<BTreeSet<_>>();

        Self {
            name: normalizer.token_set(&record.name),
            description: normalizer.tokens(&record.description),
            topics: distinct_topics
                .iter()
                .map(|topic| normalizer.tokens(topic))
                .collect(),
            language: record.language.clone(),
        }
    }
}

type Scorer = fn(&Profile, &RepoText) -> Score;

/// Which function scores which field.
const SCORERS: [(Field, Scorer); 4] = [
    (Field::Description, score_description),
    (Field::Topics, score_topics),
    (Field::Language, score_language),
    (Field::Name, score_name),
];

pub fn score_fields(profile: &Profile, repo: &RepoText) -> FieldScores {
    let mut scores = FieldScores::default();
    if profile.is_empty() {
        return scores;
    }
    for (field, scorer) in SCORERS {
        scores.set(field, clamp_unit(scorer(profile, repo)));
    }
    scores
}

fn score_description(profile: &Profile, repo: &RepoText) -> Score {
    text::cosine(&profile.tokens, &repo.description)
}

fn score_topics(profile: &Profile, repo: &RepoText) -> Score {
    topics::topic_overlap(profile, &repo.topics)
}

fn score_language(profile: &Profile, repo: &RepoText) -> Score {
    language::language_match(profile, &repo.language)
}

fn score_name(profile: &Profile, repo: &RepoText) -> Score {
    text::containment(&repo.name, &profile.token_set)
}
