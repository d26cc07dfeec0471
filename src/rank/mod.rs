pub mod aggregate;
pub mod health;

use crate::error::{MatchError, Result};
use crate::similarity::{score_fields, RepoText};
use crate::text::{word_count, Normalizer};
use crate::types::config::{FieldWeights, HealthSettings, MalformedPolicy, MatchConfig};
use crate::types::repo::RepositoryRecord;
use crate::types::report::{
    BestMatch, HealthEntry, HealthReport, RankingResponse, RankingStatus, RepoScore,
};
use crate::types::scoring::{FieldScores, HealthBreakdown, MatchResult};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Progress of one ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Validating,
    Scoring,
    Aggregating,
    Done,
}

impl Stage {
    fn can_advance_to(self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Idle, Stage::Validating)
                | (Stage::Validating, Stage::Scoring)
                | (Stage::Validating, Stage::Done)
                | (Stage::Scoring, Stage::Aggregating)
                | (Stage::Aggregating, Stage::Done)
        )
    }
}

#[derive(Debug)]
struct StageTracker {
    stage: Stage,
}

impl StageTracker {
    fn new() -> Self {
        Self { stage: Stage::Idle }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "illegal ranking transition {:?} -> {:?}",
            self.stage,
            next
        );
        tracing::debug!(from = ?self.stage, to = ?next, "ranking stage");
        self.stage = next;
    }
}

/// Ranks repository batches against a profile.
///
/// Built once from the loaded configuration; holds no per-request state, so
/// one instance can serve any number of requests.
#[derive(Debug, Clone)]
pub struct RankingService {
    normalizer: Normalizer,
    weights: FieldWeights,
    health: HealthSettings,
    max_profile_words: usize,
    malformed: MalformedPolicy,
}

impl RankingService {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
            weights: config.weights(),
            health: config.health_settings(),
            max_profile_words: config.max_profile_words(),
            malformed: config.malformed_policy(),
        }
    }

    pub fn rank(
        &self,
        profile: &str,
        records: Vec<RepositoryRecord>,
        now: DateTime<Utc>,
    ) -> Result<RankingResponse> {
        let mut stage = StageTracker::new();

        stage.advance(Stage::Validating);
        self.validate_profile(profile)?;
        let (records, skipped) = self.validate_batch(records)?;
        if records.is_empty() {
            tracing::info!("no repositories to rank");
            stage.advance(Stage::Done);
            return Ok(RankingResponse::no_repositories(skipped));
        }

        stage.advance(Stage::Scoring);
        let profile = self.normalizer.profile(profile);
        if profile.is_empty() {
            tracing::warn!("profile has no usable words; every match score will be zero");
        }
        let scored = records
            .iter()
            .map(|record| {
                let text = RepoText::from_record(&self.normalizer, record);
                let fields = score_fields(&profile, &text);
                let health = health::health_score(record, &self.health, now);
                tracing::debug!(
                    repo = %record.full_name(),
                    description = fields.description,
                    topics = fields.topics,
                    language = fields.language,
                    name = fields.name,
                    health = health.total,
                    "scored repository"
                );
                (fields, health)
            })
            .collect::<Vec<(FieldScores, HealthBreakdown)>>();

        stage.advance(Stage::Aggregating);
        let results = scored
            .iter()
            .map(|(fields, _)| aggregate::aggregate(*fields, &self.weights))
            .collect::<Vec<MatchResult>>();
        let most_similar_repo = aggregate::best_match(&results).map(|index| {
            let record = &records[index];
            BestMatch {
                owner: record.owner.clone(),
                name: record.name.clone(),
                url: record.canonical_url(),
                score: results[index].overall,
            }
        });
        let scores = records
            .iter()
            .zip(&results)
            .zip(&scored)
            .map(|((record, result), (_, health))| RepoScore::new(record, result, health))
            .collect::<Vec<_>>();
        debug_assert_eq!(scores.len(), records.len());

        stage.advance(Stage::Done);
        if let Some(best) = &most_similar_repo {
            tracing::info!(
                repo = %format!("{}/{}", best.owner, best.name),
                score = best.score,
                ranked = scores.len(),
                "best match selected"
            );
        }

        Ok(RankingResponse {
            status: RankingStatus::Ranked,
            most_similar_repo,
            skipped,
            scores,
        })
    }

    /// Health scores only; no profile involved.
    pub fn health(
        &self,
        records: Vec<RepositoryRecord>,
        now: DateTime<Utc>,
    ) -> Result<HealthReport> {
        let (records, skipped) = self.validate_batch(records)?;
        let entries = records
            .iter()
            .map(|record| HealthEntry::new(record, health::health_score(record, &self.health, now)))
            .collect();
        Ok(HealthReport { entries, skipped })
    }

    fn validate_profile(&self, profile: &str) -> Result<()> {
        if profile.trim().is_empty() {
            return Err(MatchError::InvalidProfile("profile is empty".to_string()));
        }
        let words = word_count(profile);
        if words > self.max_profile_words {
            return Err(MatchError::InvalidProfile(format!(
                "profile has {} words; the limit is {}",
                words, self.max_profile_words
            )));
        }
        Ok(())
    }

    /// Applies the malformed-record policy and rejects duplicate identities.
    fn validate_batch(
        &self,
        records: Vec<RepositoryRecord>,
    ) -> Result<(Vec<RepositoryRecord>, Vec<String>)> {
        let mut kept = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for (index, record) in records.into_iter().enumerate() {
            if !record.has_identity() {
                let label = format!("record {} ({})", index + 1, record.full_name());
                match self.malformed {
                    MalformedPolicy::Reject => {
                        return Err(MatchError::MalformedRecord(format!(
                            "{label} is missing owner or name"
                        )));
                    }
                    MalformedPolicy::Skip => {
                        tracing::warn!(record = %label, "skipping record without owner or name");
                        skipped.push(label);
                        continue;
                    }
                }
            }
            if !seen.insert(record.key()) {
                return Err(MatchError::DuplicateRecord(record.full_name()));
            }
            kept.push(record);
        }

        Ok((kept, skipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::HealthBand;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn service() -> RankingService {
        RankingService::new(&MatchConfig::default())
    }

    fn repo(
        owner: &str,
        name: &str,
        description: &str,
        topics: &[&str],
        language: &str,
    ) -> RepositoryRecord {
        let mut record = RepositoryRecord::new(owner, name);
        record.description = description.to_string();
        record.topics = topics.iter().map(|topic| topic.to_string()).collect();
        record.language = language.to_string();
        record
    }

    fn batch() -> Vec<RepositoryRecord> {
        vec![
            repo(
                "pandas-dev",
                "pandas",
                "Flexible data analysis and manipulation library",
                &["data-analysis", "dataframe", "python"],
                "Python",
            ),
            repo(
                "tokio-rs",
                "axum",
                "Ergonomic and modular web framework built with Tokio",
                &["web", "http", "framework"],
                "Rust",
            ),
            repo(
                "facebook",
                "react",
                "A declarative library for building user interfaces",
                &["react", "frontend", "ui"],
                "JavaScript",
            ),
        ]
    }

    #[test]
    fn rank_selects_the_closest_repository() {
        let response = service()
            .rank("I build web services in Rust using axum and tokio", batch(), now())
            .expect("ranking should succeed");
        assert_eq!(response.status, RankingStatus::Ranked);
        let best = response.most_similar_repo.expect("best match should exist");
        assert_eq!(best.name, "axum");
        assert_eq!(best.url, "https://github.com/tokio-rs/axum");
        assert_eq!(response.scores.len(), 3);
        assert_eq!(response.scores[1].score, best.score);
    }

    #[test]
    fn rank_keeps_input_order_in_scores() {
        let response = service()
            .rank("frontend user interfaces", batch(), now())
            .expect("ranking should succeed");
        let names = response
            .scores
            .iter()
            .map(|score| score.repo_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["pandas", "axum", "react"]);
        assert_eq!(
            response.most_similar_repo.map(|best| best.name),
            Some("react".to_string())
        );
    }

    #[test]
    fn every_score_is_within_range() {
        let response = service()
            .rank("python data analysis and react frontends", batch(), now())
            .expect("ranking should succeed");
        for score in &response.scores {
            assert!((0.0..=1.0).contains(&score.score));
            assert!((0.0..=1.0).contains(&score.field_scores.description));
            assert!((0.0..=1.0).contains(&score.field_scores.topics));
            assert!((0.0..=1.0).contains(&score.field_scores.language));
            assert!((0.0..=1.0).contains(&score.field_scores.name));
            assert!((0.0..=100.0).contains(&score.health_score));
        }
    }

    #[test]
    fn profile_without_usable_words_scores_zero_and_picks_first() {
        let response = service()
            .rank("it is what it is", batch(), now())
            .expect("stop-word profile is still a valid request");
        assert!(response.scores.iter().all(|score| score.score == 0.0));
        assert_eq!(
            response.most_similar_repo.map(|best| best.name),
            Some("pandas".to_string())
        );
    }

    #[test]
    fn empty_profile_is_invalid() {
        let err = service()
            .rank("   \n", batch(), now())
            .expect_err("blank profile should fail");
        assert!(matches!(err, MatchError::InvalidProfile(_)));
    }

    #[test]
    fn profile_over_word_limit_is_invalid() {
        let profile = vec!["rust"; 81].join(" ");
        let err = service()
            .rank(&profile, batch(), now())
            .expect_err("long profile should fail");
        assert!(err.to_string().contains("81 words"));

        let profile = vec!["rust"; 80].join(" ");
        assert!(service().rank(&profile, batch(), now()).is_ok());
    }

    #[test]
    fn empty_batch_returns_no_repositories() {
        let response = service()
            .rank("rust", Vec::new(), now())
            .expect("empty batch is not an error");
        assert_eq!(response.status, RankingStatus::NoRepositories);
        assert!(response.most_similar_repo.is_none());
        assert!(response.scores.is_empty());
    }

    #[test]
    fn profile_is_validated_before_the_batch() {
        let err = service()
            .rank("", Vec::new(), now())
            .expect_err("blank profile should fail even for an empty batch");
        assert!(matches!(err, MatchError::InvalidProfile(_)));
    }

    #[test]
    fn malformed_record_rejects_batch_by_default() {
        let mut records = batch();
        records.push(RepositoryRecord::new("", "orphan"));
        let err = service()
            .rank("rust", records, now())
            .expect_err("malformed record should fail");
        assert!(matches!(err, MatchError::MalformedRecord(_)));
        assert!(err.to_string().contains("record 4"));
    }

    #[test]
    fn malformed_record_is_skipped_under_skip_policy() {
        let cfg: MatchConfig =
            toml::from_str("[batch]\nmalformed = \"skip\"\n").expect("config should parse");
        let mut records = batch();
        records.insert(0, RepositoryRecord::new("someone", ""));
        let response = RankingService::new(&cfg)
            .rank("rust web", records, now())
            .expect("skip policy should succeed");
        assert_eq!(response.scores.len(), 3);
        assert_eq!(response.skipped, vec!["record 1 (someone/)".to_string()]);
    }

    #[test]
    fn health_reports_records_dropped_by_skip_policy() {
        let cfg: MatchConfig =
            toml::from_str("[batch]\nmalformed = \"skip\"\n").expect("config should parse");
        let mut records = batch();
        records.push(RepositoryRecord::new("", "orphan"));
        let report = RankingService::new(&cfg)
            .health(records, now())
            .expect("skip policy should succeed");
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.skipped, vec!["record 4 (/orphan)".to_string()]);
    }

    #[test]
    fn skipping_every_record_returns_no_repositories() {
        let cfg: MatchConfig =
            toml::from_str("[batch]\nmalformed = \"skip\"\n").expect("config should parse");
        let response = RankingService::new(&cfg)
            .rank("rust", vec![RepositoryRecord::default()], now())
            .expect("skip policy should succeed");
        assert_eq!(response.status, RankingStatus::NoRepositories);
        assert_eq!(response.skipped.len(), 1);
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut records = batch();
        records.push(RepositoryRecord::new("Tokio-RS", "AXUM"));
        let err = service()
            .rank("rust", records, now())
            .expect_err("duplicate should fail");
        assert!(matches!(err, MatchError::DuplicateRecord(_)));
    }

    #[test]
    fn health_is_independent_of_profile() {
        let mut records = batch();
        records[1].stars = 20_000;
        records[1].forks = 1_500;
        records[1].license = Some("MIT".to_string());
        records[1].updated_at = Some(now() - Duration::days(1));

        let first = service()
            .rank("rust web", records.clone(), now())
            .expect("ranking should succeed");
        let second = service()
            .rank("python data", records, now())
            .expect("ranking should succeed");
        assert_eq!(first.scores[1].health_score, second.scores[1].health_score);
        assert_eq!(first.scores[1].health_band, HealthBand::Good);
    }

    #[test]
    fn health_command_scores_every_record() {
        let report = service()
            .health(batch(), now())
            .expect("health should succeed");
        assert_eq!(report.entries.len(), 3);
        assert!(report.skipped.is_empty());
        assert!(report
            .entries
            .iter()
            .all(|entry| entry.health_score == health::EMPTY_RECORD_HEALTH));
    }

    #[test]
    fn stage_transitions_follow_the_ranking_order() {
        assert!(Stage::Idle.can_advance_to(Stage::Validating));
        assert!(Stage::Validating.can_advance_to(Stage::Done));
        assert!(Stage::Aggregating.can_advance_to(Stage::Done));
        assert!(!Stage::Idle.can_advance_to(Stage::Scoring));
        assert!(!Stage::Scoring.can_advance_to(Stage::Done));
        assert!(!Stage::Done.can_advance_to(Stage::Idle));
    }
}
