use crate::types::repo::RepositoryRecord;
use crate::types::scoring::{FieldScores, HealthBand, HealthBreakdown, MatchResult, Score};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStatus {
    Ranked,
    NoRepositories,
}

/// The repository with the highest overall score in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    pub owner: String,
    pub name: String,
    pub url: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoScore {
    pub owner: String,
    pub repo_name: String,
    pub url: String,
    pub score: Score,
    pub field_scores: FieldScores,
    pub health_score: Score,
    pub health_band: HealthBand,
}

impl RepoScore {
    pub fn new(record: &RepositoryRecord, result: &MatchResult, health: &HealthBreakdown) -> Self {
        Self {
            owner: record.owner.clone(),
            repo_name: record.name.clone(),
            url: record.canonical_url(),
            score: result.overall,
            field_scores: result.fields,
            health_score: health.total,
            health_band: health.band(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo_name)
    }
}

/// Result of ranking one batch against one profile.
///
/// `scores` always follows the input order of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse {
    pub status: RankingStatus,
    pub most_similar_repo: Option<BestMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub scores: Vec<RepoScore>,
}

impl RankingResponse {
    pub fn no_repositories(skipped: Vec<String>) -> Self {
        Self {
            status: RankingStatus::NoRepositories,
            most_similar_repo: None,
            skipped,
            scores: Vec::new(),
        }
    }

    /// The `limit` best entries by overall score; equal scores keep input order.
    pub fn top(&self, limit: Option<usize>) -> Vec<&RepoScore> {
        let mut ordered = self.scores.iter().collect::<Vec<_>>();
        ordered.sort_by(|a, b| b.score.total_cmp(&a.score));
        if let Some(limit) = limit {
            ordered.truncate(limit);
        }
        ordered
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEntry {
    pub owner: String,
    pub repo_name: String,
    pub url: String,
    pub health_score: Score,
    pub health_band: HealthBand,
    pub breakdown: HealthBreakdown,
}

impl HealthEntry {
    pub fn new(record: &RepositoryRecord, breakdown: HealthBreakdown) -> Self {
        Self {
            owner: record.owner.clone(),
            repo_name: record.name.clone(),
            url: record.canonical_url(),
            health_score: breakdown.total,
            health_band: breakdown.band(),
            breakdown,
        }
    }
}

/// Health scores for one batch, with labels of records dropped by the
/// `skip` policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub entries: Vec<HealthEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}
