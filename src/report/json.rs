use crate::types::report::{HealthReport, RankingResponse};

pub fn to_json(response: &RankingResponse) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(response)
}

pub fn health_to_json(report: &HealthReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
