pub mod json;
pub mod md;

use crate::error::MatchError;
use crate::types::report::{HealthReport, RankingResponse};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Renders a ranking. `top` limits the Markdown table; JSON is always complete.
pub fn render(
    response: &RankingResponse,
    format: OutputFormat,
    top: Option<usize>,
) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(response).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::to_markdown(response, top)),
    }
}

pub fn render_health(report: &HealthReport, format: OutputFormat) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::health_to_json(report).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::health_to_markdown(report)),
    }
}
