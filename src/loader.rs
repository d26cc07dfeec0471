use crate::error::{MatchError, Result};
use crate::types::repo::RepositoryRecord;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Repository records to rank, plus the profile if the file carried one.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub profile: Option<String>,
    pub records: Vec<RepositoryRecord>,
}

#[derive(Debug, Deserialize)]
struct BatchRequest {
    profile: Option<String>,
    #[serde(alias = "items")]
    repositories: Vec<RepositoryRecord>,
}

pub fn load_batch(path: &Path) -> Result<Batch> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path)?
    };
    let batch = parse_batch(&content)?;
    tracing::info!(
        source = %path.display(),
        records = batch.records.len(),
        "loaded repository batch"
    );
    Ok(batch)
}

/// Accepts a bare array of records or an object with a `repositories` array.
pub fn parse_batch(content: &str) -> Result<Batch> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(_) => Ok(Batch {
            profile: None,
            records: serde_json::from_value(value)?,
        }),
        Value::Object(_) => {
            let request: BatchRequest = serde_json::from_value(value)?;
            Ok(Batch {
                profile: request.profile.filter(|profile| !profile.trim().is_empty()),
                records: request.repositories,
            })
        }
        other => Err(MatchError::MalformedRecord(format!(
            "batch must be a JSON array or object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parse_batch_accepts_bare_array() {
        let batch = parse_batch(r#"[{"owner": "a", "name": "b"}, {"owner": "c", "name": "d"}]"#)
            .expect("array should parse");
        assert!(batch.profile.is_none());
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[1].full_name(), "c/d");
    }

    #[test]
    fn parse_batch_accepts_request_object() {
        let batch = parse_batch(
            r#"{
                "profile": "rust web services",
                "repositories": [{"owner": "tokio-rs", "name": "axum", "stars": 10}]
            }"#,
        )
        .expect("request should parse");
        assert_eq!(batch.profile.as_deref(), Some("rust web services"));
        assert_eq!(batch.records[0].stars, 10);
    }

    #[test]
    fn parse_batch_accepts_search_results_payload() {
        let batch = parse_batch(
            r#"{
                "total_count": 1,
                "items": [{
                    "name": "sentence-transformers",
                    "full_name": "UKPLab/sentence-transformers",
                    "owner": {"login": "UKPLab"},
                    "html_url": "https://github.com/UKPLab/sentence-transformers",
                    "stargazers_count": 15000,
                    "topics": ["nlp", "embeddings"]
                }]
            }"#,
        )
        .expect("search payload should parse");
        assert_eq!(batch.records[0].owner, "UKPLab");
        assert_eq!(batch.records[0].stars, 15000);
    }

    #[test]
    fn parse_batch_treats_blank_profile_as_missing() {
        let batch = parse_batch(r#"{"profile": "  ", "repositories": []}"#)
            .expect("request should parse");
        assert!(batch.profile.is_none());
        assert!(batch.records.is_empty());
    }

    #[test]
    fn parse_batch_rejects_scalars() {
        let err = parse_batch("42").expect_err("number should be rejected");
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn parse_batch_reports_invalid_json() {
        let err = parse_batch("[{").expect_err("broken json should fail");
        assert!(matches!(err, MatchError::Json(_)));
    }

    #[test]
    fn load_batch_reads_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("repos.json");
        fs::write(&path, r#"[{"url": "https://github.com/BurntSushi/ripgrep"}]"#)
            .expect("batch should write");
        let batch = load_batch(&path).expect("batch should load");
        assert_eq!(batch.records[0].full_name(), "BurntSushi/ripgrep");
    }

    #[test]
    fn load_batch_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_batch(&dir.path().join("missing.json")).expect_err("missing file");
        assert!(matches!(err, MatchError::Io(_)));
    }
}
