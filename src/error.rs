use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("malformed repository record: {0}")]
    MalformedRecord(String),

    #[error("duplicate repository in batch: {0}")]
    DuplicateRecord(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchError {
    /// Input problems the caller can fix, as opposed to runtime failures.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidProfile(_) | Self::MalformedRecord(_) | Self::DuplicateRecord(_) => true,
            // Unparseable batch content; a failed read underneath is still a runtime error.
            Self::Json(e) => !e.is_io(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
