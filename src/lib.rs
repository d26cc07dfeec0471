//! Ranks candidate repositories against a free-text user profile.
//!
//! Each repository gets four field similarities (description, topics,
//! language, name) folded into one weighted match score, plus a
//! profile-independent health score on a 0-100 scale.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod rank;
pub mod report;
pub mod similarity;
pub mod text;
pub mod types;

pub use error::{MatchError, Result};
pub use rank::RankingService;
pub use types::config::MatchConfig;
pub use types::repo::RepositoryRecord;
pub use types::report::{RankingResponse, RankingStatus};
