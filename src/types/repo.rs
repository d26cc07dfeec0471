use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// License value the upstream metadata service emits when a repository has none.
const NO_LICENSE_SENTINEL: &str = "No License";

/// One candidate repository as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct RepositoryRecord {
    pub name: String,
    pub owner: String,
    pub description: String,
    pub topics: Vec<String>,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub license: Option<String>,
    pub url: Option<String>,
}

impl RepositoryRecord {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Identity key within a batch; owner and name compare case-insensitively.
    pub fn key(&self) -> (String, String) {
        (
            self.owner.trim().to_lowercase(),
            self.name.trim().to_lowercase(),
        )
    }

    pub fn has_identity(&self) -> bool {
        !self.owner.trim().is_empty() && !self.name.trim().is_empty()
    }

    pub fn has_license(&self) -> bool {
        self.license
            .as_deref()
            .map(|license| !license.trim().is_empty())
            .unwrap_or(false)
    }

    /// Canonical URL, falling back to the public host layout when none was given.
    pub fn canonical_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}/{}", self.owner, self.name))
    }
}

/// Splits a repository URL into `(owner, name)` using its last two path segments.
///
/// Trailing slashes and a `.git` suffix are ignored, so clone URLs work too.
pub fn parse_repo_url(url: &str) -> Option<(String, String)> {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let path = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let mut segments = path.rsplit('/').filter(|segment| !segment.is_empty());
    let name = segments.next()?;
    let owner = segments.next()?;
    // a bare "host/name" has no owner segment
    if owner.contains('.') && segments.next().is_none() && path.starts_with(owner) {
        return None;
    }
    Some((owner.to_string(), name.to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwnerField {
    Login(String),
    Account { login: Option<String> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseField {
    Name(String),
    Detail {
        name: Option<String>,
        spdx_id: Option<String>,
    },
}

/// Accepts both the flat record shape and the provider's repository payload.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    name: Option<String>,
    owner: Option<OwnerField>,
    full_name: Option<String>,
    description: Option<String>,
    topics: Option<Vec<String>>,
    language: Option<String>,
    stars: Option<u64>,
    stargazers_count: Option<u64>,
    forks: Option<u64>,
    forks_count: Option<u64>,
    open_issues: Option<u64>,
    open_issues_count: Option<u64>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    license: Option<LicenseField>,
    html_url: Option<String>,
    url: Option<String>,
    clone_url: Option<String>,
}

impl From<RawRecord> for RepositoryRecord {
    fn from(raw: RawRecord) -> Self {
        let url = raw
            .html_url
            .or(raw.url)
            .or(raw.clone_url)
            .filter(|url| !url.trim().is_empty());

        let mut owner = match raw.owner {
            Some(OwnerField::Login(login)) => login,
            Some(OwnerField::Account { login }) => login.unwrap_or_default(),
            None => String::new(),
        };
        let mut name = raw.name.unwrap_or_default();

        let recovered = raw
            .full_name
            .as_deref()
            .and_then(|full| full.split_once('/'))
            .map(|(owner, name)| (owner.to_string(), name.to_string()))
            .or_else(|| url.as_deref().and_then(parse_repo_url));
        if let Some((recovered_owner, recovered_name)) = recovered {
            if owner.trim().is_empty() {
                owner = recovered_owner;
            }
            if name.trim().is_empty() {
                name = recovered_name;
            }
        }

        let license = match raw.license {
            Some(LicenseField::Name(name)) => Some(name),
            Some(LicenseField::Detail { name, spdx_id }) => name.or(spdx_id),
            None => None,
        }
        .filter(|license| {
            let license = license.trim();
            !license.is_empty() && license != NO_LICENSE_SENTINEL
        });

        Self {
            name,
            owner,
            description: raw.description.unwrap_or_default(),
            topics: raw.topics.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            stars: raw.stars.or(raw.stargazers_count).unwrap_or(0),
            forks: raw.forks.or(raw.forks_count).unwrap_or(0),
            open_issues: raw.open_issues.or(raw.open_issues_count).unwrap_or(0),
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            license,
            url,
        }
    }
}
