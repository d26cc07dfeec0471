//! Profile-independent repository health on a 0-100 scale.
//!
//! | component   | points | rule                                                        |
//! |-------------|--------|-------------------------------------------------------------|
//! | stars       | 25     | `ln(1 + stars) / ln(1 + reference_stars)`, capped at 1      |
//! | forks       | 10     | `ln(1 + forks) / ln(1 + reference_forks)`, capped at 1      |
//! | maintenance | 30     | full within `fresh_days`, linear to zero at `stale_days`    |
//! | issues      | 20     | `1 - open_issues / (open_issues + stars + forks + 1)`       |
//! | license     | 15     | present or not                                              |
//!
//! A repository with no stars, forks, issues, license or updates scores
//! exactly [`EMPTY_RECORD_HEALTH`], since an empty issue tracker carries no
//! burden. This is not a lower bound: open issues with no other activity
//! push the score toward 0.

use crate::types::config::HealthSettings;
use crate::types::repo::RepositoryRecord;
use crate::types::scoring::{HealthBreakdown, Score};
use chrono::{DateTime, Utc};

pub const STARS_POINTS: Score = 25.0;
pub const FORKS_POINTS: Score = 10.0;
pub const MAINTENANCE_POINTS: Score = 30.0;
pub const ISSUES_POINTS: Score = 20.0;
pub const LICENSE_POINTS: Score = 15.0;

pub const EMPTY_RECORD_HEALTH: Score = ISSUES_POINTS;
pub const HEALTH_MAX: Score = 100.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn health_score(
    record: &RepositoryRecord,
    settings: &HealthSettings,
    now: DateTime<Utc>,
) -> HealthBreakdown {
    let stars = STARS_POINTS * log_ratio(record.stars, settings.reference_stars);
    let forks = FORKS_POINTS * log_ratio(record.forks, settings.reference_forks);
    let maintenance = MAINTENANCE_POINTS * freshness(record.updated_at, settings, now);
    let issues = ISSUES_POINTS * (1.0 - issue_burden(record));
    let license = if record.has_license() {
        LICENSE_POINTS
    } else {
        0.0
    };

    let total = stars + forks + maintenance + issues + license;
    HealthBreakdown {
        stars,
        forks,
        maintenance,
        issues,
        license,
        total: if total.is_nan() {
            0.0
        } else {
            total.clamp(0.0, HEALTH_MAX)
        },
    }
}

/// Log-scaled popularity relative to `reference`, in `[0, 1]`.
fn log_ratio(count: u64, reference: u64) -> f64 {
    let reference = (reference.max(1) as f64).ln_1p();
    ((count as f64).ln_1p() / reference).clamp(0.0, 1.0)
}

/// 1.0 when updated recently, decaying linearly to 0.0 at the stale horizon.
fn freshness(updated_at: Option<DateTime<Utc>>, settings: &HealthSettings, now: DateTime<Utc>) -> f64 {
    let Some(updated_at) = updated_at else {
        return 0.0;
    };
    let age_days = (now - updated_at).num_seconds().max(0) as f64 / SECONDS_PER_DAY;
    let fresh = f64::from(settings.fresh_days);
    let stale = f64::from(settings.stale_days);
    if age_days <= fresh {
        1.0
    } else if age_days >= stale || stale <= fresh {
        0.0
    } else {
        ((stale - age_days) / (stale - fresh)).clamp(0.0, 1.0)
    }
}

/// Share of open issues against overall engagement, in `[0, 1)`.
fn issue_burden(record: &RepositoryRecord) -> f64 {
    let open = record.open_issues as f64;
    let engagement = open + record.stars as f64 + record.forks as f64 + 1.0;
    (open / engagement).clamp(0.0, 1.0)
}
