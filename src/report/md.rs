use crate::types::report::{HealthReport, RankingResponse, RankingStatus};

pub fn to_markdown(response: &RankingResponse, top: Option<usize>) -> String {
    let mut output = String::new();
    output.push_str("# Repository Match Report\n\n");

    if response.status == RankingStatus::NoRepositories {
        output.push_str("No repositories to rank.\n");
        push_skipped(&mut output, &response.skipped);
        return output;
    }

    match &response.most_similar_repo {
        Some(best) => output.push_str(&format!(
            "Best match: {}/{} ({:.1}%)\n{}\n\n",
            best.owner,
            best.name,
            best.score * 100.0,
            best.url
        )),
        None => output.push_str("Best match: none\n\n"),
    }

    output.push_str("## Scores\n\n");
    output.push_str(
        "| repository | match | description | topics | language | name | health |\n",
    );
    output.push_str("|---|---|---|---|---|---|---|\n");
    for score in response.top(top) {
        output.push_str(&format!(
            "| {} | {:.1}% | {:.1}% | {:.1}% | {:.1}% | {:.1}% | {:.1} ({}) |\n",
            score.full_name(),
            score.score * 100.0,
            score.field_scores.description * 100.0,
            score.field_scores.topics * 100.0,
            score.field_scores.language * 100.0,
            score.field_scores.name * 100.0,
            score.health_score,
            score.health_band.as_str()
        ));
    }

    push_skipped(&mut output, &response.skipped);
    output
}

pub fn health_to_markdown(report: &HealthReport) -> String {
    let mut output = String::new();
    output.push_str("# Repository Health Report\n\n");
    if report.entries.is_empty() {
        output.push_str("- none\n");
        push_skipped(&mut output, &report.skipped);
        return output;
    }

    output.push_str("| repository | health | stars | forks | maintenance | issues | license |\n");
    output.push_str("|---|---|---|---|---|---|---|\n");
    for entry in &report.entries {
        output.push_str(&format!(
            "| {}/{} | {:.1} ({}) | {:.1} | {:.1} | {:.1} | {:.1} | {:.1} |\n",
            entry.owner,
            entry.repo_name,
            entry.health_score,
            entry.health_band.as_str(),
            entry.breakdown.stars,
            entry.breakdown.forks,
            entry.breakdown.maintenance,
            entry.breakdown.issues,
            entry.breakdown.license
        ));
    }
    push_skipped(&mut output, &report.skipped);
    output
}

fn push_skipped(output: &mut String, skipped: &[String]) {
    if skipped.is_empty() {
        return;
    }
    output.push_str("\n## Skipped\n\n");
    for label in skipped {
        output.push_str(&format!("- {label}\n"));
    }
}
