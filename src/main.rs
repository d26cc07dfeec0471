mod cli;

use chrono::Utc;
use clap::Parser;
use repomatch::types::report::RankingStatus;
use repomatch::{config, loader, logging, report, MatchError, RankingService};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NO_RESULTS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run(cli: cli::Cli) -> Result<i32, MatchError> {
    let root = std::env::current_dir()?;
    let cfg = config::load_config(&root, cli.config.as_deref())?;
    let service = RankingService::new(&cfg);

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let batch = loader::load_batch(&cmd.batch)?;
            let profile = resolve_profile(&cmd, batch.profile)?;
            let response = service.rank(&profile, batch.records, Utc::now())?;

            let rendered = report::render(&response, output_format(&cmd.format), cmd.top)?;
            println!("{rendered}");

            match response.status {
                RankingStatus::Ranked => Ok(exit_code::SUCCESS),
                RankingStatus::NoRepositories => {
                    eprintln!("warning: no repositories to rank in {}", cmd.batch.display());
                    Ok(exit_code::NO_RESULTS)
                }
            }
        }
        cli::Commands::Health(cmd) => {
            let batch = loader::load_batch(&cmd.batch)?;
            let health = service.health(batch.records, Utc::now())?;

            let rendered = report::render_health(&health, output_format(&cmd.format))?;
            println!("{rendered}");

            if health.entries.is_empty() {
                eprintln!("warning: no repositories to score in {}", cmd.batch.display());
                Ok(exit_code::NO_RESULTS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

/// `--profile` wins over `--profile-file`, which wins over the batch file.
fn resolve_profile(
    cmd: &cli::RankCommand,
    from_batch: Option<String>,
) -> Result<String, MatchError> {
    if let Some(profile) = &cmd.profile {
        return Ok(profile.clone());
    }
    if let Some(path) = &cmd.profile_file {
        return Ok(std::fs::read_to_string(path)?);
    }
    from_batch.ok_or_else(|| {
        MatchError::InvalidProfile(
            "no profile given; pass --profile, --profile-file, or a \"profile\" field in the batch"
                .to_string(),
        )
    })
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
