use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repomatch",
    version,
    about = "Rank repositories against a free-text profile and score their health"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project config file (defaults to ./repomatch.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a batch of repositories against a profile
    Rank(RankCommand),
    /// Score repository health without a profile
    Health(HealthCommand),
}

#[derive(Args)]
pub struct RankCommand {
    /// JSON batch file, or - for stdin
    pub batch: PathBuf,

    /// Profile text; overrides the batch file's profile
    #[arg(long, conflicts_with = "profile_file")]
    pub profile: Option<String>,

    /// File holding the profile text
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Show only the N best matches in the Markdown table
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct HealthCommand {
    /// JSON batch file, or - for stdin
    pub batch: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
