//! Tracing setup for the CLI.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level for the given `-v` count, or errors only with `--quiet`.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Installs a stderr subscriber; `RUST_LOG` directives refine the default level.
/// Stdout stays reserved for the report.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize tracing: {}", e);
    }
}
