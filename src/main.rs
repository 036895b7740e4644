mod cli;

use anyhow::Result;
use clap::Parser;
use gitwrap::commands::GlobalOptions;
use tracing_subscriber::EnvFilter;

use cli::dispatch::dispatch;
use cli::types::Cli;

/// Overrides the default log filter, e.g. `GITWRAP_LOG=gitwrap=trace`
const LOG_ENV_VAR: &str = "GITWRAP_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = GlobalOptions {
        repo: cli.repo,
        json: cli.json,
        config: cli.config,
        git: cli.git,
    };

    dispatch(&opts, cli.command)
}
