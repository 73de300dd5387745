use anyhow::Result;
use clap::Parser;
use molotov::{CleanOptions, Environment, Platform, SystemCommandRunner, DEFAULT_THRESHOLD_DAYS};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Burn temp and cache files nobody has touched in a long time
#[derive(Parser, Debug)]
#[command(name = "molotov", version, about)]
struct Cli {
    /// Age threshold in days since last access
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_DAYS)]
    days: u64,

    /// List what would be burned without deleting anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Do not empty the recycle bin / trash or purge packages afterwards
    #[arg(long)]
    skip_post_clean: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout belongs to the operator prompt
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("{:?}", cli);

    let options = CleanOptions {
        dry_run: cli.dry_run,
        skip_post_cleanup: cli.skip_post_clean,
        ..CleanOptions::with_days(cli.days)
    };

    let summary = molotov::run(
        &Platform::detect(),
        &Environment::from_env(),
        &options,
        Box::new(SystemCommandRunner),
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    debug!("{:?}", summary);

    Ok(())
}
