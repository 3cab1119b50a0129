use anyhow::Context;
use clap::Parser;

use jobtrack::{open_repository, JobStore};

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("jobtrack error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let config =
        jobtrack::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    jobtrack::logging::init_logging(&config.logging, cli.level_override())?;

    if let cli::Commands::Ports = cli.command {
        commands::ports::handle();
        return Ok(());
    }

    let repo = open_repository(&config.storage).context("failed to open job storage")?;
    let mut store = JobStore::open(repo).context("failed to load jobs")?;

    commands::dispatch(cli.command, &mut store, &config)
}
