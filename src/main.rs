//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use pl_sweepstake::{
    cli::{Commands, Sweepstake},
    commands::{
        clear_cache::handle_clear_cache, common::CommandContext,
        leaderboard::handle_leaderboard, standings::handle_standings, what_if::handle_what_if,
    },
    config::SweepstakeConfig,
    core::GLOBAL_CACHE,
};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Sweepstake::parse();
    init_logging(app.common.verbose);

    let config = SweepstakeConfig::from_env()
        .with_overrides(app.common.season.clone(), app.common.roster.clone());
    let cache = &*GLOBAL_CACHE;

    let ctx = CommandContext::new(config, app.common.refresh, app.common.json)
        .context("Failed to build the HTTP client")?;

    match app.command {
        Commands::Standings => handle_standings(&ctx, cache).await?,
        Commands::Leaderboard { no_banter } => handle_leaderboard(&ctx, cache, no_banter).await?,
        Commands::WhatIf { overrides } => handle_what_if(&ctx, cache, &overrides).await?,
        Commands::ClearCache { all } => handle_clear_cache(cache, &ctx.config.season, all)
            .context("Failed to clear the standings cache")?,
    }

    Ok(())
}
