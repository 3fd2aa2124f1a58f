//! What-if command implementation

use serde::Serialize;

use super::common::{print_json, source_banner, CommandContext};
use super::leaderboard::render_leaderboard;
use crate::{
    cli::types::TeamOverride,
    core::cache::StandingsCache,
    sweepstake::{simulate, Leaderboard},
    Result, StandingsSource,
};

#[derive(Debug, Serialize)]
pub struct WhatIfView<'a> {
    pub season: &'a str,
    pub source: &'a StandingsSource,
    pub overrides: &'a [TeamOverride],
    #[serde(flatten)]
    pub leaderboard: &'a Leaderboard,
}

/// Handle the what-if command
///
/// An invalid override set (out of range or conflicting positions) is
/// returned as an error before anything is printed.
pub async fn handle_what_if(
    ctx: &CommandContext,
    cache: &StandingsCache,
    overrides: &[TeamOverride],
) -> Result<()> {
    let picks = ctx.load_roster()?;
    let standings = ctx.load_standings(cache).await?;

    let board = simulate(overrides, &standings, &picks)?;
    let season = ctx.config.season.as_str();

    if ctx.as_json {
        print_json(&WhatIfView {
            season,
            source: &standings.source,
            overrides,
            leaderboard: &board,
        })?;
    } else {
        // tarpaulin::skip - console output
        let applied: Vec<String> = overrides.iter().map(|o| o.to_string()).collect();
        println!("What-if {}: {}", season, applied.join(", "));
        println!("{}\n", source_banner(&standings));
        print!("{}", render_leaderboard(&board));
    }

    Ok(())
}
