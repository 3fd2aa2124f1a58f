//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{SeasonLabel, TeamOverride};

/// Arguments shared by every subcommand
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Season label (e.g. 2025/26). Overrides `SWEEPSTAKE_SEASON`.
    #[clap(long, short, global = true)]
    pub season: Option<SeasonLabel>,

    /// Roster JSON file. Overrides `SWEEPSTAKE_ROSTER`.
    #[clap(long, short, global = true)]
    pub roster: Option<PathBuf>,

    /// Ignore cached standings and fetch again.
    #[clap(long, global = true)]
    pub refresh: bool,

    /// Output results as JSON instead of text.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the league table with the sweepstake value of every position
    Standings,

    /// Show each player's picks, totals and ranks
    Leaderboard {
        /// Skip the banter line.
        #[clap(long)]
        no_banter: bool,
    },

    /// Leaderboard with hypothetical positions for some teams.
    ///
    /// Every other team keeps its current value. Positions must be distinct
    /// and inside the table.
    WhatIf {
        /// Hypothetical position (repeatable): `--set "Fulham=5"`.
        #[clap(long = "set", required = true)]
        overrides: Vec<TeamOverride>,
    },

    /// Drop cached standings for the season (or every season with `--all`)
    ClearCache {
        #[clap(long)]
        all: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "pl-sweepstake",
    about = "Premier League bottoms sweepstake",
    version
)]
pub struct Sweepstake {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
