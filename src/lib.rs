//! Premier League Bottoms Sweepstake Library
//!
//! Fetches the Premier League table (or falls back to a static snapshot),
//! turns table positions into sweepstake points and scores each player's
//! picks against it.
//!
//! ## Features
//!
//! - **Season Resolution**: Season label (`2025/26`) to the API's numeric season id
//! - **Standings with Fallback**: Live table, pre-season team list, or a 20-row snapshot
//! - **Scoring**: `N + 1 - position` per pick, summed per player, competition ranks
//! - **What-If**: Hypothetical positions for chosen teams, validated before use
//! - **Caching**: Standings kept in memory and on disk with an explicit expiry
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::Duration;
//! use pl_sweepstake::{
//!     core::GLOBAL_CACHE, pulse::{load_or_fetch_standings, PulseApi},
//!     sweepstake::{default_roster, score}, SeasonLabel,
//! };
//!
//! # async fn example() -> pl_sweepstake::Result<()> {
//! let api = PulseApi::new(pl_sweepstake::pulse::http::PULSE_BASE_URL, "my-agent")?;
//! let season = SeasonLabel::default();
//!
//! let standings =
//!     load_or_fetch_standings(&api, &GLOBAL_CACHE, &season, false, Duration::minutes(30)).await;
//! let board = score(&default_roster(), &standings);
//!
//! for player in &board.players {
//!     println!("{}. {} {}", player.rank, player.player, player.total);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SWEEPSTAKE_SEASON=2025/26
//! export SWEEPSTAKE_ROSTER=~/sweepstake/roster.json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod pulse;
pub mod sweepstake;

// Re-export commonly used types
pub use cli::types::{SeasonLabel, TeamOverride};
pub use config::SweepstakeConfig;
pub use error::{Result, SweepstakeError};
pub use pulse::types::{CompSeasonId, Standings, StandingsRow, StandingsSource};
pub use sweepstake::{Leaderboard, PlayerPick};

pub const DEFAULT_SEASON_LABEL: &str = "2025/26";

pub const SEASON_ENV_VAR: &str = "SWEEPSTAKE_SEASON";
pub const ROSTER_ENV_VAR: &str = "SWEEPSTAKE_ROSTER";
pub const API_BASE_ENV_VAR: &str = "SWEEPSTAKE_API_BASE";
pub const CACHE_TTL_ENV_VAR: &str = "SWEEPSTAKE_CACHE_TTL_SECS";
pub const USER_AGENT_ENV_VAR: &str = "SWEEPSTAKE_USER_AGENT";
