//! Common utilities and helper functions shared across commands.

use serde::Serialize;

use crate::{
    config::SweepstakeConfig,
    core::cache::StandingsCache,
    pulse::{load_or_fetch_standings, PulseApi, Standings, StandingsSource},
    sweepstake::PlayerPick,
    Result, SweepstakeError,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub config: SweepstakeConfig,
    pub api: PulseApi,
    pub refresh: bool,
    pub as_json: bool,
}

impl CommandContext {
    pub fn new(config: SweepstakeConfig, refresh: bool, as_json: bool) -> Result<Self> {
        let api = PulseApi::new(config.api_base.clone(), &config.user_agent)?;
        Ok(Self {
            config,
            api,
            refresh,
            as_json,
        })
    }

    /// Standings for the configured season, cached or fetched.
    ///
    /// Fails only when not even the fallback produced rows.
    pub async fn load_standings(&self, cache: &StandingsCache) -> Result<Standings> {
        let standings = load_or_fetch_standings(
            &self.api,
            cache,
            &self.config.season,
            self.refresh,
            self.config.cache_ttl,
        )
        .await;

        if standings.is_empty() {
            return Err(SweepstakeError::StandingsUnavailable {
                label: self.config.season.to_string(),
            });
        }
        Ok(standings)
    }

    pub fn load_roster(&self) -> Result<Vec<PlayerPick>> {
        self.config.load_roster()
    }
}

/// One-line description of where the standings came from.
pub fn source_banner(standings: &Standings) -> String {
    let updated = standings.fetched_at.format("%d %B %Y %H:%M:%S UTC");
    match &standings.source {
        StandingsSource::Live => format!("✓ Live standings (last updated: {})", updated),
        StandingsSource::PreSeason => format!(
            "✓ Pre-season: teams loaded, no matches played yet (last updated: {})",
            updated
        ),
        StandingsSource::Fallback { reason } => format!(
            "⚠ Live standings unavailable ({}). Showing the fallback snapshot.",
            reason
        ),
    }
}

/// Ordinal suffix for table positions: 1st, 2nd, 3rd, 11th, 22nd.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
