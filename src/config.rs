//! Runtime configuration: defaults, then environment, then CLI flags.

use chrono::Duration;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::types::SeasonLabel;
use crate::core::http::DEFAULT_USER_AGENT;
use crate::pulse::http::PULSE_BASE_URL;
use crate::sweepstake::roster::{default_roster, load_roster, PlayerPick};
use crate::{
    Result, API_BASE_ENV_VAR, CACHE_TTL_ENV_VAR, ROSTER_ENV_VAR, SEASON_ENV_VAR,
    USER_AGENT_ENV_VAR,
};

/// Cached standings stay valid for half an hour by default.
pub const DEFAULT_CACHE_TTL_SECS: i64 = 1800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepstakeConfig {
    pub season: SeasonLabel,
    /// Roster file; `None` means the built-in roster.
    pub roster_path: Option<PathBuf>,
    pub api_base: String,
    pub cache_ttl: Duration,
    pub user_agent: String,
}

impl Default for SweepstakeConfig {
    fn default() -> Self {
        Self {
            season: SeasonLabel::default(),
            roster_path: None,
            api_base: PULSE_BASE_URL.to_string(),
            cache_ttl: Duration::seconds(DEFAULT_CACHE_TTL_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SweepstakeConfig {
    /// Build from an arbitrary variable lookup. Malformed values keep the
    /// default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(season) = non_blank(lookup(SEASON_ENV_VAR)) {
            config.season = SeasonLabel::new(season);
        }
        if let Some(path) = non_blank(lookup(ROSTER_ENV_VAR)) {
            config.roster_path = Some(PathBuf::from(path));
        }
        if let Some(base) = non_blank(lookup(API_BASE_ENV_VAR)) {
            config.api_base = base;
        }
        if let Some(agent) = non_blank(lookup(USER_AGENT_ENV_VAR)) {
            config.user_agent = agent;
        }
        if let Some(ttl) = non_blank(lookup(CACHE_TTL_ENV_VAR)) {
            match ttl.parse::<i64>() {
                Ok(secs) if secs >= 0 => config.cache_ttl = Duration::seconds(secs),
                _ => warn!(
                    "Ignoring {}={:?}: expected a non-negative number of seconds",
                    CACHE_TTL_ENV_VAR, ttl
                ),
            }
        }

        config
    }

    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply command-line values on top; `None` keeps the current value.
    pub fn with_overrides(mut self, season: Option<SeasonLabel>, roster: Option<PathBuf>) -> Self {
        if let Some(season) = season {
            self.season = season;
        }
        if let Some(roster) = roster {
            self.roster_path = Some(roster);
        }
        self
    }

    /// The configured roster, or the built-in one.
    pub fn load_roster(&self) -> Result<Vec<PlayerPick>> {
        match &self.roster_path {
            Some(path) => load_roster(path),
            None => Ok(default_roster()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SweepstakeError;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SweepstakeConfig::from_lookup(|_| None);

        assert_eq!(config.season.as_str(), crate::DEFAULT_SEASON_LABEL);
        assert_eq!(config.roster_path, None);
        assert_eq!(config.api_base, PULSE_BASE_URL);
        assert_eq!(config.cache_ttl, Duration::seconds(1800));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_environment_values() {
        let config = SweepstakeConfig::from_lookup(lookup_from(&[
            (SEASON_ENV_VAR, " 2024/25 "),
            (ROSTER_ENV_VAR, "/tmp/roster.json"),
            (API_BASE_ENV_VAR, "http://localhost:9000/football"),
            (CACHE_TTL_ENV_VAR, "60"),
            (USER_AGENT_ENV_VAR, "sweepstake-bot"),
        ]));

        assert_eq!(config.season.as_str(), "2024/25");
        assert_eq!(config.roster_path, Some(PathBuf::from("/tmp/roster.json")));
        assert_eq!(config.api_base, "http://localhost:9000/football");
        assert_eq!(config.cache_ttl, Duration::seconds(60));
        assert_eq!(config.user_agent, "sweepstake-bot");
    }

    #[test]
    fn test_malformed_values_keep_defaults() {
        for bad in ["soon", "-5", "1.5"] {
            let config = SweepstakeConfig::from_lookup(lookup_from(&[
                (CACHE_TTL_ENV_VAR, bad),
                (SEASON_ENV_VAR, "  "),
            ]));
            assert_eq!(config.cache_ttl, Duration::seconds(DEFAULT_CACHE_TTL_SECS));
            assert_eq!(config.season, SeasonLabel::default());
        }
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = SweepstakeConfig::from_lookup(lookup_from(&[
            (SEASON_ENV_VAR, "2024/25"),
            (ROSTER_ENV_VAR, "/tmp/env.json"),
        ]))
        .with_overrides(
            Some(SeasonLabel::new("2023/24")),
            Some(PathBuf::from("/tmp/cli.json")),
        );

        assert_eq!(config.season.as_str(), "2023/24");
        assert_eq!(config.roster_path, Some(PathBuf::from("/tmp/cli.json")));

        let untouched = SweepstakeConfig::default().with_overrides(None, None);
        assert_eq!(untouched, SweepstakeConfig::default());
    }

    #[test]
    fn test_load_roster_default_and_file() {
        assert_eq!(SweepstakeConfig::default().load_roster().unwrap().len(), 12);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"player": "Amy", "team": "Chelsea"}}]"#).unwrap();
        let config = SweepstakeConfig::default().with_overrides(None, Some(file.path().into()));
        assert_eq!(config.load_roster().unwrap().len(), 1);

        let missing = SweepstakeConfig::default()
            .with_overrides(None, Some(PathBuf::from("/no/such/roster.json")));
        assert!(matches!(missing.load_roster(), Err(SweepstakeError::Io(_))));
    }
}
