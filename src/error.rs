//! Error types for the Premier League sweepstake CLI

use std::fmt;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SweepstakeError>;

/// One clashing position inside a what-if override set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionConflict {
    pub position: u32,
    pub teams: Vec<String>,
}

impl fmt::Display for PositionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} assigned to {} teams: {}",
            self.position,
            self.teams.len(),
            self.teams.join(", ")
        )
    }
}

fn join_conflicts(conflicts: &[PositionConflict]) -> String {
    conflicts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum SweepstakeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Standings source returned HTTP {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Could not resolve a Premier League season id for {label}")]
    SeasonUnresolved { label: String },

    #[error("No league entries or team list returned for {label}")]
    NoStandings { label: String },

    #[error("Could not load league standings data for {label}")]
    StandingsUnavailable { label: String },

    #[error("Invalid season label: {label:?}")]
    InvalidSeasonLabel { label: String },

    #[error("Invalid what-if override {input:?} (expected \"Team Name=POSITION\")")]
    InvalidOverride { input: String },

    #[error("Position {position} for {team} is outside the table (1-{table_size})")]
    PositionOutOfRange {
        team: String,
        position: u32,
        table_size: u32,
    },

    #[error("Position conflicts detected: {}", join_conflicts(.conflicts))]
    PositionConflict { conflicts: Vec<PositionConflict> },

    #[error("Roster is empty")]
    EmptyRoster,
}
