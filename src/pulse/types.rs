use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Season identifier as understood by the standings source.
///
/// Remote payloads carry ids as integers, floats or strings. Anything that
/// has no numeric reading is kept verbatim as `Unresolved` so the caller can
/// report it instead of sending a bad id upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompSeasonId {
    Resolved(i64),
    Unresolved(String),
}

impl CompSeasonId {
    /// The numeric id, if this is one the API can be queried with.
    pub fn as_resolved(&self) -> Option<i64> {
        match self {
            CompSeasonId::Resolved(id) if *id > 0 => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for CompSeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompSeasonId::Resolved(id) => write!(f, "{}", id),
            CompSeasonId::Unresolved(raw) => write!(f, "{}", raw),
        }
    }
}

/// One season record probed out of a season-list payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonDescriptor {
    pub label: Option<String>,
    pub id: Option<CompSeasonId>,
    pub start_date: Option<NaiveDateTime>,
    pub is_current: bool,
}

/// A single row of the league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based table position; 0 before the season has started.
    pub position: u32,
    pub team: String,
    pub league_points: i64,
    #[serde(default)]
    pub crest_url: Option<String>,
}

impl StandingsRow {
    pub fn new(position: u32, team: impl Into<String>, league_points: i64) -> Self {
        Self {
            position,
            team: team.into(),
            league_points,
            crest_url: None,
        }
    }
}

/// Where a standings set came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StandingsSource {
    Live,
    /// The season exists but no matches have been played yet.
    PreSeason,
    /// Degraded mode: the static snapshot stands in for live data.
    Fallback { reason: String },
}

impl StandingsSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, StandingsSource::Fallback { .. })
    }
}

/// Sweepstake value of a table position: `(N + 1) - position`.
///
/// Positions outside `1..=N` (including the pre-season 0) are worth nothing.
pub fn point_value(position: u32, table_size: u32) -> u32 {
    if position == 0 || position > table_size {
        0
    } else {
        table_size + 1 - position
    }
}

/// A complete standings set, ordered by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
    pub table_size: u32,
    pub source: StandingsSource,
    pub fetched_at: DateTime<Utc>,
}

impl Standings {
    /// Build a standings set, sorting rows by position.
    ///
    /// The table size is the larger of the row count and the highest
    /// position seen, so a skipped malformed entry does not shift values.
    pub fn from_rows(mut rows: Vec<StandingsRow>, source: StandingsSource) -> Self {
        rows.sort_by_key(|r| r.position);
        let max_position = rows.iter().map(|r| r.position).max().unwrap_or(0);
        let table_size = (rows.len() as u32).max(max_position);

        Self {
            rows,
            table_size,
            source,
            fetched_at: Utc::now(),
        }
    }

    pub fn find(&self, team: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|r| r.team == team)
    }

    pub fn point_value_of(&self, row: &StandingsRow) -> u32 {
        point_value(row.position, self.table_size)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
