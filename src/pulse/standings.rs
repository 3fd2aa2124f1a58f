//! Standings extraction with static fallback.
//!
//! Nothing in here returns an error to its caller: every failure on the way
//! (resolution, network, status, parse, empty table) ends in the fallback
//! snapshot, tagged with the reason so the caller can surface it.

use serde_json::Value;
use tracing::{error, info, warn};

use super::fallback::{crest_url, fallback_standings, opta_id};
use super::http::PulseApi;
use super::probe::{as_integer, first_present, first_str, items, lookup, FieldPath};
use super::season::resolve_season;
use super::types::{CompSeasonId, SeasonDescriptor, Standings, StandingsRow, StandingsSource};
use crate::cli::types::SeasonLabel;
use crate::error::{Result, SweepstakeError};


const TABLES: &[FieldPath] = &[&["tables"], &["standings"]];
const TABLE_TYPE: &[FieldPath] = &[&["type"], &["stage", "type"]];
const ENTRIES: &[FieldPath] = &[&["entries"]];
const POSITION: &[FieldPath] = &[&["position"], &["rank"]];
const TEAM_NAME: &[FieldPath] = &[
    &["team", "name"],
    &["team", "club", "name"],
    &["club", "name"],
    &["team", "displayName"],
];
const POINTS: &[FieldPath] = &[&["overall", "points"], &["points"], &["stats", "points"]];
const OPTA: &[FieldPath] = &[&["team", "altIds", "opta"], &["club", "altIds", "opta"]];

const STAT_VALUE: &[FieldPath] = &[&["value"], &["displayValue"]];

const POINTS_STAT_NAMES: [&str; 3] = ["points", "pts", "Points"];

/// The overall table, or the first table when none is labelled as such.
fn select_table(payload: &Value) -> Option<&Value> {
    let tables = items(payload, TABLES);
    tables
        .iter()
        .copied()
        .find(|t| {
            first_str(t, TABLE_TYPE)
                .map(|ty| matches!(ty.to_uppercase().as_str(), "TOTAL" | "LEAGUE"))
                .unwrap_or(false)
        })
        .or_else(|| tables.first().copied())
}

/// League points for an entry; anything unreadable counts as 0.
fn entry_points(entry: &Value) -> i64 {
    if let Some(points) = first_present(entry, POINTS) {
        return as_integer(points).unwrap_or(0);
    }

    lookup(entry, &["stats"])
        .and_then(Value::as_array)
        .and_then(|stats| {
            stats.iter().find(|s| {
                lookup(s, &["name"])
                    .and_then(Value::as_str)
                    .is_some_and(|n| POINTS_STAT_NAMES.contains(&n))
            })
        })
        .and_then(|stat| first_present(stat, STAT_VALUE))
        .and_then(as_integer)
        .unwrap_or(0)
}

fn entry_crest(entry: &Value, team: &str) -> Option<String> {
    match opta_id(team) {
        Some(id) => crest_url(id),
        None => first_str(entry, OPTA).and_then(|id| crest_url(&id)),
    }
}

/// First probed position of at least 1. A zero position counts as missing.
fn entry_position(entry: &Value) -> Option<u32> {
    POSITION
        .iter()
        .filter_map(|path| lookup(entry, path))
        .filter_map(as_integer)
        .find(|&p| p >= 1)
        .and_then(|p| u32::try_from(p).ok())
}

/// One table row, or `None` when position or team name is missing.
fn parse_entry(entry: &Value) -> Option<StandingsRow> {
    let position = entry_position(entry)?;
    let team = first_str(entry, TEAM_NAME)?;

    Some(StandingsRow {
        position,
        league_points: entry_points(entry),
        crest_url: entry_crest(entry, &team),
        team,
    })
}

/// Every valid row of the preferred table in a standings payload.
pub fn parse_standings_payload(payload: &Value) -> Vec<StandingsRow> {
    let Some(table) = select_table(payload) else {
        return Vec::new();
    };

    items(table, ENTRIES)
        .into_iter()
        .filter(|e| e.is_object())
        .filter_map(parse_entry)
        .collect()
}

/// Pre-season stand-in: every registered team at position 0, worth 0.
pub fn pre_season_standings(team_names: Vec<String>) -> Standings {
    let rows = team_names
        .into_iter()
        .map(|team| {
            let crest = opta_id(&team).and_then(crest_url);
            StandingsRow {
                position: 0,
                team,
                league_points: 0,
                crest_url: crest,
            }
        })
        .collect();
    Standings::from_rows(rows, StandingsSource::PreSeason)
}

/// Resolve the season id for `label` from the season-list endpoints.
pub async fn resolve_comp_season(api: &PulseApi, label: &SeasonLabel) -> Option<CompSeasonId> {
    let descriptors: Vec<SeasonDescriptor> = api
        .get_comp_seasons()
        .await
        .iter()
        .map(SeasonDescriptor::from_value)
        .collect();
    info!("Loaded {} season descriptors", descriptors.len());

    resolve_season(label, &descriptors)
}

async fn try_fetch_standings(
    api: &PulseApi,
    id: &CompSeasonId,
    label: &SeasonLabel,
) -> Result<Standings> {
    let comp_season = id
        .as_resolved()
        .ok_or_else(|| SweepstakeError::SeasonUnresolved {
            label: label.to_string(),
        })?;

    let payload = api.get_standings(comp_season).await?;
    let rows = parse_standings_payload(&payload);
    if !rows.is_empty() {
        info!("Fetched {} standings rows for season id {}", rows.len(), comp_season);
        return Ok(Standings::from_rows(rows, StandingsSource::Live));
    }

    let teams = api.get_comp_season_teams(comp_season).await;
    if teams.is_empty() {
        return Err(SweepstakeError::NoStandings {
            label: label.to_string(),
        });
    }

    info!(
        "{} pre-season: {} teams loaded, table not yet populated",
        label,
        teams.len()
    );
    Ok(pre_season_standings(teams))
}

/// Standings for a resolved season id, or the fallback snapshot.
pub async fn fetch_standings(api: &PulseApi, id: &CompSeasonId, label: &SeasonLabel) -> Standings {
    match try_fetch_standings(api, id, label).await {
        Ok(standings) => standings,
        Err(e) => {
            warn!("Using fallback standings for {}: {}", label, e);
            fallback_standings(e.to_string())
        }
    }
}

/// Full pipeline for a season label: resolve, fetch, fall back.
pub async fn fetch_season_standings(api: &PulseApi, label: &SeasonLabel) -> Standings {
    match resolve_comp_season(api, label).await {
        Some(id) => fetch_standings(api, &id, label).await,
        None => {
            let e = SweepstakeError::SeasonUnresolved {
                label: label.to_string(),
            };
            error!("{}", e);
            fallback_standings(e.to_string())
        }
    }
}
