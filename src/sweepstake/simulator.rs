//! What-if simulator: hypothetical positions for some teams, current
//! standings for the rest.
//!
//! Only the overridden teams change value. Teams displaced by an override
//! keep their current position, so two teams can briefly share a position
//! in the simulated picture.

use std::collections::BTreeMap;
use tracing::{info, warn};

use super::roster::{picked_teams, PlayerPick};
use super::scoring::{aggregate, score_pick, Leaderboard};
use crate::cli::types::TeamOverride;
use crate::error::{PositionConflict, Result, SweepstakeError};
use crate::pulse::types::{point_value, Standings};

#[cfg(test)]
mod tests;

/// Check an override set against a table of `table_size` teams.
///
/// Repeated overrides for one team collapse to the last one given. Every
/// position must be in `1..=table_size` and no two teams may share one.
/// Returns team -> position.
pub fn validate_overrides(
    overrides: &[TeamOverride],
    table_size: u32,
) -> Result<BTreeMap<String, u32>> {
    let by_team: BTreeMap<String, u32> = overrides
        .iter()
        .map(|o| (o.team.clone(), o.position))
        .collect();

    if let Some((team, &position)) = by_team
        .iter()
        .find(|&(_, &position)| position == 0 || position > table_size)
    {
        return Err(SweepstakeError::PositionOutOfRange {
            team: team.clone(),
            position,
            table_size,
        });
    }

    let mut by_position: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for (team, &position) in &by_team {
        by_position.entry(position).or_default().push(team.clone());
    }

    let conflicts: Vec<PositionConflict> = by_position
        .into_iter()
        .filter(|(_, teams)| teams.len() > 1)
        .map(|(position, teams)| PositionConflict { position, teams })
        .collect();
    if !conflicts.is_empty() {
        return Err(SweepstakeError::PositionConflict { conflicts });
    }

    Ok(by_team)
}

/// Leaderboard under a set of hypothetical positions.
///
/// Nothing is recomputed unless the whole override set is valid.
pub fn simulate(
    overrides: &[TeamOverride],
    standings: &Standings,
    picks: &[PlayerPick],
) -> Result<Leaderboard> {
    let table_size = standings.table_size;
    let validated = validate_overrides(overrides, table_size)?;

    let picked = picked_teams(picks);
    for team in validated.keys().filter(|t| !picked.contains(t.as_str())) {
        warn!("Ignoring override for {}: no player picked that team", team);
    }

    let scored = picks
        .iter()
        .map(|pick| {
            let mut scored = score_pick(pick, standings);
            if let Some(&position) = validated.get(&pick.team) {
                scored.position = position;
                scored.point_value = point_value(position, table_size);
                scored.found = true;
                scored.overridden = true;
            }
            scored
        })
        .collect();

    info!("Simulated {} override(s)", validated.len());
    Ok(aggregate(picks, scored, table_size))
}
