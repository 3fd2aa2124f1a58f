//! Scoring engine: picks joined against standings, summed per player.

use serde::Serialize;
use tracing::warn;

use super::roster::{players, PlayerPick};
use crate::pulse::types::Standings;


/// A pick after the standings join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredPick {
    pub player: String,
    pub team: String,
    /// Table position used for the value; 0 when the team is missing.
    pub position: u32,
    pub point_value: u32,
    pub league_points: i64,
    pub found: bool,
    /// Position came from a what-if override.
    pub overridden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crest_url: Option<String>,
}

/// A player's picks and total, with competition ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTotal {
    pub player: String,
    pub rank: usize,
    pub total: u32,
    pub picks: Vec<ScoredPick>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    /// Sorted by total, highest first; ties keep roster order.
    pub players: Vec<PlayerTotal>,
    /// Everyone on the highest total.
    pub leaders: Vec<String>,
    /// Everyone on the lowest total, empty when all players are level.
    pub wooden_spoon: Vec<String>,
    /// Picks whose team is not in the standings.
    pub missing: Vec<PlayerPick>,
    pub table_size: u32,
}

impl Leaderboard {
    pub fn is_all_zero(&self) -> bool {
        self.players.iter().all(|p| p.total == 0)
    }

    pub fn player(&self, name: &str) -> Option<&PlayerTotal> {
        self.players.iter().find(|p| p.player == name)
    }

    /// Player names, best first.
    pub fn ranked_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.player.as_str()).collect()
    }
}

/// Join one pick against the standings.
pub fn score_pick(pick: &PlayerPick, standings: &Standings) -> ScoredPick {
    match standings.find(&pick.team) {
        Some(row) => ScoredPick {
            player: pick.player.clone(),
            team: pick.team.clone(),
            position: row.position,
            point_value: standings.point_value_of(row),
            league_points: row.league_points,
            found: true,
            overridden: false,
            crest_url: row.crest_url.clone(),
        },
        None => ScoredPick {
            player: pick.player.clone(),
            team: pick.team.clone(),
            position: 0,
            point_value: 0,
            league_points: 0,
            found: false,
            overridden: false,
            crest_url: None,
        },
    }
}

/// Totals, ranks, leaders and missing teams from already-scored picks.
///
/// Shared by the live scoring path and the what-if simulator.
pub(crate) fn aggregate(
    picks: &[PlayerPick],
    scored: Vec<ScoredPick>,
    table_size: u32,
) -> Leaderboard {
    let missing: Vec<PlayerPick> = scored
        .iter()
        .filter(|s| !s.found)
        .map(|s| PlayerPick::new(s.player.clone(), s.team.clone()))
        .collect();
    for m in &missing {
        warn!(
            "Could not find standings data for {} (picked by {}); scoring 0",
            m.team, m.player
        );
    }

    let mut totals: Vec<PlayerTotal> = players(picks)
        .into_iter()
        .map(|player| {
            let picks: Vec<ScoredPick> = scored
                .iter()
                .filter(|s| s.player == player)
                .cloned()
                .collect();
            PlayerTotal {
                player: player.to_string(),
                rank: 0,
                total: picks.iter().map(|p| p.point_value).sum(),
                picks,
            }
        })
        .collect();

    // Stable: ties keep roster order.
    totals.sort_by(|a, b| b.total.cmp(&a.total));

    // Competition ranking: 1, 1, 3, ...
    for i in 0..totals.len() {
        totals[i].rank = if i > 0 && totals[i - 1].total == totals[i].total {
            totals[i - 1].rank
        } else {
            i + 1
        };
    }

    let max = totals.iter().map(|t| t.total).max();
    let min = totals.iter().map(|t| t.total).min();
    let names_on = |value: Option<u32>| -> Vec<String> {
        totals
            .iter()
            .filter(|t| Some(t.total) == value)
            .map(|t| t.player.clone())
            .collect()
    };
    let leaders = names_on(max);
    let wooden_spoon = if min < max { names_on(min) } else { Vec::new() };

    Leaderboard {
        players: totals,
        leaders,
        wooden_spoon,
        missing,
        table_size,
    }
}

/// Score every pick against `standings` and build the leaderboard.
pub fn score(picks: &[PlayerPick], standings: &Standings) -> Leaderboard {
    let scored = picks.iter().map(|p| score_pick(p, standings)).collect();
    aggregate(picks, scored, standings.table_size)
}
