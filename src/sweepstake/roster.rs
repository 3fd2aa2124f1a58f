//! Player picks: the baked-in roster and JSON roster files.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Result, SweepstakeError};

/// One player's claim on one team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPick {
    pub player: String,
    pub team: String,
}

impl PlayerPick {
    pub fn new(player: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            team: team.into(),
        }
    }
}

const DEFAULT_PICKS: [(&str, &str); 12] = [
    ("Vosey", "Bournemouth"),
    ("Vosey", "Leeds United"),
    ("Dom", "Brentford"),
    ("Dom", "Sunderland"),
    ("Chris", "Wolverhampton Wanderers"),
    ("Chris", "Fulham"),
    ("Sam", "Burnley"),
    ("Sam", "Tottenham Hotspur"),
    ("Adam", "West Ham United"),
    ("Adam", "Manchester United"),
    ("Sean", "Everton"),
    ("Sean", "Crystal Palace"),
];

/// The roster used when no roster file is configured.
pub fn default_roster() -> Vec<PlayerPick> {
    DEFAULT_PICKS
        .iter()
        .map(|&(player, team)| PlayerPick::new(player, team))
        .collect()
}

/// Accepted roster file shapes.
///
/// `{ "Player": ["Team A", "Team B"] }` lists players alphabetically;
/// the array form keeps file order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Picks(Vec<PlayerPick>),
    ByPlayer(BTreeMap<String, Vec<String>>),
}

impl RosterFile {
    fn into_picks(self) -> Vec<PlayerPick> {
        match self {
            RosterFile::Picks(picks) => picks,
            RosterFile::ByPlayer(by_player) => by_player
                .into_iter()
                .flat_map(|(player, teams)| {
                    teams
                        .into_iter()
                        .map(move |team| PlayerPick::new(player.clone(), team))
                })
                .collect(),
        }
    }
}

/// Parse roster JSON. Blank names are dropped; an empty result is an error.
pub fn parse_roster(json: &str) -> Result<Vec<PlayerPick>> {
    let file: RosterFile = serde_json::from_str(json)?;

    let picks: Vec<PlayerPick> = file
        .into_picks()
        .into_iter()
        .filter_map(|pick| {
            let player = pick.player.trim();
            let team = pick.team.trim();
            if player.is_empty() || team.is_empty() {
                warn!("Skipping roster entry with a blank name: {:?}", pick);
                None
            } else {
                Some(PlayerPick::new(player, team))
            }
        })
        .collect();

    if picks.is_empty() {
        return Err(SweepstakeError::EmptyRoster);
    }
    Ok(picks)
}

/// Load a roster file from disk.
pub fn load_roster(path: &Path) -> Result<Vec<PlayerPick>> {
    let content = fs::read_to_string(path)?;
    let picks = parse_roster(&content)?;
    info!("Loaded {} picks from {}", picks.len(), path.display());
    Ok(picks)
}

/// Distinct players in order of first appearance.
pub fn players(picks: &[PlayerPick]) -> Vec<&str> {
    let mut seen = HashSet::new();
    picks
        .iter()
        .map(|p| p.player.as_str())
        .filter(|player| seen.insert(*player))
        .collect()
}

/// Every team that at least one player picked.
pub fn picked_teams(picks: &[PlayerPick]) -> HashSet<&str> {
    picks.iter().map(|p| p.team.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_roster_shape() {
        let roster = default_roster();
        assert_eq!(roster.len(), 12);
        assert_eq!(
            players(&roster),
            vec!["Vosey", "Dom", "Chris", "Sam", "Adam", "Sean"]
        );
        assert!(picked_teams(&roster).contains("Crystal Palace"));
        assert_eq!(picked_teams(&roster).len(), 12);
    }

    #[test]
    fn test_parse_roster_by_player() {
        let picks = parse_roster(r#"{"Zed": ["Arsenal"], "Amy": ["Chelsea", "Everton"]}"#).unwrap();
        assert_eq!(
            picks,
            vec![
                PlayerPick::new("Amy", "Chelsea"),
                PlayerPick::new("Amy", "Everton"),
                PlayerPick::new("Zed", "Arsenal"),
            ]
        );
    }

    #[test]
    fn test_parse_roster_pick_list_keeps_order() {
        let picks = parse_roster(
            r#"[
                {"player": "Zed", "team": " Arsenal "},
                {"player": "Amy", "team": "Chelsea"},
                {"player": " ", "team": "Everton"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            picks,
            vec![PlayerPick::new("Zed", "Arsenal"), PlayerPick::new("Amy", "Chelsea")]
        );
    }

    #[test]
    fn test_parse_roster_errors() {
        assert!(matches!(parse_roster("{}"), Err(SweepstakeError::EmptyRoster)));
        assert!(matches!(parse_roster("[]"), Err(SweepstakeError::EmptyRoster)));
        assert!(matches!(
            parse_roster(r#"{"Amy": "Chelsea"}"#),
            Err(SweepstakeError::Json(_))
        ));
        assert!(matches!(parse_roster("not json"), Err(SweepstakeError::Json(_))));
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Amy": ["Chelsea", "Everton"]}}"#).unwrap();

        let picks = load_roster(file.path()).unwrap();
        assert_eq!(picks.len(), 2);
    }

    #[test]
    fn test_load_roster_missing_file() {
        let result = load_roster(Path::new("/definitely/not/here/roster.json"));
        assert!(matches!(result, Err(SweepstakeError::Io(_))));
    }

    #[test]
    fn test_players_dedupes_in_first_appearance_order() {
        let picks = vec![
            PlayerPick::new("Bob", "A"),
            PlayerPick::new("Alice", "B"),
            PlayerPick::new("Bob", "C"),
        ];
        assert_eq!(players(&picks), vec!["Bob", "Alice"]);
    }
}
