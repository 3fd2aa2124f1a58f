//! Unit tests for the what-if simulator

use super::*;
use crate::pulse::types::{StandingsRow, StandingsSource};
use crate::sweepstake::scoring::score;

fn table() -> Standings {
    let rows = (1..=20)
        .map(|p| StandingsRow::new(p, format!("Team {}", p), 0))
        .collect();
    Standings::from_rows(rows, StandingsSource::Live)
}

fn picks() -> Vec<PlayerPick> {
    vec![
        PlayerPick::new("Alice", "Team 1"),
        PlayerPick::new("Alice", "Team 20"),
        PlayerPick::new("Bob", "Team 10"),
        PlayerPick::new("Cara", "Team 5"),
    ]
}

fn set(team: &str, position: u32) -> TeamOverride {
    TeamOverride::new(team, position)
}

#[cfg(test)]
mod validate_tests {
    use super::*;

    #[test]
    fn test_distinct_positions_pass() {
        let validated = validate_overrides(&[set("Team 10", 1), set("Team 1", 10)], 20).unwrap();
        assert_eq!(validated.get("Team 10"), Some(&1));
        assert_eq!(validated.get("Team 1"), Some(&10));
    }

    #[test]
    fn test_conflict_lists_every_clash() {
        let err = validate_overrides(
            &[
                set("Team 3", 1),
                set("Team 2", 1),
                set("Team 9", 4),
                set("Team 8", 4),
                set("Team 7", 4),
                set("Team 6", 6),
            ],
            20,
        )
        .unwrap_err();

        match err {
            SweepstakeError::PositionConflict { conflicts } => {
                assert_eq!(
                    conflicts,
                    vec![
                        PositionConflict {
                            position: 1,
                            teams: vec!["Team 2".into(), "Team 3".into()],
                        },
                        PositionConflict {
                            position: 4,
                            teams: vec!["Team 7".into(), "Team 8".into(), "Team 9".into()],
                        },
                    ]
                );
            }
            other => panic!("Expected PositionConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range() {
        for position in [0, 21] {
            match validate_overrides(&[set("Team 3", position)], 20) {
                Err(SweepstakeError::PositionOutOfRange {
                    team,
                    position: p,
                    table_size,
                }) => {
                    assert_eq!(team, "Team 3");
                    assert_eq!(p, position);
                    assert_eq!(table_size, 20);
                }
                other => panic!("Expected PositionOutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_later_override_for_same_team_wins() {
        let validated =
            validate_overrides(&[set("Team 3", 1), set("Team 3", 2), set("Team 4", 1)], 20)
                .unwrap();
        assert_eq!(validated.get("Team 3"), Some(&2));
        assert_eq!(validated.get("Team 4"), Some(&1));
    }

    #[test]
    fn test_empty_override_set() {
        assert!(validate_overrides(&[], 20).unwrap().is_empty());
    }
}

#[cfg(test)]
mod simulate_tests {
    use super::*;

    #[test]
    fn test_no_overrides_matches_live_scoring() {
        let standings = table();
        let picks = picks();
        assert_eq!(simulate(&[], &standings, &picks).unwrap(), score(&picks, &standings));
    }

    #[test]
    fn test_only_affected_players_change() {
        let standings = table();
        let picks = picks();
        let before = score(&picks, &standings);

        let after = simulate(&[set("Team 10", 2)], &standings, &picks).unwrap();

        assert_eq!(after.player("Bob").unwrap().total, 19);
        assert_eq!(
            after.player("Alice").unwrap().total,
            before.player("Alice").unwrap().total
        );
        assert_eq!(
            after.player("Cara").unwrap().total,
            before.player("Cara").unwrap().total
        );
        assert_eq!(after.leaders, vec!["Alice"]);
        assert_eq!(after.ranked_names(), vec!["Alice", "Bob", "Cara"]);
    }

    #[test]
    fn test_overridden_pick_is_flagged() {
        let after = simulate(&[set("Team 20", 1)], &table(), &picks()).unwrap();
        let alice = after.player("Alice").unwrap();

        let team20 = alice.picks.iter().find(|p| p.team == "Team 20").unwrap();
        assert!(team20.overridden);
        assert_eq!((team20.position, team20.point_value), (1, 20));
        // Team 1 is displaced in reality but keeps its value here.
        let team1 = alice.picks.iter().find(|p| p.team == "Team 1").unwrap();
        assert!(!team1.overridden);
        assert_eq!(team1.point_value, 20);
        assert_eq!(alice.total, 40);
    }

    #[test]
    fn test_conflict_applies_nothing() {
        let result = simulate(&[set("Team 10", 1), set("Team 5", 1)], &table(), &picks());
        assert!(matches!(result, Err(SweepstakeError::PositionConflict { .. })));
    }

    #[test]
    fn test_unpicked_team_override_is_ignored() {
        let standings = table();
        let picks = picks();

        let after = simulate(&[set("Team 15", 1)], &standings, &picks).unwrap();
        assert_eq!(after, score(&picks, &standings));
    }

    #[test]
    fn test_override_covers_missing_team() {
        let standings = table();
        let picks = vec![
            PlayerPick::new("Alice", "Atlantis FC"),
            PlayerPick::new("Bob", "Team 20"),
        ];

        let live = score(&picks, &standings);
        assert_eq!(live.missing.len(), 1);

        let after = simulate(&[set("Atlantis FC", 3)], &standings, &picks).unwrap();
        assert!(after.missing.is_empty());
        assert_eq!(after.player("Alice").unwrap().total, 18);
    }

    #[test]
    fn test_out_of_range_uses_table_size() {
        let standings = Standings::from_rows(
            (1..=18)
                .map(|p| StandingsRow::new(p, format!("Team {}", p), 0))
                .collect(),
            StandingsSource::Live,
        );
        let result = simulate(&[set("Team 1", 19)], &standings, &picks());
        assert!(matches!(
            result,
            Err(SweepstakeError::PositionOutOfRange { table_size: 18, .. })
        ));
    }
}
