//! Integration tests for scoring and the what-if simulator

use pl_sweepstake::{
    pulse::{fallback::fallback_standings, types::point_value},
    sweepstake::{parse_roster, score, simulate},
    PlayerPick, Standings, StandingsRow, StandingsSource, SweepstakeError, TeamOverride,
};

fn twenty(prefix: &str) -> Standings {
    let rows = (1..=20)
        .map(|p| StandingsRow::new(p, format!("{} {}", prefix, p), 0))
        .collect();
    Standings::from_rows(rows, StandingsSource::Live)
}

#[test]
fn test_point_value_complements_position() {
    for position in 1..=20 {
        assert_eq!(point_value(position, 20) + position, 21);
    }
    assert_eq!(point_value(0, 20), 0);
    assert_eq!(point_value(21, 20), 0);
}

#[test]
fn test_alice_beats_bob() {
    let standings = Standings::from_rows(
        (1..=20)
            .map(|p| {
                let team = match p {
                    1 => "X".to_string(),
                    10 => "Z".to_string(),
                    20 => "Y".to_string(),
                    _ => format!("Filler {}", p),
                };
                StandingsRow::new(p, team, 0)
            })
            .collect(),
        StandingsSource::Live,
    );
    let picks = vec![
        PlayerPick::new("Alice", "X"),
        PlayerPick::new("Alice", "Y"),
        PlayerPick::new("Bob", "Z"),
    ];

    let board = score(&picks, &standings);

    assert_eq!(board.player("Alice").unwrap().total, 21);
    assert_eq!(board.player("Bob").unwrap().total, 11);
    assert_eq!(board.leaders, vec!["Alice"]);
    assert_eq!(board.players[0].rank, 1);
    assert_eq!(board.players[1].rank, 2);
}

#[test]
fn test_roster_file_to_leaderboard() {
    let picks = parse_roster(
        r#"{
            "Alice": ["Team 1", "Team 20"],
            "Bob": ["Team 2", "Team 19"],
            "Cara": ["Team 3", "Nowhere United"]
        }"#,
    )
    .unwrap();

    let board = score(&picks, &twenty("Team"));

    assert_eq!(board.player("Alice").unwrap().total, 21);
    assert_eq!(board.player("Bob").unwrap().total, 21);
    assert_eq!(board.player("Cara").unwrap().total, 18);
    assert_eq!(board.leaders, vec!["Alice", "Bob"]);
    assert_eq!(board.wooden_spoon, vec!["Cara"]);
    assert_eq!(board.missing, vec![PlayerPick::new("Cara", "Nowhere United")]);
}

#[test]
fn test_what_if_changes_only_affected_players() {
    let standings = twenty("Team");
    let picks = vec![
        PlayerPick::new("Alice", "Team 18"),
        PlayerPick::new("Bob", "Team 12"),
    ];
    let before = score(&picks, &standings);

    let after = simulate(&[TeamOverride::new("Team 18", 1)], &standings, &picks).unwrap();

    assert_eq!(after.player("Alice").unwrap().total, 20);
    assert_eq!(
        after.player("Bob").unwrap().total,
        before.player("Bob").unwrap().total
    );
    assert_eq!(after.leaders, vec!["Alice"]);
    assert_eq!(before.leaders, vec!["Bob"]);
}

#[test]
fn test_what_if_conflict_message() {
    let standings = twenty("Team");
    let picks = vec![PlayerPick::new("Alice", "Team 18")];

    let err = simulate(
        &[TeamOverride::new("Team 18", 5), TeamOverride::new("Team 7", 5)],
        &standings,
        &picks,
    )
    .unwrap_err();

    assert!(matches!(err, SweepstakeError::PositionConflict { .. }));
    assert_eq!(
        err.to_string(),
        "Position conflicts detected: Position 5 assigned to 2 teams: Team 18, Team 7"
    );
}

#[test]
fn test_fallback_snapshot_values() {
    let standings = fallback_standings("network down");

    assert!(standings.source.is_fallback());
    assert_eq!(standings.table_size, 20);
    let values: Vec<u32> = standings
        .rows
        .iter()
        .map(|r| standings.point_value_of(r))
        .collect();
    assert_eq!(values, (1..=20).rev().collect::<Vec<u32>>());
}
