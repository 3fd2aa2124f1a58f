//! Static standings snapshot and crest lookups.

use super::types::{Standings, StandingsRow, StandingsSource};

const BADGE_BASE_URL: &str = "https://resources.premierleague.com/premierleague/badges/50";

/// Previous-season final table: (team, league points), in position order.
const SNAPSHOT: [(&str, i64); 20] = [
    ("Liverpool", 70),
    ("Arsenal", 58),
    ("Nottingham Forest", 54),
    ("Chelsea", 49),
    ("Manchester City", 48),
    ("Newcastle United", 47),
    ("Brighton and Hove Albion", 47),
    ("Fulham", 45),
    ("Aston Villa", 45),
    ("Bournemouth", 44),
    ("Brentford", 41),
    ("Crystal Palace", 39),
    ("Manchester United", 37),
    ("Tottenham Hotspur", 34),
    ("Everton", 34),
    ("West Ham United", 34),
    ("Wolverhampton Wanderers", 26),
    ("Ipswich Town", 17),
    ("Leicester City", 17),
    ("Southampton", 9),
];

/// Opta id used by the badge CDN (`t{n}`), keyed by API team name.
pub fn opta_id(team: &str) -> Option<&'static str> {
    let id = match team {
        "Arsenal" => "t3",
        "Aston Villa" => "t7",
        "Bournemouth" | "AFC Bournemouth" => "t91",
        "Brentford" => "t94",
        "Brighton & Hove Albion" | "Brighton and Hove Albion" => "t36",
        "Burnley" => "t90",
        "Chelsea" => "t8",
        "Crystal Palace" => "t31",
        "Everton" => "t11",
        "Fulham" => "t54",
        "Ipswich Town" => "t40",
        "Leeds United" => "t2",
        "Leicester City" => "t13",
        "Liverpool" => "t14",
        "Luton Town" => "t102",
        "Manchester City" => "t43",
        "Manchester United" => "t1",
        "Newcastle United" => "t4",
        "Nottingham Forest" => "t17",
        "Sheffield United" => "t49",
        "Southampton" => "t20",
        "Sunderland" => "t56",
        "Tottenham Hotspur" => "t6",
        "Watford" => "t57",
        "West Ham United" => "t21",
        "Wolverhampton Wanderers" => "t39",
        _ => return None,
    };
    Some(id)
}

/// Badge URL for an Opta id; `t0` is the API's "unknown" marker.
pub fn crest_url(opta: &str) -> Option<String> {
    let opta = opta.trim();
    if opta.is_empty() || opta == "t0" {
        return None;
    }
    Some(format!("{BADGE_BASE_URL}/{opta}.png"))
}

/// The fixed 20-row table used whenever live data cannot be loaded.
pub fn fallback_standings(reason: impl Into<String>) -> Standings {
    let rows = SNAPSHOT
        .iter()
        .zip(1u32..)
        .map(|(&(team, points), position)| StandingsRow {
            position,
            team: team.to_string(),
            league_points: points,
            crest_url: opta_id(team).and_then(crest_url),
        })
        .collect();

    Standings::from_rows(
        rows,
        StandingsSource::Fallback {
            reason: reason.into(),
        },
    )
}
