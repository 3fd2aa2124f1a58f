//! Standings command implementation

use serde::Serialize;

use super::common::{print_json, source_banner, CommandContext};
use crate::{core::cache::StandingsCache, pulse::Standings, Result, StandingsSource};

#[derive(Debug, Serialize)]
pub struct StandingsRowView<'a> {
    pub position: u32,
    pub team: &'a str,
    pub league_points: i64,
    pub point_value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crest_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct StandingsView<'a> {
    pub season: &'a str,
    pub source: &'a StandingsSource,
    pub fetched_at: String,
    pub table_size: u32,
    pub rows: Vec<StandingsRowView<'a>>,
}

impl<'a> StandingsView<'a> {
    pub fn new(season: &'a str, standings: &'a Standings) -> Self {
        Self {
            season,
            source: &standings.source,
            fetched_at: standings.fetched_at.to_rfc3339(),
            table_size: standings.table_size,
            rows: standings
                .rows
                .iter()
                .map(|row| StandingsRowView {
                    position: row.position,
                    team: &row.team,
                    league_points: row.league_points,
                    point_value: standings.point_value_of(row),
                    crest_url: row.crest_url.as_deref(),
                })
                .collect(),
        }
    }
}

/// Text table: position, team, league points and sweepstake worth.
pub fn render_standings(season: &str, standings: &Standings) -> String {
    let mut out = format!("Premier League {}\n{}\n\n", season, source_banner(standings));
    out.push_str(&format!(
        "{:>3}  {:<26} {:>6} {:>6}\n",
        "Pos", "Team", "Pts", "Worth"
    ));
    for row in &standings.rows {
        let position = if row.position == 0 {
            "-".to_string()
        } else {
            row.position.to_string()
        };
        out.push_str(&format!(
            "{:>3}  {:<26} {:>6} {:>6}\n",
            position,
            row.team,
            row.league_points,
            standings.point_value_of(row)
        ));
    }
    out
}

/// Handle the standings command
pub async fn handle_standings(ctx: &CommandContext, cache: &StandingsCache) -> Result<()> {
    let standings = ctx.load_standings(cache).await?;
    let season = ctx.config.season.as_str();

    if ctx.as_json {
        print_json(&StandingsView::new(season, &standings))?;
    } else {
        print!("{}", render_standings(season, &standings)); // tarpaulin::skip
    }

    Ok(())
}
