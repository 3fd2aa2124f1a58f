//! Leaderboard command implementation

use serde::Serialize;
use tracing::info;

use super::common::{ordinal, print_json, source_banner, CommandContext};
use crate::{
    core::cache::StandingsCache,
    pulse::Standings,
    sweepstake::{banter, score, Leaderboard, PlayerTotal},
    Result, StandingsSource,
};

#[derive(Debug, Serialize)]
pub struct LeaderboardView<'a> {
    pub season: &'a str,
    pub source: &'a StandingsSource,
    pub fetched_at: String,
    #[serde(flatten)]
    pub leaderboard: &'a Leaderboard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banter: Option<&'a str>,
}

fn badge(board: &Leaderboard, player: &PlayerTotal) -> &'static str {
    if board.leaders.contains(&player.player) {
        " 👑"
    } else if board.wooden_spoon.contains(&player.player) {
        " 🥄"
    } else {
        ""
    }
}

/// Text rendering shared by the leaderboard and what-if commands.
pub fn render_leaderboard(board: &Leaderboard) -> String {
    let mut out = String::new();

    for player in &board.players {
        out.push_str(&format!(
            "{:>2}. {}{}: {} pts\n",
            player.rank,
            player.player,
            badge(board, player),
            player.total
        ));
        for pick in &player.picks {
            let position = if pick.found && pick.position > 0 {
                ordinal(pick.position)
            } else {
                "n/a".to_string()
            };
            let marker = if pick.overridden { " (what-if)" } else { "" };
            out.push_str(&format!(
                "      {:<26} {:>5}  {:>3} league pts  -> {} pts{}\n",
                pick.team, position, pick.league_points, pick.point_value, marker
            ));
        }
    }

    if !board.missing.is_empty() {
        out.push_str("\n⚠ Could not find standings data for:\n");
        for m in &board.missing {
            out.push_str(&format!("  - {} ({})\n", m.team, m.player));
        }
    }

    if board.is_all_zero() && !board.players.is_empty() {
        out.push_str("\nNo sweepstake points on the board yet.\n");
    }

    out
}

fn print_text(season: &str, standings: &Standings, board: &Leaderboard, banter: Option<&str>) {
    println!("Leaderboard {}", season);
    println!("{}\n", source_banner(standings));
    print!("{}", render_leaderboard(board));
    if let Some(line) = banter {
        println!("\n📢 BanterBot: {}", line);
    }
}

/// Handle the leaderboard command
pub async fn handle_leaderboard(
    ctx: &CommandContext,
    cache: &StandingsCache,
    no_banter: bool,
) -> Result<()> {
    let picks = ctx.load_roster()?;
    let standings = ctx.load_standings(cache).await?;

    let board = score(&picks, &standings);
    if board.is_all_zero() {
        info!("All totals are zero for {}", ctx.config.season);
    }

    let banter_line = (!no_banter).then(|| banter(&board.ranked_names(), &mut rand::thread_rng()));
    let season = ctx.config.season.as_str();

    if ctx.as_json {
        print_json(&LeaderboardView {
            season,
            source: &standings.source,
            fetched_at: standings.fetched_at.to_rfc3339(),
            leaderboard: &board,
            banter: banter_line.as_deref(),
        })?;
    } else {
        print_text(season, &standings, &board, banter_line.as_deref()); // tarpaulin::skip
    }

    Ok(())
}
