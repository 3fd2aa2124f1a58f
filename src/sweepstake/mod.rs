//! Sweepstake rules on top of the standings.
//!
//! - `roster`: who picked which team
//! - `scoring`: per-player totals, ranks, leaders and wooden spoon
//! - `simulator`: what-if positions
//! - `banter`: a line of commentary for the leaderboard

pub mod banter;
pub mod roster;
pub mod scoring;
pub mod simulator;

pub use banter::banter;
pub use roster::{default_roster, load_roster, parse_roster, PlayerPick};
pub use scoring::{score, Leaderboard, PlayerTotal, ScoredPick};
pub use simulator::{simulate, validate_overrides};
