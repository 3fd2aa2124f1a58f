//! Command implementations for the sweepstake CLI

pub mod clear_cache;
pub mod common;
pub mod leaderboard;
pub mod standings;
pub mod what_if;
