//! Premier League (Pulse Live) standings provider.
//!
//! - `http`: thin client over the public football API
//! - `probe`: ordered field-path probes for loosely shaped JSON
//! - `season`: season label -> season id resolution
//! - `standings`: table extraction with static fallback
//! - `cache_standings`: TTL cache in front of the fetch pipeline

pub mod cache_standings;
pub mod fallback;
pub mod http;
pub mod probe;
pub mod season;
pub mod standings;
pub mod types;

pub use cache_standings::load_or_fetch_standings;
pub use http::PulseApi;
pub use season::{normalize_comp_id, resolve_season};
pub use standings::{fetch_season_standings, fetch_standings, resolve_comp_season};
pub use types::{CompSeasonId, SeasonDescriptor, Standings, StandingsRow, StandingsSource};
