// src/pulse/cache_standings.rs
use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use super::http::PulseApi;
use super::standings::fetch_season_standings;
use super::types::Standings;
use crate::cli::types::SeasonLabel;
use crate::core::cache::StandingsCache;

/// Try the standings cache first. On a miss (or `refresh == true`) run the
/// full fetch pipeline and cache the result for `ttl`.
///
/// Fallback standings are never written to the cache, so the next call
/// retries the live source.
pub async fn load_or_fetch_standings(
    api: &PulseApi,
    cache: &StandingsCache,
    label: &SeasonLabel,
    refresh: bool,
    ttl: Duration,
) -> Standings {
    // 1) Try cache (unless refresh)
    if refresh {
        if let Err(e) = cache.invalidate(label) {
            warn!("Could not invalidate cached standings for {}: {}", label, e);
        }
    } else if let Some(standings) = cache.get(label, Utc::now()) {
        info!("Using cached standings for {}", label);
        return standings;
    }

    // 2) Fetch (never fails; degrades to the snapshot)
    let standings = fetch_season_standings(api, label).await;

    // 3) Cache live and pre-season results only
    if standings.source.is_fallback() {
        debug!("Not caching fallback standings for {}", label);
    } else {
        cache.put(label.clone(), standings.clone(), Utc::now() + ttl);
    }

    standings
}
