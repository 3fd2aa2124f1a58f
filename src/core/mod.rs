//! Core utilities shared across the sweepstake CLI
//!
//! - `cache`: two-tier TTL cache (memory LRU + JSON files)
//! - `http`: reqwest client construction with browser-like headers

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{
    default_cache_dir, try_read_to_string, write_string, CacheKey, StandingsCache, TtlCache,
    GLOBAL_CACHE,
};
pub use http::{browser_header_map, build_client, DEFAULT_USER_AGENT, REQUEST_TIMEOUT_SECS};
