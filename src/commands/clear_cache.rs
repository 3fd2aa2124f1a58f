//! Clear-cache command implementation

use crate::{core::cache::StandingsCache, Result, SeasonLabel};

/// Handle the clear-cache command
pub fn handle_clear_cache(cache: &StandingsCache, season: &SeasonLabel, all: bool) -> Result<()> {
    if all {
        cache.invalidate_all()?;
        println!("✓ Cleared all cached standings");
    } else {
        cache.invalidate(season)?;
        println!("✓ Cleared cached standings for {}", season);
    }

    if let Some(dir) = cache.dir() {
        println!("Cache directory: {}", dir.display()); // tarpaulin::skip
    }

    Ok(())
}
