//! Season label type for Premier League seasons.

use crate::error::{Result, SweepstakeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Human season label as the Premier League writes it, e.g. `2025/26`.
///
/// The label is the cache key for fetched standings and the first thing the
/// season resolver tries to match against.
///
/// # Examples
///
/// ```rust
/// use pl_sweepstake::SeasonLabel;
///
/// let season: SeasonLabel = "2025/26".parse().unwrap();
/// assert_eq!(season.start_year(), Some(2025));
/// assert_eq!(season.to_string(), "2025/26");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonLabel(String);

impl SeasonLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading year of the label (`"2025/26"` -> 2025).
    pub fn start_year(&self) -> Option<i32> {
        self.0.trim().split('/').next()?.trim().parse().ok()
    }

    /// Filesystem-safe form used for cache file names.
    ///
    /// `/` becomes `-` and any other non-alphanumeric byte is written as
    /// `_XX` hex, so distinct labels never share a file.
    pub fn file_stem(&self) -> String {
        let mut stem = String::with_capacity(self.0.len());
        for byte in self.0.bytes() {
            match byte {
                b'/' => stem.push('-'),
                b if b.is_ascii_alphanumeric() => stem.push(char::from(b)),
                b => stem.push_str(&format!("_{:02X}", b)),
            }
        }
        stem
    }
}

impl Default for SeasonLabel {
    fn default() -> Self {
        Self(crate::DEFAULT_SEASON_LABEL.to_string())
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonLabel {
    type Err = SweepstakeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SweepstakeError::InvalidSeasonLabel {
                label: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}
