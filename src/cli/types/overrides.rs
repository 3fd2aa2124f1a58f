//! What-if override argument parsing (`--set "Team Name=POSITION"`).

use crate::error::{Result, SweepstakeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hypothetical table position for one team.
///
/// Team names may contain spaces and `&`, so the position is split off the
/// last `=` in the argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOverride {
    pub team: String,
    pub position: u32,
}

impl TeamOverride {
    pub fn new(team: impl Into<String>, position: u32) -> Self {
        Self {
            team: team.into(),
            position,
        }
    }
}

impl fmt::Display for TeamOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.team, self.position)
    }
}

impl FromStr for TeamOverride {
    type Err = SweepstakeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SweepstakeError::InvalidOverride {
            input: s.to_string(),
        };

        let (team, position) = s.rsplit_once('=').ok_or_else(invalid)?;
        let team = team.trim();
        if team.is_empty() {
            return Err(invalid());
        }
        let position = position.trim().parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(team, position))
    }
}
