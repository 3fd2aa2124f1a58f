use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::debug;

use super::probe::{first_str, items, FieldPath};
use crate::core::http::{build_client, REQUEST_TIMEOUT_SECS};
use crate::error::{Result, SweepstakeError};


/// Base path for the Premier League's public football API.
pub const PULSE_BASE_URL: &str = "https://footballapi.pulselive.com/football";

/// Premier League competition id on the football API.
const COMPETITION_ID: u32 = 1;

const SEASON_ITEMS: &[FieldPath] = &[&["compSeasons"], &["seasons"], &["content"]];
const TEAM_ITEMS: &[FieldPath] = &[&["teams"], &["clubs"], &["content"]];
const TEAM_LIST_NAME: &[FieldPath] = &[
    &["name"],
    &["team", "name"],
    &["club", "name"],
    &["displayName"],
];

/// Client for the football API rooted at a configurable base URL.
#[derive(Debug, Clone)]
pub struct PulseApi {
    client: Client,
    base_url: String,
}

impl PulseApi {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let client = build_client(user_agent, Duration::from_secs(REQUEST_TIMEOUT_SECS))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{path}` and parse JSON. Any non-200 status is an error.
    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);

        let res = self.client.get(&url).query(params).send().await?;
        let status = res.status();
        if status != reqwest::StatusCode::OK {
            return Err(SweepstakeError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(res.json::<Value>().await?)
    }

    /// Collect season records from every season-list endpoint that answers.
    ///
    /// Endpoints disagree on pagination and envelope, so all of them are
    /// tried and their items concatenated. Failures are skipped.
    pub async fn get_comp_seasons(&self) -> Vec<Value> {
        let paged = || {
            vec![
                ("page", "0".to_string()),
                ("pageSize", "120".to_string()),
            ]
        };
        let sources: [(String, Vec<(&str, String)>); 3] = [
            (format!("competitions/{COMPETITION_ID}/compseasons"), paged()),
            (
                "compseasons".to_string(),
                [vec![("comps", COMPETITION_ID.to_string())], paged()].concat(),
            ),
            (format!("competitions/{COMPETITION_ID}/compseasons"), Vec::new()),
        ];

        let mut seasons = Vec::new();
        for (path, params) in &sources {
            match self.get_json(path, params).await {
                Ok(js) => {
                    let found = items(&js, SEASON_ITEMS);
                    debug!("{} season records from {}", found.len(), path);
                    seasons.extend(found.into_iter().cloned());
                }
                Err(e) => debug!("Season source {} skipped: {}", path, e),
            }
        }
        seasons
    }

    /// Raw standings payload for a season id.
    pub async fn get_standings(&self, comp_season: i64) -> Result<Value> {
        let params = [
            ("compSeasons", comp_season.to_string()),
            ("altIds", "true".to_string()),
            ("detail", "2".to_string()),
        ];
        self.get_json("standings", &params).await
    }

    /// Team names registered to a season, sorted and de-duplicated.
    ///
    /// Used before the first matchday, when the table has no entries yet.
    /// Returns an empty list when no endpoint answers.
    pub async fn get_comp_season_teams(&self, comp_season: i64) -> Vec<String> {
        let sources: [(String, Vec<(&str, String)>); 2] = [
            (
                format!("competitions/{COMPETITION_ID}/compseasons/{comp_season}/teams"),
                Vec::new(),
            ),
            (
                "teams".to_string(),
                vec![
                    ("comps", COMPETITION_ID.to_string()),
                    ("compSeasons", comp_season.to_string()),
                ],
            ),
        ];

        let mut names = BTreeSet::new();
        for (path, params) in &sources {
            match self.get_json(path, params).await {
                Ok(js) => names.extend(team_names(&js)),
                Err(e) => debug!("Team source {} skipped: {}", path, e),
            }
        }
        names.into_iter().collect()
    }
}

/// Team names out of a team-list payload.
pub fn team_names(payload: &Value) -> Vec<String> {
    items(payload, TEAM_ITEMS)
        .into_iter()
        .filter_map(|it| first_str(it, TEAM_LIST_NAME))
        .collect()
}
