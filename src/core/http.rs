//! HTTP utilities for the football data API

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Outbound calls fail fast; a timeout sends the caller to fallback data.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

const SITE_ORIGIN: &str = "https://www.premierleague.com";
const SITE_REFERER: &str = "https://www.premierleague.com/tables";

/// Headers that make requests look like they come from the league website.
pub fn browser_header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(ORIGIN, HeaderValue::from_static(SITE_ORIGIN));
    h.insert(REFERER, HeaderValue::from_static(SITE_REFERER));
    Ok(h)
}

/// Build the shared client: browser headers, fixed timeout, no retries.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .default_headers(browser_header_map(user_agent)?)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SweepstakeError;

    #[test]
    fn test_browser_header_map_contents() {
        let headers = browser_header_map(DEFAULT_USER_AGENT).unwrap();

        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[ORIGIN], SITE_ORIGIN);
        assert_eq!(headers[REFERER], SITE_REFERER);
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_browser_header_map_rejects_bad_user_agent() {
        match browser_header_map("bad\nagent") {
            Err(SweepstakeError::InvalidHeader(_)) => (),
            other => panic!("Expected InvalidHeader, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_build_client() {
        assert!(build_client("pl-sweepstake-test", Duration::from_secs(1)).is_ok());
    }
}
