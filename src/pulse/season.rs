//! Season label -> season id resolution.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::probe::{first_present, first_str, is_truthy, lookup, FieldPath};
use super::types::{CompSeasonId, SeasonDescriptor};
use crate::cli::types::SeasonLabel;


const LABEL: &[FieldPath] = &[&["label"], &["competition", "label"]];
const ID: &[FieldPath] = &[&["id"], &["compSeason", "id"]];
const START: &[FieldPath] = &[&["startDate"], &["start", "date"]];
const CURRENT: &[FieldPath] = &[&["isCurrent"], &["current"]];

/// Coerce a raw season id into an integer id.
///
/// Integers pass through, floats are rounded and numeric strings
/// (`"777"`, `" 777.0 "`) are parsed. Anything else is handed back
/// unchanged as [`CompSeasonId::Unresolved`].
pub fn normalize_comp_id(value: &Value) -> CompSeasonId {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(id) => CompSeasonId::Resolved(id),
            None => match n.as_f64().filter(|f| f.is_finite()) {
                Some(f) => CompSeasonId::Resolved(f.round() as i64),
                None => CompSeasonId::Unresolved(n.to_string()),
            },
        },
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.round() as i64)
                })
                .map(CompSeasonId::Resolved)
                .unwrap_or_else(|| CompSeasonId::Unresolved(s.clone()))
        }
        other => CompSeasonId::Unresolved(other.to_string()),
    }
}

/// Parse a season start date.
///
/// Accepts ISO strings with or without a `T` separator and trailing `Z`,
/// RFC 3339 offsets, bare dates, and epoch milliseconds (either a number or
/// an object carrying `millis`).
pub fn parse_start_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => n.as_i64().and_then(from_millis),
        Value::Object(_) => lookup(value, &["millis"])
            .and_then(|m| m.as_i64())
            .and_then(from_millis),
        _ => None,
    }
}

fn from_millis(ms: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.naive_utc())
}

fn parse_date_str(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let cleaned = s.trim_end_matches('Z').replace('T', " ");
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&cleaned, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl SeasonDescriptor {
    /// Probe one season record out of a season-list item.
    pub fn from_value(item: &Value) -> Self {
        Self {
            label: first_str(item, LABEL),
            id: first_present(item, ID).map(normalize_comp_id),
            start_date: first_present(item, START).and_then(parse_start_date),
            is_current: CURRENT
                .iter()
                .any(|path| lookup(item, path).is_some_and(is_truthy)),
        }
    }
}

/// Pick the season id for `label`.
///
/// In priority order: exact label match, start-year match, the season
/// flagged current, the latest parseable start date. Descriptors without an
/// id never win. `None` means the caller has to fall back to static data.
pub fn resolve_season(label: &SeasonLabel, descriptors: &[SeasonDescriptor]) -> Option<CompSeasonId> {
    let with_id = || descriptors.iter().filter(|d| d.id.is_some());

    let by_label = with_id().find(|d| d.label.as_deref() == Some(label.as_str()));

    let by_start_year = || {
        let year = label.start_year()?;
        with_id().find(|d| d.start_date.is_some_and(|dt| dt.year() == year))
    };

    let by_current = || with_id().find(|d| d.is_current);

    let by_latest = || {
        with_id()
            .filter(|d| d.start_date.is_some())
            .max_by_key(|d| d.start_date)
    };

    by_label
        .or_else(by_start_year)
        .or_else(by_current)
        .or_else(by_latest)
        .and_then(|d| d.id.clone())
}
