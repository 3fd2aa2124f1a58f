//! Ordered field-path probes over loosely shaped JSON.
//!
//! The football API changes field names and nesting between endpoints and
//! seasons. Instead of a rigid deserializer, every logical value is read by
//! trying a list of candidate paths in order and keeping the first hit.

use serde_json::Value;

/// A path of object keys, e.g. `&["team", "club", "name"]`.
pub type FieldPath = &'static [&'static str];

/// Walk `path` through nested objects. `null` counts as absent.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// First probe that yields a present value (non-null, non-blank string).
pub fn first_present<'a>(value: &'a Value, probes: &[FieldPath]) -> Option<&'a Value> {
    probes
        .iter()
        .filter_map(|path| lookup(value, path))
        .find(|v| is_present(v))
}

/// First present value rendered as a trimmed string.
pub fn first_str(value: &Value, probes: &[FieldPath]) -> Option<String> {
    first_present(value, probes).and_then(|v| match v {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Integer reading of a JSON scalar.
///
/// Floats and fractional-looking strings (`"20.0"`) are rounded; blank or
/// non-numeric values give `None`.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

/// Truthiness of a loosely typed flag (`true`, `1`, `"true"`).
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}

/// List items from the first probe that holds an array.
///
/// A bare object under a probe is treated as a one-element list, and a root
/// array is used when no probe matches.
pub fn items<'a>(value: &'a Value, probes: &[FieldPath]) -> Vec<&'a Value> {
    for path in probes {
        match lookup(value, path) {
            Some(Value::Array(list)) if !list.is_empty() => return list.iter().collect(),
            Some(obj @ Value::Object(_)) => return vec![obj],
            _ => continue,
        }
    }
    match value {
        Value::Array(list) => list.iter().collect(),
        _ => Vec::new(),
    }
}
